//! Single-day pay attribution for chart annotation.

use std::collections::BTreeMap;

use crate::calendar::sunday_starting_week;
use crate::error::EngineResult;
use crate::models::WorkLog;

use super::session_pay::calculate_session_pay;

/// Computes the pay attributable to exactly one calendar day.
///
/// This is the chart's "how much of incoming came from today" figure. For
/// each job, the sessions from the current week strictly before the target
/// day establish the accumulated regular hours, and only the sessions
/// dated exactly on the target day are priced against that baseline. The
/// fold continues across multiple same-day logs for one job, so a second
/// session on the day sees the first one's hours.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] if any log carries a
/// malformed date string.
///
/// # Example
///
/// ```
/// use finance_display::calculation::calculate_daily_pay_earned;
/// use finance_display::calendar::date_to_day_index;
/// use finance_display::models::WorkLog;
///
/// let log = |id: i32, date: &str, hours: f64| WorkLog {
///     id,
///     date: date.to_string(),
///     job_id: "grocery".to_string(),
///     hours,
///     pay_rate: 10.0,
///     tax_rate: 0.0,
///     pay_cashed: false,
/// };
///
/// // 40 regular hours Sun-Thu, then 8 hours Friday: Friday is entirely
/// // weekly overtime, worth 8 x $15 on its own.
/// let logs: Vec<WorkLog> = (0..5)
///     .map(|d| log(d, &format!("2025-01-{:02}", 5 + d), 8.0))
///     .chain(std::iter::once(log(9, "2025-01-10", 8.0)))
///     .collect();
/// let friday = date_to_day_index("2025-01-10").unwrap();
/// assert_eq!(calculate_daily_pay_earned(friday, &logs).unwrap(), 120.0);
/// ```
pub fn calculate_daily_pay_earned(
    target_day_index: i64,
    work_logs: &[WorkLog],
) -> EngineResult<f64> {
    let week_sunday = sunday_starting_week(target_day_index);

    // Current-week sessions up to and including the target day, per job.
    let mut by_job: BTreeMap<&str, Vec<(i64, &WorkLog)>> = BTreeMap::new();
    for log in work_logs {
        let day = log.day_index()?;
        if day >= week_sunday && day <= target_day_index {
            by_job.entry(log.job_id.as_str()).or_default().push((day, log));
        }
    }

    let mut total = 0.0;
    for sessions in by_job.values_mut() {
        // Stable: same-day logs keep entry order.
        sessions.sort_by(|a, b| a.0.cmp(&b.0));

        let mut accumulated_regular_hours = 0.0;
        for (day, log) in sessions.iter() {
            let pay = calculate_session_pay(
                log.hours,
                log.pay_rate,
                log.tax_rate,
                accumulated_regular_hours,
            );
            if *day == target_day_index {
                total += pay.take_home_pay;
            }
            accumulated_regular_hours += pay.regular_hours;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::date_to_day_index;

    fn log(id: i32, date: &str, job: &str, hours: f64) -> WorkLog {
        WorkLog {
            id,
            date: date.to_string(),
            job_id: job.to_string(),
            hours,
            pay_rate: 10.0,
            tax_rate: 0.0,
            pay_cashed: false,
        }
    }

    fn earned_on(date: &str, logs: &[WorkLog]) -> f64 {
        calculate_daily_pay_earned(date_to_day_index(date).unwrap(), logs).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_logs_on_day_is_zero() {
        let logs = vec![log(1, "2025-01-06", "grocery", 8.0)];
        assert_close(earned_on("2025-01-07", &logs), 0.0);
    }

    #[test]
    fn test_day_priced_against_week_baseline() {
        // Sun 4h + Mon-Thu 8h/day builds a 36-hour regular baseline;
        // Friday's 8 hours split 4 regular, 4 weekly overtime.
        let mut logs = vec![log(0, "2025-01-05", "grocery", 4.0)];
        logs.extend((0..4).map(|d| log(1 + d, &format!("2025-01-{:02}", 6 + d), "grocery", 8.0)));
        logs.push(log(9, "2025-01-10", "grocery", 8.0));
        // Friday alone: $40 regular + 4h x $15 OT.
        assert_close(earned_on("2025-01-10", &logs), 100.0);
    }

    #[test]
    fn test_daily_overtime_on_the_day_itself() {
        let logs = vec![log(1, "2025-01-06", "grocery", 10.0)];
        assert_close(earned_on("2025-01-06", &logs), 110.0);
    }

    #[test]
    fn test_earlier_days_of_week_ignore_later_logs() {
        let logs = vec![
            log(1, "2025-01-06", "grocery", 8.0),
            log(2, "2025-01-07", "grocery", 8.0),
        ];
        // Monday's figure is unaffected by Tuesday's session.
        assert_close(earned_on("2025-01-06", &logs), 80.0);
    }

    #[test]
    fn test_previous_week_does_not_feed_baseline() {
        // 40 hours last week must not push this Monday into overtime.
        let mut logs: Vec<WorkLog> = (0..5)
            .map(|d| log(d, &format!("2024-12-{}", 23 + d), "grocery", 8.0))
            .collect();
        logs.push(log(9, "2024-12-30", "grocery", 8.0));
        assert_close(earned_on("2024-12-30", &logs), 80.0);
    }

    #[test]
    fn test_multiple_same_day_logs_accumulate() {
        // Two 5-hour sessions on one day: each under the daily cap, summed.
        let logs = vec![
            log(1, "2025-01-06", "grocery", 5.0),
            log(2, "2025-01-06", "grocery", 5.0),
        ];
        assert_close(earned_on("2025-01-06", &logs), 100.0);
    }

    #[test]
    fn test_jobs_attributed_independently() {
        let logs = vec![
            log(1, "2025-01-06", "grocery", 8.0),
            log(2, "2025-01-06", "warehouse", 4.0),
        ];
        assert_close(earned_on("2025-01-06", &logs), 120.0);
    }
}
