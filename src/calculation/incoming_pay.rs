//! Incoming-pay estimation.
//!
//! "Incoming" is pay that has been earned but not yet banked. The current
//! week always counts; the previous full week also counts unless a
//! `payCashed` flag appears on a log inside the current week, which means
//! that week's paycheck arrived and everything before the current week is
//! settled.

use std::collections::BTreeMap;

use crate::calendar::sunday_starting_week;
use crate::error::EngineResult;
use crate::models::WorkLog;

use super::week_pay::calculate_week_pay;

/// Per-job buckets for the two countable weeks.
#[derive(Default)]
struct JobWeeks<'a> {
    current: Vec<&'a WorkLog>,
    previous: Vec<&'a WorkLog>,
}

/// Estimates earned-but-not-banked pay as of `target_day_index`.
///
/// The algorithm:
///
/// 1. Logs dated after the target day never count ("as of" semantics:
///    querying an earlier day sees history as it stood on that day, so a
///    `payCashed` flag dated later in the same week is invisible to it).
/// 2. If any visible log inside the current week carries `payCashed`, only
///    the current week counts; otherwise the previous full week counts
///    too. Flags on logs from earlier weeks gate nothing.
/// 3. Countable logs are partitioned by job and by week, and each
///    job/week bucket is aggregated separately, because the 40-hour
///    weekly threshold resets every week and is independent per job.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] if any log carries a
/// malformed date string.
///
/// # Example
///
/// ```
/// use finance_display::calculation::calculate_incoming_pay;
/// use finance_display::calendar::date_to_day_index;
/// use finance_display::models::WorkLog;
///
/// let logs = vec![WorkLog {
///     id: 1,
///     date: "2024-12-28".to_string(),
///     job_id: "grocery".to_string(),
///     hours: 2.0,
///     pay_rate: 10.0,
///     tax_rate: 0.25,
///     pay_cashed: false,
/// }];
/// let target = date_to_day_index("2024-12-28").unwrap();
/// assert_eq!(calculate_incoming_pay(target, &logs).unwrap(), 15.0);
/// ```
pub fn calculate_incoming_pay(target_day_index: i64, work_logs: &[WorkLog]) -> EngineResult<f64> {
    let current_week_sunday = sunday_starting_week(target_day_index);
    let previous_week_sunday = current_week_sunday - 7;

    let mut visible: Vec<(i64, &WorkLog)> = Vec::new();
    for log in work_logs {
        let day = log.day_index()?;
        if day <= target_day_index {
            visible.push((day, log));
        }
    }

    // Only a cash-out flagged in the current week excludes the prior week.
    let cashed_this_week = visible
        .iter()
        .any(|(day, log)| *day >= current_week_sunday && log.pay_cashed);

    let mut by_job: BTreeMap<&str, JobWeeks<'_>> = BTreeMap::new();
    for &(day, log) in &visible {
        if day >= current_week_sunday {
            by_job.entry(log.job_id.as_str()).or_default().current.push(log);
        } else if !cashed_this_week && day >= previous_week_sunday {
            by_job.entry(log.job_id.as_str()).or_default().previous.push(log);
        }
    }

    let total = by_job
        .values()
        .map(|weeks| calculate_week_pay(&weeks.current) + calculate_week_pay(&weeks.previous))
        .sum();
    Ok(total)
}
