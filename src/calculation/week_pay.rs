//! Weekly pay aggregation for one job.

use crate::models::WorkLog;

use super::session_pay::calculate_session_pay;

/// Sums take-home pay for one job's sessions within one calendar week.
///
/// Sessions are replayed in date order through the session calculator,
/// carrying the accumulated regular hours forward so the 40-hour weekly
/// cap applies across the whole week. The sort is stable: same-day logs
/// keep their entry order.
///
/// The caller is responsible for the restriction in the name: the slice
/// must hold a single job's sessions from a single week. Mixing jobs
/// would share one 40-hour allowance between independent jobs, and mixing
/// weeks would let one week's hours exhaust another's; both corrupt the
/// overtime boundary.
///
/// # Example
///
/// ```
/// use finance_display::calculation::calculate_week_pay;
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
/// // Five 8-hour days exactly fill the weekly allowance.
/// let week: Vec<WorkLog> = (0..5)
///     .map(|d| log(d, &format!("2025-01-0{}", d + 5), 8.0))
///     .collect();
/// let sessions: Vec<&WorkLog> = week.iter().collect();
/// assert_eq!(calculate_week_pay(&sessions), 400.0);
/// ```
pub fn calculate_week_pay(sessions: &[&WorkLog]) -> f64 {
    let mut ordered: Vec<&WorkLog> = sessions.to_vec();
    // Lexicographic order of YYYY-MM-DD strings is chronological.
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    let mut accumulated_regular_hours = 0.0;
    let mut total = 0.0;
    for log in ordered {
        let pay = calculate_session_pay(
            log.hours,
            log.pay_rate,
            log.tax_rate,
            accumulated_regular_hours,
        );
        accumulated_regular_hours += pay.regular_hours;
        total += pay.take_home_pay;
    }
    total
}
