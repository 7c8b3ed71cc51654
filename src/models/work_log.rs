//! Work log model.

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::EngineResult;

/// One work session on one calendar day for one job.
///
/// `pay_cashed` is a signal, not a property of the session itself: when
/// true it means "as of this log's date, all pay for weeks strictly before
/// this log's week has been received and must no longer be counted as
/// incoming". The user attaches it to whichever log they happened to enter
/// on the day the pay arrived.
///
/// The engine does not deduplicate: two logs claiming the same hours on
/// the same day for the same job are summed, so double entry silently
/// inflates pay. Callers own that invariant.
///
/// # Example
///
/// ```
/// use finance_display::models::WorkLog;
///
/// let log = WorkLog {
///     id: 1,
///     date: "2024-12-29".to_string(),
///     job_id: "grocery".to_string(),
///     hours: 8.0,
///     pay_rate: 10.0,
///     tax_rate: 0.25,
///     pay_cashed: false,
/// };
/// assert_eq!(log.day_index().unwrap(), 9129);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    /// Unique integer id, assigned by the record store.
    pub id: i32,
    /// The session date as `YYYY-MM-DD`.
    pub date: String,
    /// The job this session was worked for.
    pub job_id: String,
    /// Hours worked (non-negative).
    pub hours: f64,
    /// Pay rate in dollars per hour (non-negative).
    pub pay_rate: f64,
    /// Flat withholding rate in `[0, 1)`.
    pub tax_rate: f64,
    /// Pay-period-closed signal; see the type-level docs.
    pub pay_cashed: bool,
}

impl WorkLog {
    /// Returns the day-index of this log's date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidDate`] if the stored
    /// date string is malformed.
    pub fn day_index(&self) -> EngineResult<i64> {
        calendar::date_to_day_index(&self.date)
    }
}
