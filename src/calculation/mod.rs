//! Pay calculation logic for the finance display.
//!
//! This module contains the pay engine: per-session take-home pay under a
//! daily-8/weekly-40 overtime policy, weekly aggregation per job, the
//! incoming-pay estimate that drives the dashboard, and the single-day pay
//! figure used for chart annotation.
//!
//! Every function here is pure: a deterministic function of a day-index
//! and a list of records, with no shared state and no I/O.

mod daily_pay;
mod incoming_pay;
mod session_pay;
mod week_pay;

pub use daily_pay::calculate_daily_pay_earned;
pub use incoming_pay::calculate_incoming_pay;
pub use session_pay::{
    DAILY_REGULAR_HOURS, OVERTIME_MULTIPLIER, SessionPay, WEEKLY_REGULAR_HOURS,
    calculate_session_pay,
};
pub use week_pay::calculate_week_pay;
