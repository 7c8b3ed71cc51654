//! Per-session overtime pay calculation.
//!
//! Models a daily-8/weekly-40 overtime scheme with a single 1.5× overtime
//! multiplier and a flat withholding rate. Overtime interacts across two
//! axes: hours past 8 in one day are daily overtime, and regular hours
//! that no longer fit under the 40-hour weekly cap become weekly overtime.

use serde::{Deserialize, Serialize};

/// Hours per day paid at the regular rate before daily overtime starts.
pub const DAILY_REGULAR_HOURS: f64 = 8.0;

/// Regular hours per week before weekly overtime starts.
pub const WEEKLY_REGULAR_HOURS: f64 = 40.0;

/// Pay multiplier for overtime hours.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// The result of pricing one work session.
///
/// Carries the regular hours consumed from the weekly allowance alongside
/// the pay, so the weekly aggregator advances its running total with the
/// exact same split this calculation used. The two must never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionPay {
    /// Take-home pay for the session, after withholding.
    pub take_home_pay: f64,
    /// Regular hours this session consumed from the 40-hour weekly room.
    pub regular_hours: f64,
    /// Hours paid at the overtime rate (daily plus weekly overtime).
    pub overtime_hours: f64,
}

/// Prices one work session given the week's prior regular hours.
///
/// # Arguments
///
/// * `hours` - Hours worked in this session
/// * `pay_rate` - Dollars per hour
/// * `tax_rate` - Flat withholding rate in `[0, 1)`
/// * `accumulated_regular_hours` - Regular hours already accumulated this
///   week for the same job, before this session
///
/// The policy:
///
/// 1. Up to 8 of the session's hours are daily-regular; the excess is
///    daily overtime (the boundary is *over* 8, not at 8).
/// 2. Daily-regular hours only stay regular while the week's 40-hour room
///    lasts; the part that does not fit becomes weekly overtime.
/// 3. All overtime is paid at 1.5×, then the flat withholding applies.
///
/// # Examples
///
/// ```
/// use finance_display::calculation::calculate_session_pay;
///
/// // 8 hours with room left: all regular, no overtime.
/// let pay = calculate_session_pay(8.0, 10.0, 0.0, 0.0);
/// assert_eq!(pay.take_home_pay, 80.0);
/// assert_eq!(pay.overtime_hours, 0.0);
///
/// // 10 hours: 2 hours of daily overtime.
/// let pay = calculate_session_pay(10.0, 10.0, 0.0, 0.0);
/// assert_eq!(pay.take_home_pay, 110.0);
///
/// // The week is already at 40 regular hours: everything is overtime.
/// let pay = calculate_session_pay(10.0, 10.0, 0.0, 40.0);
/// assert_eq!(pay.take_home_pay, 150.0);
/// ```
pub fn calculate_session_pay(
    hours: f64,
    pay_rate: f64,
    tax_rate: f64,
    accumulated_regular_hours: f64,
) -> SessionPay {
    let daily_regular = hours.min(DAILY_REGULAR_HOURS);
    let daily_overtime = (hours - DAILY_REGULAR_HOURS).max(0.0);

    let regular_room_left = (WEEKLY_REGULAR_HOURS - accumulated_regular_hours).max(0.0);
    let regular_hours = daily_regular.min(regular_room_left);
    let weekly_overtime = daily_regular - regular_hours;

    let overtime_hours = daily_overtime + weekly_overtime;
    let gross_pay = regular_hours * pay_rate + overtime_hours * pay_rate * OVERTIME_MULTIPLIER;

    SessionPay {
        take_home_pay: gross_pay * (1.0 - tax_rate),
        regular_hours,
        overtime_hours,
    }
}
