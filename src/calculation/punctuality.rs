//! Late-arrival and overtime-eligibility rules.
//!
//! Pure functions over a check-in or check-out instant and the standard hours
//! in [`SystemConfig`]. Minutes are whole minutes; leftover seconds are
//! dropped.
//!
//! The `_for_day` variants measure against the standard times of a given
//! attendance day, so an instant recorded before or after midnight is still
//! compared with its own day's schedule.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::SystemConfig;

/// Minutes between the standard check-in on the same day and `check_in`.
///
/// Returns zero for an on-time arrival or one within `late_grace_minutes`.
/// Once the grace period is exceeded the full lateness is counted.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::late_minutes;
/// use payroll_engine::config::SystemConfig;
/// use chrono::NaiveDateTime;
///
/// let config = SystemConfig::default(); // standard check-in 09:00
/// let check_in = NaiveDateTime::parse_from_str("2026-01-15 09:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(late_minutes(check_in, &config), 40);
/// ```
pub fn late_minutes(check_in: NaiveDateTime, config: &SystemConfig) -> u32 {
    late_minutes_for_day(check_in.date(), check_in, config)
}

/// Minutes between the standard check-in on `day` and `check_in`.
///
/// Same grace rules as [`late_minutes`]. A check-in before `day` begins is
/// early, not late.
pub fn late_minutes_for_day(
    day: NaiveDate,
    check_in: NaiveDateTime,
    config: &SystemConfig,
) -> u32 {
    let standard = day.and_time(config.standard_check_in);
    let minutes = (check_in - standard).num_minutes();
    if minutes > i64::from(config.late_grace_minutes) {
        u32::try_from(minutes).unwrap_or(u32::MAX)
    } else {
        0
    }
}

/// Returns true if `check_in` counts as a late arrival.
pub fn is_late(check_in: NaiveDateTime, config: &SystemConfig) -> bool {
    late_minutes(check_in, config) > 0
}

/// Minutes between the standard check-out on the same day and `check_out`.
///
/// Returns zero when the check-out is not past standard check-out by at
/// least `ot_min_minutes`.
pub fn ot_minutes(check_out: NaiveDateTime, config: &SystemConfig) -> u32 {
    ot_minutes_for_day(check_out.date(), check_out, config)
}

/// Minutes between the standard check-out on `day` and `check_out`.
///
/// A check-out after midnight counts the hours past the previous evening's
/// standard check-out.
pub fn ot_minutes_for_day(
    day: NaiveDate,
    check_out: NaiveDateTime,
    config: &SystemConfig,
) -> u32 {
    let standard = day.and_time(config.standard_check_out);
    let minutes = (check_out - standard).num_minutes();
    if minutes > 0 && minutes >= i64::from(config.ot_min_minutes) {
        u32::try_from(minutes).unwrap_or(u32::MAX)
    } else {
        0
    }
}

/// Returns true if `check_out` is late enough to be eligible for overtime.
pub fn is_eligible_for_ot(check_out: NaiveDateTime, config: &SystemConfig) -> bool {
    ot_minutes(check_out, config) > 0
}
