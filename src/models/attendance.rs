//! Attendance event model.
//!
//! Check-in and check-out are often stored as separate records for the same
//! day, so several events can describe one worked day.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kind of attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Arrival at work.
    CheckIn,
    /// Departure from work.
    CheckOut,
    /// A mid-day presence record.
    MidDay,
}

/// A single raw attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// The employee this event belongs to.
    pub employee_id: String,
    /// The calendar day of the event.
    pub date: NaiveDate,
    /// The kind of record.
    pub status: AttendanceStatus,
    /// Check-in instant, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out instant, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Late minutes computed when the record was captured.
    #[serde(default)]
    pub late_minutes: Option<u32>,
}
