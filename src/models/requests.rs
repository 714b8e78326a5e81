//! Overtime and shift-swap request models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval state shared by overtime and swap requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

/// An overtime request.
///
/// `start_time` and `end_time` are optional on the wire so that malformed
/// records can be skipped instead of rejecting the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee who worked the overtime.
    pub employee_id: String,
    /// The day the overtime was worked; drives tier classification.
    pub date: NaiveDate,
    /// When the overtime started.
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    /// When the overtime ended.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Approval state.
    pub status: RequestStatus,
    /// Free-text justification.
    #[serde(default)]
    pub reason: Option<String>,
}

impl OtRequest {
    /// Returns true if the request was approved.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }

    /// Returns the overtime duration in hours.
    ///
    /// Returns `None` when either instant is missing. Zero or negative
    /// durations yield zero hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{OtRequest, RequestStatus};
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let request = OtRequest {
    ///     id: "ot_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: Some(NaiveDateTime::parse_from_str("2026-01-15 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     end_time: Some(NaiveDateTime::parse_from_str("2026-01-15 20:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     status: RequestStatus::Approved,
    ///     reason: None,
    /// };
    /// assert_eq!(request.duration_hours(), Some(Decimal::new(25, 1)));
    /// ```
    pub fn duration_hours(&self) -> Option<Decimal> {
        let (start, end) = (self.start_time?, self.end_time?);
        let seconds = (end - start).num_seconds();
        if seconds <= 0 {
            return Some(Decimal::ZERO);
        }
        Some(Decimal::new(seconds, 0) / Decimal::new(3600, 0))
    }
}

/// A shift-swap request: work a weekly holiday, take a workday off instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee swapping days.
    pub employee_id: String,
    /// A weekly holiday the employee will work.
    pub work_date: NaiveDate,
    /// A normal workday the employee will take off.
    pub holiday_date: NaiveDate,
    /// Approval state.
    pub status: RequestStatus,
}

impl SwapRequest {
    /// Returns true if the request was approved.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }
}
