//! Core data models for the payroll engine.
//!
//! Inputs (employees, attendance, requests, holidays, periods) and outputs
//! (line items, audit traces, runs) all live here.

mod attendance;
mod employee;
mod holiday;
mod payroll_result;
mod period;
mod requests;

pub use attendance::{AttendanceEvent, AttendanceStatus};
pub use employee::{Employee, PayType};
pub use holiday::CustomHoliday;
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, OtTier, PayrollLineItem, PayrollRun, PayrollTotals,
    TierTotals,
};
pub use period::{CalculationPeriod, PayrollParameters, PeriodKind, PeriodRange};
pub use requests::{OtRequest, RequestStatus, SwapRequest};
