//! Calculation logic for the payroll engine.
//!
//! Each component is a pure function that returns its figures together with
//! an [`AuditStep`](crate::models::AuditStep) describing how they were
//! reached. [`calculate_line_item`] composes them for one employee and
//! [`run_payroll`] runs a whole payroll.

mod attendance;
mod base_income;
mod day_classifier;
mod deduction;
mod overtime;
mod payroll;
mod punctuality;
mod rounding;

pub use attendance::{AttendanceSummary, DayAttendance, aggregate_attendance};
pub use base_income::{
    BaseIncomeResult, CustomHolidayWorkResult, DAYS_PER_MONTH, STANDARD_WORKDAY_HOURS,
    calculate_base_income, calculate_custom_holiday_work, hourly_rate,
};
pub use day_classifier::{DayClassification, HolidayPolicy, classify_day};
pub use deduction::{LateDeductionResult, calculate_late_deduction};
pub use overtime::{OvertimeResult, calculate_overtime};
pub use payroll::{EmployeeRecords, calculate_line_item, group_by_employee, run_payroll};
pub use punctuality::{
    is_eligible_for_ot, is_late, late_minutes, late_minutes_for_day, ot_minutes,
    ot_minutes_for_day,
};
pub use rounding::round_currency;
