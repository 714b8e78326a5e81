//! Payroll result models.
//!
//! This module contains the [`PayrollLineItem`] produced for each employee,
//! the audit trace recording every rule decision behind it, and the
//! [`PayrollRun`] envelope that groups the line items of one run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayType, PeriodRange};

/// The overtime pay tier a request falls into.
///
/// # Example
///
/// ```
/// use payroll_engine::models::OtTier;
///
/// let tier = OtTier::Holiday;
/// assert_eq!(serde_json::to_string(&tier).unwrap(), "\"holiday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtTier {
    /// Overtime on a normal workday, paid at the normal OT multiplier.
    Normal,
    /// Overtime on a weekly holiday or swapped-off day.
    Holiday,
    /// Overtime on a custom holiday, paid at that holiday's OT multiplier.
    Special,
}

impl std::fmt::Display for OtTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtTier::Normal => write!(f, "normal"),
            OtTier::Holiday => write!(f, "holiday"),
            OtTier::Special => write!(f, "special"),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag records that were skipped or look suspicious without
/// stopping the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace behind one line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Hours and pay accumulated for one overtime tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTotals {
    /// Overtime hours in this tier.
    pub hours: Decimal,
    /// Pay for this tier, rounded to whole currency units.
    pub pay: Decimal,
}

/// The payroll result for one employee in one calculation period.
///
/// Every money component is rounded to whole currency units on its own
/// before being summed into `total_income`, so
/// `total_income == base_income + custom_holiday_work_pay + ot_normal.pay
/// + ot_holiday.pay + ot_special.pay` and
/// `net_total == total_income - total_deduction` hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// The employee this line item is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    pub department: String,
    /// The employee's pay type.
    pub pay_type: PayType,
    /// Base salary as recorded on the employee.
    pub base_salary: Decimal,
    /// Hourly rate used for overtime, bonuses and pro-rated deductions.
    pub hourly_rate: Decimal,
    /// Distinct days with at least one attendance event.
    pub worked_days: u32,
    /// Late minutes summed over worked days.
    pub total_late_minutes: u32,
    /// Minutes past standard check-out, summed over worked days. Informational.
    pub eligible_ot_minutes: u32,
    /// Base income for the period.
    pub base_income: Decimal,
    /// Worked days that fell on a custom holiday.
    pub custom_holiday_work_days: u32,
    /// Hours credited for custom-holiday work (eight per day).
    pub custom_holiday_work_hours: Decimal,
    /// Extra pay for custom-holiday work above the base rate.
    pub custom_holiday_work_pay: Decimal,
    /// Normal-tier overtime.
    pub ot_normal: TierTotals,
    /// Holiday-tier overtime.
    pub ot_holiday: TierTotals,
    /// Special-tier overtime.
    pub ot_special: TierTotals,
    /// Sum of hours across all tiers.
    pub ot_hours: Decimal,
    /// Sum of rounded pay across all tiers.
    pub total_ot_pay: Decimal,
    /// Approved overtime requests that were processed.
    pub ot_requests_counted: u32,
    /// Approved overtime requests skipped for missing times.
    pub ot_requests_skipped: u32,
    /// Deduction for late arrival.
    pub late_deduction: Decimal,
    /// Sum of all income components.
    pub total_income: Decimal,
    /// Sum of all deductions.
    pub total_deduction: Decimal,
    /// `total_income - total_deduction`.
    pub net_total: Decimal,
    /// Rule decisions behind the figures above.
    pub audit_trace: AuditTrace,
}

/// Run-level sums over all line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of line items in the run.
    pub employee_count: usize,
    /// Sum of `total_income`.
    pub total_income: Decimal,
    /// Sum of `total_deduction`.
    pub total_deduction: Decimal,
    /// Sum of `net_total`.
    pub net_total: Decimal,
}

impl PayrollTotals {
    /// Sums the totals of the given line items.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollTotals;
    ///
    /// let totals = PayrollTotals::from_items(&[]);
    /// assert_eq!(totals.employee_count, 0);
    /// ```
    pub fn from_items(items: &[PayrollLineItem]) -> Self {
        items.iter().fold(
            PayrollTotals {
                employee_count: items.len(),
                ..Default::default()
            },
            |mut acc, item| {
                acc.total_income = acc.total_income.saturating_add(item.total_income);
                acc.total_deduction = acc.total_deduction.saturating_add(item.total_deduction);
                acc.net_total = acc.net_total.saturating_add(item.net_total);
                acc
            },
        )
    }
}

/// The complete result of one payroll run.
///
/// Line items are deterministic for a given input; only the envelope fields
/// (`calculation_id`, `timestamp`, `duration_us`) differ between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The resolved period the run covers.
    pub period: PeriodRange,
    /// One line item per matched employee, in input order.
    pub items: Vec<PayrollLineItem>,
    /// Run-level sums.
    pub totals: PayrollTotals,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}
