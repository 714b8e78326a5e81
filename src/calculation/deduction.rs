//! Late-arrival deduction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{LateDeductionType, SystemConfig};
use crate::models::AuditStep;

use super::rounding::round_currency;

/// The result of the late-arrival deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateDeductionResult {
    /// Deduction amount, rounded to whole currency units.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the deduction for late arrivals under the configured policy.
///
/// - `none`: nothing is deducted.
/// - `pro_rated`: late minutes are charged at the hourly rate.
/// - `fixed_per_minute`: late minutes are charged at `late_deduction_rate`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_late_deduction;
/// use payroll_engine::config::{LateDeductionType, SystemConfig};
/// use rust_decimal::Decimal;
///
/// let config = SystemConfig {
///     late_deduction_type: LateDeductionType::ProRated,
///     ..Default::default()
/// };
///
/// // 40/60 * 125 = 83.33
/// let result = calculate_late_deduction(40, Decimal::new(125, 0), &config, 5);
/// assert_eq!(result.amount, Decimal::new(83, 0));
/// ```
pub fn calculate_late_deduction(
    total_late_minutes: u32,
    hourly_rate: Decimal,
    config: &SystemConfig,
    step_number: u32,
) -> LateDeductionResult {
    let minutes = Decimal::from(total_late_minutes);

    let (raw, reasoning) = match config.late_deduction_type {
        LateDeductionType::None => (
            Decimal::ZERO,
            "Late deduction disabled".to_string(),
        ),
        LateDeductionType::ProRated => (
            (minutes / Decimal::from(60)).saturating_mul(hourly_rate),
            format!("{} late minute(s) / 60 x hourly rate {}", total_late_minutes, hourly_rate),
        ),
        LateDeductionType::FixedPerMinute => (
            minutes.saturating_mul(config.late_deduction_rate),
            format!(
                "{} late minute(s) x {} per minute",
                total_late_minutes, config.late_deduction_rate
            ),
        ),
    };
    let amount = round_currency(raw);

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_deduction".to_string(),
        rule_name: "Late Arrival Deduction".to_string(),
        input: serde_json::json!({
            "late_deduction_type": config.late_deduction_type,
            "late_deduction_rate": config.late_deduction_rate.to_string(),
            "total_late_minutes": total_late_minutes,
            "hourly_rate": hourly_rate.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!("{} = {}", reasoning, amount),
    };

    LateDeductionResult { amount, audit_step }
}
