//! Configuration types for payroll policy.
//!
//! [`SystemConfig`] is deserialized from YAML (or passed inline over the
//! API). Every field is optional on the wire and falls back to the default
//! documented on the field.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::CustomHoliday;

/// How late arrivals are deducted from pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateDeductionType {
    /// No deduction.
    #[default]
    None,
    /// `late_minutes / 60 * hourly_rate`.
    ProRated,
    /// `late_minutes * late_deduction_rate`.
    FixedPerMinute,
}

/// Payroll policy shared by every employee in a run.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SystemConfig;
/// use rust_decimal::Decimal;
///
/// let config: SystemConfig = serde_yaml::from_str("ot_multiplier: 2.0").unwrap();
/// assert_eq!(config.ot_multiplier, Decimal::new(2, 0));
/// assert_eq!(config.ot_multiplier_holiday, Decimal::new(3, 0));
/// assert_eq!(config.weekly_holidays, vec![0, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// OT multiplier on normal workdays. Default 1.5.
    pub ot_multiplier: Decimal,
    /// OT multiplier on weekly holidays and swapped-off days. Default 3.0.
    pub ot_multiplier_holiday: Decimal,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday. Default Sunday and Saturday.
    pub weekly_holidays: Vec<u8>,
    /// Organisation-wide custom holidays. Default empty.
    pub custom_holidays: Vec<CustomHoliday>,
    /// Use each employee's own weekly and custom holidays. Default false.
    pub use_individual_holidays: bool,
    /// Late deduction policy. Default none.
    pub late_deduction_type: LateDeductionType,
    /// Currency per late minute for fixed-per-minute deductions. Default 0.
    pub late_deduction_rate: Decimal,
    /// Standard check-in time of day. Default 09:00.
    pub standard_check_in: NaiveTime,
    /// Standard check-out time of day. Default 18:00.
    pub standard_check_out: NaiveTime,
    /// Minutes after standard check-in that are not counted as late. Default 0.
    pub late_grace_minutes: u32,
    /// Minimum minutes past standard check-out for a check-out to count as
    /// overtime-eligible. Default 0.
    pub ot_min_minutes: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ot_multiplier: Decimal::new(15, 1),
            ot_multiplier_holiday: Decimal::new(30, 1),
            weekly_holidays: vec![0, 6],
            custom_holidays: Vec::new(),
            use_individual_holidays: false,
            late_deduction_type: LateDeductionType::None,
            late_deduction_rate: Decimal::ZERO,
            standard_check_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            standard_check_out: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            late_grace_minutes: 0,
            ot_min_minutes: 0,
        }
    }
}

impl SystemConfig {
    /// Checks that values are in range.
    ///
    /// Rejects weekday indices above 6 and negative multipliers or rates.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(index) = self.weekly_holidays.iter().find(|&&d| d > 6) {
            return Err(EngineError::InvalidConfig {
                field: "weekly_holidays".to_string(),
                message: format!("weekday index {} is out of range 0..=6", index),
            });
        }

        let non_negative = [
            ("ot_multiplier", self.ot_multiplier),
            ("ot_multiplier_holiday", self.ot_multiplier_holiday),
            ("late_deduction_rate", self.late_deduction_rate),
        ];
        for (field, value) in non_negative {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        for holiday in &self.custom_holidays {
            if holiday.workday_multiplier < Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: "custom_holidays".to_string(),
                    message: format!(
                        "workday_multiplier for '{}' on {} must be at least 1, got {}",
                        holiday.name, holiday.date, holiday.workday_multiplier
                    ),
                });
            }
        }

        Ok(())
    }
}
