//! Overtime tier classification and pay.
//!
//! Each approved overtime request is placed in a tier according to how its
//! date classifies for the employee:
//!
//! | Day classification                     | Tier    | Multiplier                  |
//! |----------------------------------------|---------|-----------------------------|
//! | custom holiday                         | Special | the holiday's `ot_multiplier` |
//! | weekly holiday, swapped to holiday     | Holiday | `ot_multiplier_holiday`     |
//! | normal, swapped to workday             | Normal  | `ot_multiplier`             |
//!
//! Pay is accumulated per tier at full precision and each tier is rounded to
//! whole currency units independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::SystemConfig;
use crate::models::{AuditStep, AuditWarning, OtRequest, OtTier, PeriodRange, TierTotals};

use super::day_classifier::{DayClassification, HolidayPolicy};
use super::rounding::round_currency;

/// The result of overtime calculation for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Normal-tier totals.
    pub normal: TierTotals,
    /// Holiday-tier totals.
    pub holiday: TierTotals,
    /// Special-tier totals.
    pub special: TierTotals,
    /// Approved in-period requests that were processed, including zero-length ones.
    pub counted: u32,
    /// Approved in-period requests skipped for a missing start or end time.
    pub skipped: u32,
    /// One warning per skipped request.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl OvertimeResult {
    /// Hours across all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.normal
            .hours
            .saturating_add(self.holiday.hours)
            .saturating_add(self.special.hours)
    }

    /// Rounded pay across all tiers.
    pub fn total_pay(&self) -> Decimal {
        self.normal
            .pay
            .saturating_add(self.holiday.pay)
            .saturating_add(self.special.pay)
    }

    /// Totals for one tier.
    pub fn tier(&self, tier: OtTier) -> &TierTotals {
        match tier {
            OtTier::Normal => &self.normal,
            OtTier::Holiday => &self.holiday,
            OtTier::Special => &self.special,
        }
    }
}

/// Calculates overtime hours and pay per tier.
///
/// Only approved requests dated inside `range` are considered. A request
/// missing either instant is skipped with a warning; a zero or negative
/// duration is counted but contributes nothing.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_overtime, HolidayPolicy};
/// use payroll_engine::config::SystemConfig;
/// use payroll_engine::models::{CalculationPeriod, OtRequest, RequestStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let config = SystemConfig::default();
/// let range = CalculationPeriod::CalendarMonth { year: 2026, month: 1 }.resolve().unwrap();
/// let policy = HolidayPolicy::new(&config.weekly_holidays, &config.custom_holidays, []);
///
/// // 3 hours on Saturday 2026-01-17
/// let request = OtRequest {
///     id: "ot_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     start_time: Some(NaiveDateTime::parse_from_str("2026-01-17 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     end_time: Some(NaiveDateTime::parse_from_str("2026-01-17 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     status: RequestStatus::Approved,
///     reason: None,
/// };
///
/// let result = calculate_overtime([&request], &range, &policy, Decimal::new(125, 0), &config, 1);
/// assert_eq!(result.holiday.hours, Decimal::new(3, 0));
/// assert_eq!(result.holiday.pay, Decimal::new(1125, 0));
/// assert_eq!(result.normal.pay, Decimal::ZERO);
/// ```
pub fn calculate_overtime<'r, I>(
    requests: I,
    range: &PeriodRange,
    policy: &HolidayPolicy<'_>,
    hourly_rate: Decimal,
    config: &SystemConfig,
    step_number: u32,
) -> OvertimeResult
where
    I: IntoIterator<Item = &'r OtRequest>,
{
    let mut normal = (Decimal::ZERO, Decimal::ZERO);
    let mut holiday = (Decimal::ZERO, Decimal::ZERO);
    let mut special = (Decimal::ZERO, Decimal::ZERO);
    let mut counted = 0u32;
    let mut skipped = 0u32;
    let mut warnings = Vec::new();
    let mut decisions = Vec::new();

    for request in requests
        .into_iter()
        .filter(|r| r.is_approved() && range.contains_date(r.date))
    {
        let Some(hours) = request.duration_hours() else {
            skipped += 1;
            warn!(
                request_id = %request.id,
                employee_id = %request.employee_id,
                date = %request.date,
                "Skipping overtime request with missing start or end time"
            );
            warnings.push(AuditWarning {
                code: "OT_REQUEST_SKIPPED".to_string(),
                message: format!(
                    "Overtime request '{}' on {} has no start or end time and was skipped",
                    request.id, request.date
                ),
                severity: "medium".to_string(),
            });
            continue;
        };
        counted += 1;

        let classification = policy.classify(request.date);
        let (multiplier, bucket) = match classification {
            DayClassification::CustomHoliday(h) => (h.ot_multiplier, &mut special),
            DayClassification::WeeklyHoliday | DayClassification::SwappedToHoliday => {
                (config.ot_multiplier_holiday, &mut holiday)
            }
            DayClassification::Normal | DayClassification::SwappedToWorkday => {
                (config.ot_multiplier, &mut normal)
            }
        };
        let pay = hours.saturating_mul(hourly_rate).saturating_mul(multiplier);
        bucket.0 = bucket.0.saturating_add(hours);
        bucket.1 = bucket.1.saturating_add(pay);

        decisions.push(serde_json::json!({
            "request_id": request.id,
            "date": request.date.to_string(),
            "day": classification.to_string(),
            "tier": classification.ot_tier(),
            "hours": hours.to_string(),
            "multiplier": multiplier.to_string(),
            "pay": pay.to_string()
        }));
    }

    let to_totals = |(hours, pay): (Decimal, Decimal)| TierTotals {
        hours,
        pay: round_currency(pay),
    };
    let normal = to_totals(normal);
    let holiday = to_totals(holiday);
    let special = to_totals(special);

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_tiers".to_string(),
        rule_name: "Overtime Tier Calculation".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "ot_multiplier": config.ot_multiplier.to_string(),
            "ot_multiplier_holiday": config.ot_multiplier_holiday.to_string(),
            "requests": decisions
        }),
        output: serde_json::json!({
            "normal": { "hours": normal.hours.to_string(), "pay": normal.pay.to_string() },
            "holiday": { "hours": holiday.hours.to_string(), "pay": holiday.pay.to_string() },
            "special": { "hours": special.hours.to_string(), "pay": special.pay.to_string() },
            "counted": counted,
            "skipped": skipped
        }),
        reasoning: format!(
            "{} request(s) counted, {} skipped; tier pay rounded separately: normal {}, holiday {}, special {}",
            counted, skipped, normal.pay, holiday.pay, special.pay
        ),
    };

    OvertimeResult {
        normal,
        holiday,
        special,
        counted,
        skipped,
        warnings,
        audit_step,
    }
}
