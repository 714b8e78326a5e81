//! Base income and custom-holiday work bonus.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Employee, PayType, PeriodKind, PeriodRange};

use super::day_classifier::{DayClassification, HolidayPolicy};
use super::rounding::round_currency;

/// Days in a payroll month, used to derive daily and hourly rates of a
/// monthly salary.
pub const DAYS_PER_MONTH: u32 = 30;

/// Hours in a standard working day.
pub const STANDARD_WORKDAY_HOURS: u32 = 8;

/// The result of base income assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseIncomeResult {
    /// Base income, rounded to whole currency units.
    pub income: Decimal,
    /// Hourly rate at full precision.
    pub hourly_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the custom-holiday work bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHolidayWorkResult {
    /// Worked days that fell on a custom holiday.
    pub days: u32,
    /// Hours credited for those days.
    pub hours: Decimal,
    /// Bonus pay, rounded to whole currency units.
    pub pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Hourly rate for an employee.
///
/// Monthly salaries divide by [`DAYS_PER_MONTH`] and
/// [`STANDARD_WORKDAY_HOURS`]; daily and temporary rates divide by
/// [`STANDARD_WORKDAY_HOURS`] only.
pub fn hourly_rate(employee: &Employee) -> Decimal {
    let hours = Decimal::from(STANDARD_WORKDAY_HOURS);
    if employee.is_paid_per_day() {
        employee.base_salary / hours
    } else {
        employee.base_salary / Decimal::from(DAYS_PER_MONTH) / hours
    }
}

/// Calculates an employee's base income for the period.
///
/// - Monthly over a calendar month: the full salary.
/// - Monthly over a custom range: the daily rate times the days in range.
/// - Daily or temporary: the daily rate times the worked days.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_base_income;
/// use payroll_engine::models::{CalculationPeriod, Employee, PayType};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_002".to_string(),
///     name: "Somchai".to_string(),
///     pay_type: PayType::Daily,
///     base_salary: Decimal::new(500, 0),
///     department: "Warehouse".to_string(),
///     weekly_holidays: None,
///     custom_holidays: vec![],
/// };
/// let range = CalculationPeriod::CalendarMonth { year: 2026, month: 1 }.resolve().unwrap();
///
/// let result = calculate_base_income(&employee, &range, 20, 2);
/// assert_eq!(result.income, Decimal::new(10000, 0));
/// assert_eq!(result.hourly_rate, Decimal::new(625, 1));
/// ```
pub fn calculate_base_income(
    employee: &Employee,
    range: &PeriodRange,
    worked_days: u32,
    step_number: u32,
) -> BaseIncomeResult {
    let rate = hourly_rate(employee);

    let (raw_income, basis) = match (employee.pay_type, range.kind) {
        (PayType::Monthly, PeriodKind::CalendarMonth) => (
            employee.base_salary,
            "monthly salary over a calendar month".to_string(),
        ),
        (PayType::Monthly, PeriodKind::CustomRange) => {
            let days = range.days_in_range();
            (
                (employee.base_salary / Decimal::from(DAYS_PER_MONTH))
                    .saturating_mul(Decimal::from(days)),
                format!("monthly salary / {} x {} day(s) in range", DAYS_PER_MONTH, days),
            )
        }
        (PayType::Daily | PayType::Temporary, _) => (
            employee.base_salary.saturating_mul(Decimal::from(worked_days)),
            format!("{} rate x {} worked day(s)", employee.pay_type, worked_days),
        ),
    };
    let income = round_currency(raw_income);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_income".to_string(),
        rule_name: "Base Income".to_string(),
        input: serde_json::json!({
            "pay_type": employee.pay_type,
            "base_salary": employee.base_salary.to_string(),
            "period_kind": range.kind,
            "days_in_range": range.days_in_range(),
            "worked_days": worked_days
        }),
        output: serde_json::json!({
            "income": income.to_string(),
            "hourly_rate": rate.to_string()
        }),
        reasoning: format!("{} = {} (rounded to {})", basis, raw_income, income),
    };

    BaseIncomeResult {
        income,
        hourly_rate: rate,
        audit_step,
    }
}

/// Calculates the bonus for work on custom holidays.
///
/// Every worked date that classifies as a custom holiday is credited with a
/// standard day of [`STANDARD_WORKDAY_HOURS`] paid at the holiday's
/// `workday_multiplier` minus the base day already covered by base income.
/// The summed bonus is rounded once.
pub fn calculate_custom_holiday_work<I>(
    worked_dates: I,
    policy: &HolidayPolicy<'_>,
    hourly_rate: Decimal,
    step_number: u32,
) -> CustomHolidayWorkResult
where
    I: IntoIterator<Item = NaiveDate>,
{
    let day_hours = Decimal::from(STANDARD_WORKDAY_HOURS);
    let mut days = 0u32;
    let mut raw_pay = Decimal::ZERO;
    let mut holidays_worked = Vec::new();

    for date in worked_dates {
        if let DayClassification::CustomHoliday(holiday) = policy.classify(date) {
            days += 1;
            let bonus_multiplier = holiday.workday_multiplier.saturating_sub(Decimal::ONE);
            raw_pay = raw_pay.saturating_add(
                day_hours
                    .saturating_mul(hourly_rate)
                    .saturating_mul(bonus_multiplier),
            );
            holidays_worked.push(serde_json::json!({
                "date": date.to_string(),
                "name": holiday.name,
                "workday_multiplier": holiday.workday_multiplier.to_string()
            }));
        }
    }

    let hours = day_hours * Decimal::from(days);
    let pay = round_currency(raw_pay);

    let audit_step = AuditStep {
        step_number,
        rule_id: "custom_holiday_work".to_string(),
        rule_name: "Custom Holiday Work Bonus".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "holidays_worked": holidays_worked
        }),
        output: serde_json::json!({
            "days": days,
            "hours": hours.to_string(),
            "pay": pay.to_string()
        }),
        reasoning: if days == 0 {
            "No worked days fell on a custom holiday".to_string()
        } else {
            format!(
                "{} custom holiday day(s) x {}h at (multiplier - 1) x {} = {}",
                days, STANDARD_WORKDAY_HOURS, hourly_rate, pay
            )
        },
    };

    CustomHolidayWorkResult {
        days,
        hours,
        pay,
        audit_step,
    }
}
