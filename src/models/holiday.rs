//! Custom holiday definitions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An organisation-defined one-off holiday with its own pay multipliers.
///
/// Custom holidays take precedence over weekly holidays and shift swaps when
/// classifying a day. When two entries share a date, the first one in list
/// order is the one that applies.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CustomHoliday;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let holiday = CustomHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 4, 13).unwrap(),
///     name: "Songkran".to_string(),
///     workday_multiplier: Decimal::new(20, 1),
///     ot_multiplier: Decimal::new(30, 1),
/// };
/// assert!(holiday.falls_on(NaiveDate::from_ymd_opt(2026, 4, 13).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHoliday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Display name of the holiday.
    pub name: String,
    /// Pay rate for a regular workday spent working on this date.
    #[serde(default = "default_workday_multiplier")]
    pub workday_multiplier: Decimal,
    /// Overtime rate for overtime worked on this date.
    #[serde(default = "default_ot_multiplier")]
    pub ot_multiplier: Decimal,
}

fn default_workday_multiplier() -> Decimal {
    Decimal::new(20, 1)
}

fn default_ot_multiplier() -> Decimal {
    Decimal::new(30, 1)
}

impl CustomHoliday {
    /// Returns true if the holiday is on `date`.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
