//! Calculation period and payroll run parameters.
//!
//! A [`CalculationPeriod`] is what the caller asks for: a calendar month or an
//! arbitrary inclusive date range. It is resolved into a [`PeriodRange`] with
//! concrete bounds before any calculation runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayType;

/// The period a payroll run covers, as requested by the caller.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationPeriod;
/// use chrono::NaiveDate;
///
/// let period = CalculationPeriod::CalendarMonth { year: 2026, month: 2 };
/// let range = period.resolve().unwrap();
/// assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert_eq!(range.days_in_range(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationPeriod {
    /// A whole calendar month.
    CalendarMonth {
        /// The year.
        year: i32,
        /// The month, 1 through 12.
        month: u32,
    },
    /// An arbitrary inclusive date range.
    CustomRange {
        /// First day of the range (inclusive).
        start_date: NaiveDate,
        /// Last day of the range (inclusive).
        end_date: NaiveDate,
    },
}

/// Which kind of period a [`PeriodRange`] was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Resolved from [`CalculationPeriod::CalendarMonth`].
    CalendarMonth,
    /// Resolved from [`CalculationPeriod::CustomRange`].
    CustomRange,
}

/// A resolved calculation period with concrete inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// The kind of period this range came from.
    pub kind: PeriodKind,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl CalculationPeriod {
    /// Resolves the period into concrete bounds.
    ///
    /// Fails with [`EngineError::InvalidPeriod`] for a month outside 1..=12,
    /// an unrepresentable year, or a custom range that ends before it starts.
    pub fn resolve(&self) -> EngineResult<PeriodRange> {
        match *self {
            CalculationPeriod::CalendarMonth { year, month } => {
                let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
                    EngineError::InvalidPeriod {
                        message: format!("{}-{:02} is not a valid calendar month", year, month),
                    }
                })?;
                let (next_year, next_month) = if month == 12 {
                    (year + 1, 1)
                } else {
                    (year, month + 1)
                };
                let end_date = NaiveDate::from_ymd_opt(next_year, next_month, 1)
                    .and_then(|d| d.pred_opt())
                    .ok_or_else(|| EngineError::InvalidPeriod {
                        message: format!("{}-{:02} has no representable end date", year, month),
                    })?;

                Ok(PeriodRange {
                    kind: PeriodKind::CalendarMonth,
                    start_date,
                    end_date,
                })
            }
            CalculationPeriod::CustomRange {
                start_date,
                end_date,
            } => {
                if end_date < start_date {
                    return Err(EngineError::InvalidPeriod {
                        message: format!(
                            "end date {} is before start date {}",
                            end_date, start_date
                        ),
                    });
                }
                Ok(PeriodRange {
                    kind: PeriodKind::CustomRange,
                    start_date,
                    end_date,
                })
            }
        }
    }
}

impl PeriodRange {
    /// Checks if a date falls within the range (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the range, counting both ends.
    pub fn days_in_range(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Parameters selecting who and what period a payroll run covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollParameters {
    /// The period to calculate.
    pub period: CalculationPeriod,
    /// Only include employees with this pay type.
    #[serde(default)]
    pub pay_type: Option<PayType>,
    /// Only include employees in this department.
    #[serde(default)]
    pub department: Option<String>,
}

impl PayrollParameters {
    /// Returns true if an employee with the given pay type and department
    /// passes both filters.
    pub fn matches(&self, pay_type: PayType, department: &str) -> bool {
        self.pay_type.is_none_or(|wanted| wanted == pay_type)
            && self
                .department
                .as_deref()
                .is_none_or(|wanted| wanted == department)
    }
}
