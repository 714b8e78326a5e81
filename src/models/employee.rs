//! Employee model and related types.
//!
//! This module defines the Employee struct and PayType enum. Employee
//! records are owned by the employee directory; the engine only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CustomHoliday;

/// How an employee's base salary is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// `base_salary` is a monthly amount.
    Monthly,
    /// `base_salary` is a per-day amount.
    Daily,
    /// Temporary staff, paid per day like daily employees.
    Temporary,
}

impl std::fmt::Display for PayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayType::Monthly => write!(f, "monthly"),
            PayType::Daily => write!(f, "daily"),
            PayType::Temporary => write!(f, "temporary"),
        }
    }
}

/// Represents an employee whose attendance is turned into payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// How `base_salary` is expressed.
    pub pay_type: PayType,
    /// Currency units per month (monthly) or per day (daily, temporary).
    pub base_salary: Decimal,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Weekday indices (0 = Sunday .. 6 = Saturday) overriding the system
    /// weekly holidays when individual holidays are enabled.
    #[serde(default)]
    pub weekly_holidays: Option<Vec<u8>>,
    /// Employee-specific custom holidays, used instead of the system list
    /// when individual holidays are enabled.
    #[serde(default)]
    pub custom_holidays: Vec<CustomHoliday>,
}

impl Employee {
    /// Returns true if the employee is paid per day worked.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, PayType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Somchai".to_string(),
    ///     pay_type: PayType::Temporary,
    ///     base_salary: Decimal::new(500, 0),
    ///     department: "warehouse".to_string(),
    ///     weekly_holidays: None,
    ///     custom_holidays: vec![],
    /// };
    /// assert!(employee.is_paid_per_day());
    /// ```
    pub fn is_paid_per_day(&self) -> bool {
        matches!(self.pay_type, PayType::Daily | PayType::Temporary)
    }
}
