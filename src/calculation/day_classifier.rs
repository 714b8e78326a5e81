//! Day classification.
//!
//! Decides what kind of day a calendar date is for one employee: a custom
//! holiday, a swapped day, a weekly holiday, or a normal workday. The result
//! drives both the overtime tier and the custom-holiday work bonus.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::config::SystemConfig;
use crate::models::{CustomHoliday, Employee, OtTier, SwapRequest};

/// The effective type of a day for one employee.
///
/// Exactly one variant applies to any date. Precedence, highest first:
/// custom holiday, swapped-to-workday, swapped-to-holiday, weekly holiday,
/// normal.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayClassification;
/// use payroll_engine::models::OtTier;
///
/// assert_eq!(DayClassification::SwappedToHoliday.ot_tier(), OtTier::Holiday);
/// assert_eq!(DayClassification::SwappedToWorkday.ot_tier(), OtTier::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClassification<'a> {
    /// A regular workday.
    Normal,
    /// A recurring weekly day off.
    WeeklyHoliday,
    /// An organisation-defined holiday. Never reclassified by swaps.
    CustomHoliday(&'a CustomHoliday),
    /// A weekly holiday the employee swapped to work.
    SwappedToWorkday,
    /// A workday the employee swapped to take off.
    SwappedToHoliday,
}

impl DayClassification<'_> {
    /// The overtime tier for overtime worked on a day of this type.
    pub fn ot_tier(&self) -> OtTier {
        match self {
            DayClassification::CustomHoliday(_) => OtTier::Special,
            DayClassification::WeeklyHoliday | DayClassification::SwappedToHoliday => {
                OtTier::Holiday
            }
            DayClassification::Normal | DayClassification::SwappedToWorkday => OtTier::Normal,
        }
    }

    /// Short machine-readable label used in audit output.
    pub fn label(&self) -> &'static str {
        match self {
            DayClassification::Normal => "normal",
            DayClassification::WeeklyHoliday => "weekly_holiday",
            DayClassification::CustomHoliday(_) => "custom_holiday",
            DayClassification::SwappedToWorkday => "swapped_to_workday",
            DayClassification::SwappedToHoliday => "swapped_to_holiday",
        }
    }
}

impl std::fmt::Display for DayClassification<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClassification::CustomHoliday(h) => write!(f, "custom_holiday({})", h.name),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// The holiday rules that apply to one employee.
///
/// Built once per employee and then queried for every date that needs
/// classifying.
#[derive(Debug, Clone)]
pub struct HolidayPolicy<'a> {
    weekly_holidays: [bool; 7],
    custom_holidays: &'a [CustomHoliday],
    swap_work_dates: HashSet<NaiveDate>,
    swap_holiday_dates: HashSet<NaiveDate>,
}

impl<'a> HolidayPolicy<'a> {
    /// Creates a policy from explicit parts.
    ///
    /// Weekday indices outside 0..=6 are ignored. Only approved swaps are
    /// taken into account.
    pub fn new<'s, I>(
        weekly_holidays: &[u8],
        custom_holidays: &'a [CustomHoliday],
        swaps: I,
    ) -> Self
    where
        I: IntoIterator<Item = &'s SwapRequest>,
    {
        let mut weekdays = [false; 7];
        for &index in weekly_holidays {
            if let Some(slot) = weekdays.get_mut(index as usize) {
                *slot = true;
            }
        }

        let mut swap_work_dates = HashSet::new();
        let mut swap_holiday_dates = HashSet::new();
        for swap in swaps.into_iter().filter(|s| s.is_approved()) {
            swap_work_dates.insert(swap.work_date);
            swap_holiday_dates.insert(swap.holiday_date);
        }

        Self {
            weekly_holidays: weekdays,
            custom_holidays,
            swap_work_dates,
            swap_holiday_dates,
        }
    }

    /// Resolves the policy for an employee.
    ///
    /// With `use_individual_holidays` set, the employee's own custom holidays
    /// replace the system list, and the employee's weekly holidays replace the
    /// system set when the employee has an override. Swaps belonging to other
    /// employees are ignored.
    pub fn for_employee<'s, I>(employee: &'a Employee, config: &'a SystemConfig, swaps: I) -> Self
    where
        I: IntoIterator<Item = &'s SwapRequest>,
    {
        let (weekly, custom): (&[u8], &'a [CustomHoliday]) = if config.use_individual_holidays {
            (
                employee
                    .weekly_holidays
                    .as_deref()
                    .unwrap_or(config.weekly_holidays.as_slice()),
                employee.custom_holidays.as_slice(),
            )
        } else {
            (
                config.weekly_holidays.as_slice(),
                config.custom_holidays.as_slice(),
            )
        };

        let own_swaps = swaps
            .into_iter()
            .filter(|s| s.employee_id == employee.id);

        Self::new(weekly, custom, own_swaps)
    }

    /// Classifies a date under this policy.
    pub fn classify(&self, date: NaiveDate) -> DayClassification<'a> {
        classify_day(date, self)
    }
}

/// Classifies a date for the employee whose policy is given.
///
/// The first matching rule wins:
/// 1. the date is a custom holiday (first match in list order)
/// 2. the date is the work date of an approved swap
/// 3. the date is the holiday date of an approved swap
/// 4. the weekday is a weekly holiday
/// 5. otherwise a normal day
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{classify_day, DayClassification, HolidayPolicy};
/// use chrono::NaiveDate;
///
/// let policy = HolidayPolicy::new(&[0, 6], &[], []);
///
/// // 2026-01-17 is a Saturday, 2026-01-19 a Monday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
/// assert_eq!(classify_day(saturday, &policy), DayClassification::WeeklyHoliday);
/// assert_eq!(classify_day(monday, &policy), DayClassification::Normal);
/// ```
pub fn classify_day<'a>(date: NaiveDate, policy: &HolidayPolicy<'a>) -> DayClassification<'a> {
    if let Some(holiday) = policy.custom_holidays.iter().find(|h| h.falls_on(date)) {
        return DayClassification::CustomHoliday(holiday);
    }
    if policy.swap_work_dates.contains(&date) {
        return DayClassification::SwappedToWorkday;
    }
    if policy.swap_holiday_dates.contains(&date) {
        return DayClassification::SwappedToHoliday;
    }
    if policy.weekly_holidays[date.weekday().num_days_from_sunday() as usize] {
        return DayClassification::WeeklyHoliday;
    }
    DayClassification::Normal
}
