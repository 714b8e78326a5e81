//! Attendance aggregation.
//!
//! Groups one employee's raw attendance events by calendar day, finds the
//! earliest check-in and latest check-out per day, and totals late minutes.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::models::{AttendanceEvent, AuditStep, PeriodRange};

use super::punctuality::{late_minutes_for_day, ot_minutes_for_day};

/// Attendance for a single worked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAttendance {
    /// The calendar day.
    pub date: NaiveDate,
    /// Number of events recorded on the day.
    pub event_count: u32,
    /// Earliest check-in instant across the day's events.
    pub earliest_check_in: Option<NaiveDateTime>,
    /// Latest check-out instant across the day's events.
    pub latest_check_out: Option<NaiveDateTime>,
    /// Late minutes charged for the day.
    pub late_minutes: u32,
    /// Minutes past standard check-out. Informational only.
    pub eligible_ot_minutes: u32,
}

/// The aggregated attendance of one employee over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// One entry per worked day, in date order.
    pub days: Vec<DayAttendance>,
    /// Number of distinct days with at least one event.
    pub worked_days: u32,
    /// Late minutes summed over all days.
    pub total_late_minutes: u32,
    /// Minutes past standard check-out summed over all days.
    pub total_eligible_ot_minutes: u32,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

impl AttendanceSummary {
    /// The worked dates, in order.
    pub fn worked_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }
}

#[derive(Default)]
struct DayAccumulator {
    event_count: u32,
    earliest_check_in: Option<NaiveDateTime>,
    latest_check_out: Option<NaiveDateTime>,
    recorded_late_minutes: Option<u32>,
}

/// Aggregates attendance events that fall inside `range`.
///
/// A day counts as worked when at least one event exists for it, whatever
/// its status. Late minutes for a day come from the earliest check-in; a day
/// with no check-in instant falls back to the largest `late_minutes` recorded
/// on its events, or zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::config::SystemConfig;
/// use payroll_engine::models::{AttendanceEvent, AttendanceStatus, CalculationPeriod};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let range = CalculationPeriod::CalendarMonth { year: 2026, month: 1 }.resolve().unwrap();
/// let check_in = NaiveDateTime::parse_from_str("2026-01-15 09:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let events = vec![AttendanceEvent {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     status: AttendanceStatus::CheckIn,
///     check_in: Some(check_in),
///     check_out: None,
///     late_minutes: None,
/// }];
///
/// let summary = aggregate_attendance(&events, &range, &SystemConfig::default(), 1);
/// assert_eq!(summary.worked_days, 1);
/// assert_eq!(summary.total_late_minutes, 40);
/// ```
pub fn aggregate_attendance<'e, I>(
    events: I,
    range: &PeriodRange,
    config: &SystemConfig,
    step_number: u32,
) -> AttendanceSummary
where
    I: IntoIterator<Item = &'e AttendanceEvent>,
{
    let mut by_day: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    let mut ignored_out_of_range = 0u32;

    for event in events {
        if !range.contains_date(event.date) {
            ignored_out_of_range += 1;
            continue;
        }

        let day = by_day.entry(event.date).or_default();
        day.event_count += 1;
        if let Some(check_in) = event.check_in {
            day.earliest_check_in = Some(match day.earliest_check_in {
                Some(current) => current.min(check_in),
                None => check_in,
            });
        }
        if let Some(check_out) = event.check_out {
            day.latest_check_out = Some(match day.latest_check_out {
                Some(current) => current.max(check_out),
                None => check_out,
            });
        }
        if let Some(recorded) = event.late_minutes {
            day.recorded_late_minutes = Some(day.recorded_late_minutes.unwrap_or(0).max(recorded));
        }
    }

    let days: Vec<DayAttendance> = by_day
        .into_iter()
        .map(|(date, acc)| {
            let late = match acc.earliest_check_in {
                Some(check_in) => late_minutes_for_day(date, check_in, config),
                None => acc.recorded_late_minutes.unwrap_or(0),
            };
            let eligible_ot = acc
                .latest_check_out
                .map(|check_out| ot_minutes_for_day(date, check_out, config))
                .unwrap_or(0);

            DayAttendance {
                date,
                event_count: acc.event_count,
                earliest_check_in: acc.earliest_check_in,
                latest_check_out: acc.latest_check_out,
                late_minutes: late,
                eligible_ot_minutes: eligible_ot,
            }
        })
        .collect();

    let worked_days = days.len() as u32;
    let total_late_minutes = days
        .iter()
        .fold(0u32, |acc, d| acc.saturating_add(d.late_minutes));
    let total_eligible_ot_minutes = days
        .iter()
        .fold(0u32, |acc, d| acc.saturating_add(d.eligible_ot_minutes));
    let late_days = days.iter().filter(|d| d.late_minutes > 0).count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_aggregation".to_string(),
        rule_name: "Attendance Aggregation".to_string(),
        input: serde_json::json!({
            "period_start": range.start_date.to_string(),
            "period_end": range.end_date.to_string(),
            "standard_check_in": config.standard_check_in.to_string(),
            "late_grace_minutes": config.late_grace_minutes,
            "events_outside_period": ignored_out_of_range
        }),
        output: serde_json::json!({
            "worked_days": worked_days,
            "late_days": late_days,
            "total_late_minutes": total_late_minutes,
            "total_eligible_ot_minutes": total_eligible_ot_minutes
        }),
        reasoning: format!(
            "{} worked day(s) in period, {} late day(s) totalling {} minute(s)",
            worked_days, late_days, total_late_minutes
        ),
    };

    AttendanceSummary {
        days,
        worked_days,
        total_late_minutes,
        total_eligible_ot_minutes,
        audit_step,
    }
}
