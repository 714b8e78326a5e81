//! Payroll line item assembly and batch runs.
//!
//! [`calculate_line_item`] composes the per-employee calculations in a fixed
//! order, each contributing one audit step:
//!
//! 1. attendance aggregation
//! 2. base income
//! 3. custom-holiday work bonus
//! 4. overtime tiers
//! 5. late deduction
//! 6. totals
//!
//! [`run_payroll`] groups the input collections by employee once and builds
//! line items for all matching employees in parallel.

use std::collections::HashMap;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SystemConfig;
use crate::error::EngineResult;
use crate::models::{
    AttendanceEvent, AuditStep, AuditTrace, Employee, OtRequest, PayrollLineItem,
    PayrollParameters, PeriodRange, SwapRequest,
};

use super::attendance::aggregate_attendance;
use super::base_income::{calculate_base_income, calculate_custom_holiday_work};
use super::day_classifier::HolidayPolicy;
use super::deduction::calculate_late_deduction;
use super::overtime::calculate_overtime;

/// The records belonging to one employee.
#[derive(Debug, Clone, Default)]
pub struct EmployeeRecords<'a> {
    /// Attendance events.
    pub attendance: Vec<&'a AttendanceEvent>,
    /// Overtime requests, of any status.
    pub ot_requests: Vec<&'a OtRequest>,
    /// Swap requests, of any status.
    pub swap_requests: Vec<&'a SwapRequest>,
}

/// Groups attendance, overtime and swap records by employee id in one pass.
pub fn group_by_employee<'a>(
    attendance: &'a [AttendanceEvent],
    ot_requests: &'a [OtRequest],
    swap_requests: &'a [SwapRequest],
) -> HashMap<&'a str, EmployeeRecords<'a>> {
    let mut grouped: HashMap<&'a str, EmployeeRecords<'a>> = HashMap::new();

    for event in attendance {
        grouped
            .entry(event.employee_id.as_str())
            .or_default()
            .attendance
            .push(event);
    }
    for request in ot_requests {
        grouped
            .entry(request.employee_id.as_str())
            .or_default()
            .ot_requests
            .push(request);
    }
    for swap in swap_requests {
        grouped
            .entry(swap.employee_id.as_str())
            .or_default()
            .swap_requests
            .push(swap);
    }

    grouped
}

/// Builds the payroll line item for one employee.
///
/// `records` must contain only this employee's records; swaps belonging to
/// other employees are ignored regardless.
pub fn calculate_line_item(
    employee: &Employee,
    records: &EmployeeRecords<'_>,
    config: &SystemConfig,
    range: &PeriodRange,
) -> PayrollLineItem {
    let mut trace = AuditTrace::default();
    let policy = HolidayPolicy::for_employee(
        employee,
        config,
        records.swap_requests.iter().copied(),
    );

    let attendance = aggregate_attendance(records.attendance.iter().copied(), range, config, 1);
    trace.steps.push(attendance.audit_step.clone());

    let base = calculate_base_income(employee, range, attendance.worked_days, 2);
    let hourly_rate = base.hourly_rate;
    trace.steps.push(base.audit_step);

    let holiday_work =
        calculate_custom_holiday_work(attendance.worked_dates(), &policy, hourly_rate, 3);
    trace.steps.push(holiday_work.audit_step);

    let overtime = calculate_overtime(
        records.ot_requests.iter().copied(),
        range,
        &policy,
        hourly_rate,
        config,
        4,
    );
    let ot_hours = overtime.total_hours();
    let total_ot_pay = overtime.total_pay();
    trace.steps.push(overtime.audit_step);
    trace.warnings.extend(overtime.warnings);

    let deduction = calculate_late_deduction(attendance.total_late_minutes, hourly_rate, config, 5);
    trace.steps.push(deduction.audit_step);

    let total_income = base
        .income
        .saturating_add(holiday_work.pay)
        .saturating_add(total_ot_pay);
    let total_deduction = deduction.amount;
    let net_total = total_income.saturating_sub(total_deduction);

    trace.steps.push(AuditStep {
        step_number: 6,
        rule_id: "payroll_totals".to_string(),
        rule_name: "Payroll Totals".to_string(),
        input: serde_json::json!({
            "base_income": base.income.to_string(),
            "custom_holiday_work_pay": holiday_work.pay.to_string(),
            "ot_pay_normal": overtime.normal.pay.to_string(),
            "ot_pay_holiday": overtime.holiday.pay.to_string(),
            "ot_pay_special": overtime.special.pay.to_string(),
            "late_deduction": deduction.amount.to_string()
        }),
        output: serde_json::json!({
            "total_income": total_income.to_string(),
            "total_deduction": total_deduction.to_string(),
            "net_total": net_total.to_string()
        }),
        reasoning: format!(
            "Income {} + {} + {} = {}; net {} - {} = {}",
            base.income,
            holiday_work.pay,
            total_ot_pay,
            total_income,
            total_income,
            total_deduction,
            net_total
        ),
    });

    debug!(
        employee_id = %employee.id,
        worked_days = attendance.worked_days,
        total_income = %total_income,
        total_deduction = %total_deduction,
        net_total = %net_total,
        "Line item calculated"
    );

    PayrollLineItem {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        department: employee.department.clone(),
        pay_type: employee.pay_type,
        base_salary: employee.base_salary,
        hourly_rate,
        worked_days: attendance.worked_days,
        total_late_minutes: attendance.total_late_minutes,
        eligible_ot_minutes: attendance.total_eligible_ot_minutes,
        base_income: base.income,
        custom_holiday_work_days: holiday_work.days,
        custom_holiday_work_hours: holiday_work.hours,
        custom_holiday_work_pay: holiday_work.pay,
        ot_normal: overtime.normal,
        ot_holiday: overtime.holiday,
        ot_special: overtime.special,
        ot_hours,
        total_ot_pay,
        ot_requests_counted: overtime.counted,
        ot_requests_skipped: overtime.skipped,
        late_deduction: deduction.amount,
        total_income,
        total_deduction,
        net_total,
        audit_trace: trace,
    }
}

/// Calculates payroll for every employee matching `parameters`.
///
/// Line items are returned in the order the employees were given. Fails only
/// if the period cannot be resolved; configuration values are applied as given
/// and out-of-range weekday indices in `weekly_holidays` are ignored.
pub fn run_payroll(
    employees: &[Employee],
    attendance: &[AttendanceEvent],
    ot_requests: &[OtRequest],
    swap_requests: &[SwapRequest],
    config: &SystemConfig,
    parameters: &PayrollParameters,
) -> EngineResult<Vec<PayrollLineItem>> {
    let range = parameters.period.resolve()?;
    let start_time = Instant::now();

    let grouped = group_by_employee(attendance, ot_requests, swap_requests);
    let empty = EmployeeRecords::default();

    let selected: Vec<&Employee> = employees
        .iter()
        .filter(|e| parameters.matches(e.pay_type, &e.department))
        .collect();

    let items: Vec<PayrollLineItem> = selected
        .par_iter()
        .map(|employee| {
            let records = grouped.get(employee.id.as_str()).unwrap_or(&empty);
            calculate_line_item(employee, records, config, &range)
        })
        .collect();

    info!(
        period_start = %range.start_date,
        period_end = %range.end_date,
        employees_total = employees.len(),
        employees_matched = items.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Payroll run completed"
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LateDeductionType;
    use crate::error::EngineError;
    use crate::models::{
        AttendanceStatus, CalculationPeriod, CustomHoliday, PayType, RequestStatus,
    };
    use chrono::{Datelike, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn january() -> PeriodRange {
        CalculationPeriod::CalendarMonth {
            year: 2026,
            month: 1,
        }
        .resolve()
        .unwrap()
    }

    fn january_parameters() -> PayrollParameters {
        PayrollParameters {
            period: CalculationPeriod::CalendarMonth {
                year: 2026,
                month: 1,
            },
            pay_type: None,
            department: None,
        }
    }

    fn make_employee(id: &str, pay_type: PayType, base_salary: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            pay_type,
            base_salary: dec(base_salary),
            department: department.to_string(),
            weekly_holidays: None,
            custom_holidays: vec![],
        }
    }

    fn check_in(employee_id: &str, date: NaiveDate, time: &str) -> AttendanceEvent {
        let date_str = date.format("%Y-%m-%d").to_string();
        AttendanceEvent {
            employee_id: employee_id.to_string(),
            date,
            status: AttendanceStatus::CheckIn,
            check_in: Some(make_datetime(&date_str, time)),
            check_out: None,
            late_minutes: None,
        }
    }

    fn ot(employee_id: &str, date: &str, start: &str, end: &str) -> OtRequest {
        OtRequest {
            id: format!("ot_{}_{}", employee_id, date),
            employee_id: employee_id.to_string(),
            date: make_date(date),
            start_time: Some(make_datetime(date, start)),
            end_time: Some(make_datetime(date, end)),
            status: RequestStatus::Approved,
            reason: None,
        }
    }

    /// The weekdays of January 2026, 22 in total.
    fn january_weekdays() -> Vec<NaiveDate> {
        (1..=31)
            .filter_map(|d| NaiveDate::from_ymd_opt(2026, 1, d))
            .filter(|d| d.weekday().num_days_from_sunday() % 6 != 0)
            .collect()
    }

    fn pro_rated_config() -> SystemConfig {
        SystemConfig {
            late_deduction_type: LateDeductionType::ProRated,
            ..Default::default()
        }
    }

    #[test]
    fn test_monthly_employee_with_late_minutes() {
        let employee = make_employee("emp_001", PayType::Monthly, "30000", "sales");
        let days = january_weekdays();
        assert_eq!(days.len(), 22);

        // 40 late minutes spread over two days
        let attendance: Vec<AttendanceEvent> = days
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let time = match i {
                    0 => "09:15:00",
                    1 => "09:25:00",
                    _ => "08:55:00",
                };
                check_in("emp_001", d, time)
            })
            .collect();
        let records = EmployeeRecords {
            attendance: attendance.iter().collect(),
            ..Default::default()
        };

        let item = calculate_line_item(&employee, &records, &pro_rated_config(), &january());

        assert_eq!(item.worked_days, 22);
        assert_eq!(item.total_late_minutes, 40);
        assert_eq!(item.hourly_rate, dec("125"));
        assert_eq!(item.base_income, dec("30000"));
        assert_eq!(item.late_deduction, dec("83"));
        assert_eq!(item.total_income, dec("30000"));
        assert_eq!(item.net_total, dec("29917"));
    }

    #[test]
    fn test_weekly_holiday_overtime_pays_holiday_tier() {
        let employee = make_employee("emp_001", PayType::Monthly, "30000", "sales");
        let requests = vec![ot("emp_001", "2026-01-17", "09:00:00", "12:00:00")];
        let records = EmployeeRecords {
            ot_requests: requests.iter().collect(),
            ..Default::default()
        };

        let item = calculate_line_item(&employee, &records, &SystemConfig::default(), &january());

        assert_eq!(item.ot_holiday.pay, dec("1125"));
        assert_eq!(item.total_ot_pay, dec("1125"));
        assert_eq!(item.total_income, dec("31125"));
        assert_eq!(item.ot_requests_counted, 1);
    }

    #[test]
    fn test_custom_holiday_work_adds_bonus() {
        let employee = make_employee("emp_001", PayType::Monthly, "30000", "sales");
        let config = SystemConfig {
            custom_holidays: vec![CustomHoliday {
                date: make_date("2026-01-01"),
                name: "New Year".to_string(),
                workday_multiplier: dec("2.0"),
                ot_multiplier: dec("3.0"),
            }],
            ..Default::default()
        };
        let attendance = vec![check_in("emp_001", make_date("2026-01-01"), "09:00:00")];
        let records = EmployeeRecords {
            attendance: attendance.iter().collect(),
            ..Default::default()
        };

        let item = calculate_line_item(&employee, &records, &config, &january());

        assert_eq!(item.custom_holiday_work_days, 1);
        assert_eq!(item.custom_holiday_work_hours, dec("8"));
        assert_eq!(item.custom_holiday_work_pay, dec("1000"));
        assert_eq!(item.total_income, dec("31000"));
    }

    #[test]
    fn test_daily_employee_income_and_rate() {
        let employee = make_employee("emp_002", PayType::Daily, "500", "warehouse");
        let attendance: Vec<AttendanceEvent> = january_weekdays()
            .into_iter()
            .take(20)
            .map(|d| check_in("emp_002", d, "08:50:00"))
            .collect();
        let records = EmployeeRecords {
            attendance: attendance.iter().collect(),
            ..Default::default()
        };

        let item = calculate_line_item(&employee, &records, &SystemConfig::default(), &january());

        assert_eq!(item.base_income, dec("10000"));
        assert_eq!(item.hourly_rate, dec("62.5"));
        assert_eq!(item.net_total, dec("10000"));
    }

    #[test]
    fn test_skipped_request_recorded_as_warning() {
        let employee = make_employee("emp_001", PayType::Monthly, "30000", "sales");
        let mut broken = ot("emp_001", "2026-01-20", "18:00:00", "20:00:00");
        broken.start_time = None;
        let requests = vec![broken];
        let records = EmployeeRecords {
            ot_requests: requests.iter().collect(),
            ..Default::default()
        };

        let item = calculate_line_item(&employee, &records, &SystemConfig::default(), &january());

        assert_eq!(item.ot_requests_skipped, 1);
        assert_eq!(item.ot_requests_counted, 0);
        assert_eq!(item.audit_trace.warnings.len(), 1);
        assert_eq!(item.audit_trace.warnings[0].code, "OT_REQUEST_SKIPPED");
    }

    #[test]
    fn test_audit_trace_has_six_ordered_steps() {
        let employee = make_employee("emp_001", PayType::Monthly, "30000", "sales");
        let item = calculate_line_item(
            &employee,
            &EmployeeRecords::default(),
            &SystemConfig::default(),
            &january(),
        );

        let rule_ids: Vec<&str> = item
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "attendance_aggregation",
                "base_income",
                "custom_holiday_work",
                "overtime_tiers",
                "late_deduction",
                "payroll_totals"
            ]
        );
        let numbers: Vec<u32> = item.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_group_by_employee_single_pass() {
        let attendance = vec![
            check_in("emp_001", make_date("2026-01-05"), "09:00:00"),
            check_in("emp_002", make_date("2026-01-05"), "09:00:00"),
            check_in("emp_001", make_date("2026-01-06"), "09:00:00"),
        ];
        let requests = vec![ot("emp_002", "2026-01-05", "18:00:00", "19:00:00")];

        let grouped = group_by_employee(&attendance, &requests, &[]);

        assert_eq!(grouped["emp_001"].attendance.len(), 2);
        assert_eq!(grouped["emp_002"].attendance.len(), 1);
        assert_eq!(grouped["emp_002"].ot_requests.len(), 1);
        assert!(grouped["emp_001"].ot_requests.is_empty());
    }

    #[test]
    fn test_run_payroll_preserves_order_and_filters() {
        let employees = vec![
            make_employee("emp_003", PayType::Daily, "500", "warehouse"),
            make_employee("emp_001", PayType::Monthly, "30000", "sales"),
            make_employee("emp_002", PayType::Monthly, "24000", "warehouse"),
        ];

        let all = run_payroll(
            &employees,
            &[],
            &[],
            &[],
            &SystemConfig::default(),
            &january_parameters(),
        )
        .unwrap();
        let ids: Vec<&str> = all.iter().map(|i| i.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_003", "emp_001", "emp_002"]);

        let parameters = PayrollParameters {
            pay_type: Some(PayType::Monthly),
            department: Some("warehouse".to_string()),
            ..january_parameters()
        };
        let filtered = run_payroll(
            &employees,
            &[],
            &[],
            &[],
            &SystemConfig::default(),
            &parameters,
        )
        .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].employee_id, "emp_002");
    }

    #[test]
    fn test_run_payroll_routes_records_to_their_employee() {
        let employees = vec![
            make_employee("emp_001", PayType::Daily, "500", "sales"),
            make_employee("emp_002", PayType::Daily, "600", "sales"),
        ];
        let attendance = vec![
            check_in("emp_001", make_date("2026-01-05"), "09:00:00"),
            check_in("emp_001", make_date("2026-01-06"), "09:00:00"),
            check_in("emp_002", make_date("2026-01-05"), "09:00:00"),
            check_in("emp_999", make_date("2026-01-05"), "09:00:00"),
        ];

        let items = run_payroll(
            &employees,
            &attendance,
            &[],
            &[],
            &SystemConfig::default(),
            &january_parameters(),
        )
        .unwrap();

        assert_eq!(items[0].worked_days, 2);
        assert_eq!(items[0].base_income, dec("1000"));
        assert_eq!(items[1].worked_days, 1);
        assert_eq!(items[1].base_income, dec("600"));
    }

    #[test]
    fn test_run_payroll_rejects_invalid_period() {
        let parameters = PayrollParameters {
            period: CalculationPeriod::CalendarMonth {
                year: 2026,
                month: 13,
            },
            pay_type: None,
            department: None,
        };

        let result = run_payroll(&[], &[], &[], &[], &SystemConfig::default(), &parameters);

        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_run_payroll_ignores_out_of_range_weekly_holiday() {
        let employees = vec![make_employee("emp_001", PayType::Monthly, "30000", "sales")];
        let requests = vec![
            ot("emp_001", "2026-01-17", "09:00:00", "12:00:00"),
            ot("emp_001", "2026-01-20", "18:00:00", "20:00:00"),
        ];
        let config = SystemConfig {
            weekly_holidays: vec![0, 6, 7],
            ..Default::default()
        };

        let items = run_payroll(
            &employees,
            &[],
            &requests,
            &[],
            &config,
            &january_parameters(),
        )
        .unwrap();

        // Saturday stays a holiday, Tuesday stays a workday
        assert_eq!(items[0].ot_holiday.hours, dec("3"));
        assert_eq!(items[0].ot_holiday.pay, dec("1125"));
        assert_eq!(items[0].ot_normal.hours, dec("2"));
        assert_eq!(items[0].ot_normal.pay, dec("375"));
        assert_eq!(items[0].ot_requests_counted, 2);
    }

    #[test]
    fn test_run_payroll_applies_sub_unit_workday_multiplier() {
        let employees = vec![make_employee("emp_001", PayType::Monthly, "30000", "sales")];
        let attendance = vec![check_in("emp_001", make_date("2026-01-01"), "09:00:00")];
        let config = SystemConfig {
            custom_holidays: vec![CustomHoliday {
                date: make_date("2026-01-01"),
                name: "New Year".to_string(),
                workday_multiplier: dec("0.5"),
                ot_multiplier: dec("3.0"),
            }],
            ..Default::default()
        };

        let items = run_payroll(
            &employees,
            &attendance,
            &[],
            &[],
            &config,
            &january_parameters(),
        )
        .unwrap();

        // 8h x 125 x (0.5 - 1)
        assert_eq!(items[0].custom_holiday_work_pay, dec("-500"));
        assert_eq!(items[0].total_income, dec("29500"));
        assert_eq!(items[0].net_total, dec("29500"));
    }

    #[test]
    fn test_run_payroll_saturates_huge_salary() {
        let mut employee = make_employee("emp_001", PayType::Daily, "0", "sales");
        employee.base_salary = Decimal::MAX / Decimal::from(2);
        let attendance: Vec<AttendanceEvent> = january_weekdays()
            .into_iter()
            .take(3)
            .map(|d| check_in("emp_001", d, "08:55:00"))
            .collect();
        let requests = vec![ot("emp_001", "2026-01-20", "18:00:00", "20:00:00")];

        let items = run_payroll(
            &[employee],
            &attendance,
            &requests,
            &[],
            &pro_rated_config(),
            &january_parameters(),
        )
        .unwrap();

        assert_eq!(items[0].worked_days, 3);
        assert_eq!(items[0].base_income, Decimal::MAX);
        assert_eq!(items[0].total_income, Decimal::MAX);
        assert_eq!(items[0].net_total, Decimal::MAX);
    }

    #[test]
    fn test_run_payroll_is_deterministic() {
        let employees = vec![
            make_employee("emp_001", PayType::Monthly, "30000", "sales"),
            make_employee("emp_002", PayType::Daily, "500", "sales"),
        ];
        let attendance = vec![
            check_in("emp_001", make_date("2026-01-05"), "09:20:00"),
            check_in("emp_002", make_date("2026-01-05"), "09:07:00"),
        ];
        let requests = vec![
            ot("emp_001", "2026-01-17", "09:00:00", "12:30:00"),
            ot("emp_002", "2026-01-06", "18:00:00", "19:15:00"),
        ];
        let config = pro_rated_config();

        let first = run_payroll(
            &employees,
            &attendance,
            &requests,
            &[],
            &config,
            &january_parameters(),
        )
        .unwrap();
        let second = run_payroll(
            &employees,
            &attendance,
            &requests,
            &[],
            &config,
            &january_parameters(),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_net_total_is_income_minus_deduction(
            salary in 1_000u32..200_000,
            late_times in proptest::collection::vec(0u32..120, 0..20),
            ot_minutes in proptest::collection::vec(0u32..600, 0..10),
        ) {
            let employee = make_employee("emp_001", PayType::Monthly, &salary.to_string(), "sales");
            let attendance: Vec<AttendanceEvent> = late_times
                .iter()
                .enumerate()
                .map(|(i, &late)| {
                    let date = NaiveDate::from_ymd_opt(2026, 1, i as u32 + 1).unwrap();
                    let time = format!("{:02}:{:02}:00", 9 + late / 60, late % 60);
                    check_in("emp_001", date, &time)
                })
                .collect();
            let requests: Vec<OtRequest> = ot_minutes
                .iter()
                .enumerate()
                .map(|(i, &minutes)| {
                    let date = format!("2026-01-{:02}", i + 1);
                    let end = format!("{:02}:{:02}:00", 8 + minutes / 60, minutes % 60);
                    ot("emp_001", &date, "08:00:00", &end)
                })
                .collect();
            let records = EmployeeRecords {
                attendance: attendance.iter().collect(),
                ot_requests: requests.iter().collect(),
                swap_requests: vec![],
            };

            let item = calculate_line_item(&employee, &records, &pro_rated_config(), &january());

            prop_assert_eq!(item.net_total, item.total_income - item.total_deduction);
            prop_assert_eq!(
                item.total_income,
                item.base_income
                    + item.custom_holiday_work_pay
                    + item.ot_normal.pay
                    + item.ot_holiday.pay
                    + item.ot_special.pay
            );
            prop_assert_eq!(
                item.ot_hours,
                item.ot_normal.hours + item.ot_holiday.hours + item.ot_special.hours
            );
            prop_assert_eq!(item.total_ot_pay, item.ot_normal.pay + item.ot_holiday.pay + item.ot_special.pay);
        }

        #[test]
        fn prop_no_lateness_means_no_deduction(salary in 1_000u32..200_000, days in 0usize..22) {
            let employee = make_employee("emp_001", PayType::Monthly, &salary.to_string(), "sales");
            let attendance: Vec<AttendanceEvent> = january_weekdays()
                .into_iter()
                .take(days)
                .map(|d| check_in("emp_001", d, "08:45:00"))
                .collect();
            let records = EmployeeRecords {
                attendance: attendance.iter().collect(),
                ..Default::default()
            };

            let item = calculate_line_item(&employee, &records, &pro_rated_config(), &january());

            prop_assert_eq!(item.late_deduction, Decimal::ZERO);
            prop_assert_eq!(item.net_total, item.base_income);
        }
    }
}
