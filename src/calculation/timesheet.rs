//! Monthly timesheet calculation.
//!
//! Turns a month of clock records into hour-bank, paid-overtime and
//! shortfall figures, then into a proportional salary.
//!
//! ## Rules
//!
//! - Weekday hours above the daily threshold go to the hour bank (unpaid).
//! - Weekday hours below the daily threshold, on a day with any hours,
//!   are a shortfall deducted at the hourly rate.
//! - Weekend hours are paid overtime.
//! - Hours above the weekly threshold (weeks run Sunday to Saturday,
//!   weekend hours included) are paid overtime, spread evenly over that
//!   week's weekdays. A week with no weekdays pays no weekly excess.
//! - Paid overtime is worth the hourly rate × 1.5.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::config::TimesheetConfig;
use crate::error::{HrError, HrResult};
use crate::models::{
    DayKind, TimesheetDay, TimesheetSummary, TimesheetTotals, WorkDay, WorkPeriod,
};

use super::calendar::{month_days, working_days_in_month};
use super::overtime::{
    OVERTIME_50_MULTIPLIER, checked_add, checked_mul, hourly_rate, non_negative, round_money,
};
use super::worked_hours::total_hours;

/// Computes the timesheet of one month.
///
/// # Arguments
///
/// * `year`, `month` - The month being computed (month 1 to 12)
/// * `salary` - Monthly base salary
/// * `days` - Clock records; dates not listed count as days off
/// * `config` - Daily and weekly thresholds
///
/// # Returns
///
/// A [`TimesheetSummary`] with one line per calendar day of the month.
///
/// Fails with `InvalidInput` if the salary or a threshold is negative, the
/// month is invalid, or `days` contains a date outside the month or the
/// same date twice.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::{compute_timesheet, standard_schedule};
/// use hr_overtime::config::TimesheetConfig;
/// use rust_decimal::Decimal;
///
/// let config = TimesheetConfig::default();
/// let days = standard_schedule(2026, 2, &config).unwrap();
/// let summary = compute_timesheet(2026, 2, Decimal::from(2200), &days, &config).unwrap();
///
/// // 20 weekdays of 9 hours: 1 banked hour per day, 1 paid hour per week
/// assert_eq!(summary.totals.banked_overtime_hours, Decimal::from(20));
/// assert_eq!(summary.totals.paid_overtime_hours, Decimal::from(4));
/// assert_eq!(summary.totals.overtime_pay.to_string(), "60.00");
/// ```
pub fn compute_timesheet(
    year: i32,
    month: u32,
    salary: Decimal,
    days: &[WorkDay],
    config: &TimesheetConfig,
) -> HrResult<TimesheetSummary> {
    let salary = non_negative("salary", salary)?;
    let daily = non_negative("daily_hours", config.daily_hours)?;
    let weekly = non_negative("weekly_hours", config.weekly_hours)?;
    let calendar = month_days(year, month)?;
    let records = index_records(year, month, days)?;

    let rate = hourly_rate(salary);

    let mut lines: Vec<TimesheetDay> = calendar
        .iter()
        .map(|date| {
            let periods = records.get(date).cloned().unwrap_or_default();
            let worked = total_hours(periods.iter().map(|p| (p.start, p.end)));
            let kind = DayKind::of(*date);

            let mut line = TimesheetDay {
                date: *date,
                kind,
                periods,
                worked_hours: worked,
                banked_overtime: Decimal::ZERO,
                paid_overtime: Decimal::ZERO,
                shortfall_hours: Decimal::ZERO,
                deduction: Decimal::ZERO,
            };

            match kind {
                DayKind::Weekday if worked > daily => {
                    line.banked_overtime = worked - daily;
                }
                DayKind::Weekday if worked > Decimal::ZERO && worked < daily => {
                    line.shortfall_hours = daily - worked;
                    line.deduction = round_money(line.shortfall_hours * rate);
                }
                DayKind::Weekend => {
                    line.paid_overtime = worked;
                }
                _ => {}
            }
            line
        })
        .collect();

    let weekly_excess = spread_weekly_excess(&mut lines, weekly);

    let worked: Decimal = lines.iter().map(|l| l.worked_hours).sum();
    let banked: Decimal = lines.iter().map(|l| l.banked_overtime).sum();
    let shortfall: Decimal = lines.iter().map(|l| l.shortfall_hours).sum();
    let weekend: Decimal = lines
        .iter()
        .filter(|l| l.kind == DayKind::Weekend)
        .map(|l| l.worked_hours)
        .sum();
    let paid = weekend + weekly_excess;

    let expected = Decimal::from(working_days_in_month(year, month)?) * daily;
    let proportional = if worked < expected {
        salary * (worked / expected)
    } else {
        salary
    };

    let overtime_pay = checked_mul("salary", rate * OVERTIME_50_MULTIPLIER, paid)?;
    let deductions = checked_mul("salary", rate, shortfall)?;
    let net_total = checked_add("salary", proportional, overtime_pay)?;

    Ok(TimesheetSummary {
        year,
        month,
        days: lines,
        totals: TimesheetTotals {
            base_salary: round_money(salary),
            worked_hours: worked.round_dp(2),
            expected_hours: expected.round_dp(2),
            banked_overtime_hours: banked.round_dp(2),
            paid_overtime_hours: paid.round_dp(2),
            shortfall_hours: shortfall.round_dp(2),
            hourly_rate: round_money(rate),
            overtime_pay: round_money(overtime_pay),
            deductions: round_money(deductions),
            proportional_salary: round_money(proportional),
            net_total: round_money(net_total),
        },
    })
}

/// Maps each recorded date to its periods, rejecting foreign or repeated dates.
fn index_records(
    year: i32,
    month: u32,
    days: &[WorkDay],
) -> HrResult<BTreeMap<NaiveDate, Vec<WorkPeriod>>> {
    let mut records = BTreeMap::new();
    for day in days {
        if day.date.year() != year || day.date.month() != month {
            return Err(HrError::invalid_input(
                "days",
                format!("{} is outside {}-{:02}", day.date, year, month),
            ));
        }
        if records.insert(day.date, day.periods.clone()).is_some() {
            return Err(HrError::invalid_input(
                "days",
                format!("{} is listed more than once", day.date),
            ));
        }
    }
    Ok(records)
}

/// Pays out the hours of a week above the weekly threshold.
///
/// Weeks end on Saturday or on the last day of the month, and their total
/// counts weekend hours too. The excess of each week is shared evenly
/// (rounded to 2 places for display) among its weekdays; a week without
/// weekdays is skipped. Returns the unrounded total excess of the month.
fn spread_weekly_excess(lines: &mut [TimesheetDay], weekly_hours: Decimal) -> Decimal {
    let mut total_excess = Decimal::ZERO;
    let mut week_start = 0;

    for index in 0..lines.len() {
        let is_week_end =
            lines[index].date.weekday() == Weekday::Sat || index == lines.len() - 1;
        if !is_week_end {
            continue;
        }

        let week = &mut lines[week_start..=index];
        week_start = index + 1;

        let week_hours: Decimal = week.iter().map(|l| l.worked_hours).sum();
        let weekdays = week.iter().filter(|l| l.kind == DayKind::Weekday).count();
        if week_hours <= weekly_hours || weekdays == 0 {
            continue;
        }

        let excess = week_hours - weekly_hours;
        let share = (excess / Decimal::from(weekdays)).round_dp(2);
        for line in week.iter_mut().filter(|l| l.kind == DayKind::Weekday) {
            line.paid_overtime += share;
        }
        total_excess += excess;
    }

    total_excess
}
