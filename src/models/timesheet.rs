//! Monthly timesheet models.
//!
//! This module contains the clock-in/clock-out input of a month
//! ([`WorkDay`], [`WorkPeriod`]) and the computed [`TimesheetSummary`].

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::hours_between;

/// A single clock-in/clock-out period.
///
/// When `end` is earlier than `start` the period crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPeriod {
    /// Clock-in time.
    pub start: NaiveTime,
    /// Clock-out time.
    pub end: NaiveTime,
}

impl WorkPeriod {
    /// Returns the length of the period in hours, rounded to 2 places.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_overtime::models::WorkPeriod;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let morning = WorkPeriod {
    ///     start: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    /// };
    /// assert_eq!(morning.hours(), Decimal::new(450, 2));
    /// ```
    pub fn hours(&self) -> Decimal {
        hours_between(self.start, self.end)
    }
}

/// The clock records of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Periods worked on this date, in clock order.
    #[serde(default)]
    pub periods: Vec<WorkPeriod>,
}

impl WorkDay {
    /// Creates a day with no recorded periods.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            periods: Vec::new(),
        }
    }
}

/// Whether a date is an ordinary working day or part of the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday; every hour worked is paid overtime.
    Weekend,
}

impl DayKind {
    /// Classifies a date.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }
}

/// The computed line for one day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Weekday or weekend.
    pub kind: DayKind,
    /// The periods recorded on this date.
    pub periods: Vec<WorkPeriod>,
    /// Hours worked.
    pub worked_hours: Decimal,
    /// Hours above the daily threshold sent to the hour bank.
    pub banked_overtime: Decimal,
    /// Paid overtime attributed to this day (weekend hours or a share of
    /// the weekly excess).
    pub paid_overtime: Decimal,
    /// Hours missing to reach the daily threshold.
    pub shortfall_hours: Decimal,
    /// Monetary value of the shortfall.
    pub deduction: Decimal,
}

/// Aggregated results of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetTotals {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Total hours worked in the month.
    pub worked_hours: Decimal,
    /// Working days in the month multiplied by the daily threshold.
    pub expected_hours: Decimal,
    /// Total hours sent to the hour bank.
    pub banked_overtime_hours: Decimal,
    /// Total paid overtime hours.
    pub paid_overtime_hours: Decimal,
    /// Total hours missing on worked weekdays.
    pub shortfall_hours: Decimal,
    /// Salary divided by the monthly hours divisor.
    pub hourly_rate: Decimal,
    /// Paid overtime hours at 150%.
    pub overtime_pay: Decimal,
    /// Monetary value of the shortfall hours.
    pub deductions: Decimal,
    /// Salary scaled by worked over expected hours, capped at the salary.
    pub proportional_salary: Decimal,
    /// Proportional salary plus overtime pay.
    pub net_total: Decimal,
}

/// The computed timesheet of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// One line per day of the month, in date order.
    pub days: Vec<TimesheetDay>,
    /// Month totals.
    pub totals: TimesheetTotals,
}
