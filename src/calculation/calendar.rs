//! Month calendar helpers for the timesheet.
//!
//! Provides the list of dates in a month, the count of working days
//! (Monday to Friday) and the company's standard schedule laid over a
//! month.

use chrono::{Datelike, NaiveDate};

use crate::config::TimesheetConfig;
use crate::error::{HrError, HrResult};
use crate::models::{DayKind, WorkDay};

/// Returns every date of the given month in order.
///
/// Fails with `InvalidInput` for a month outside 1 to 12 or a year chrono
/// cannot represent.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::month_days;
///
/// assert_eq!(month_days(2024, 2).unwrap().len(), 29);
/// assert_eq!(month_days(2026, 4).unwrap().len(), 30);
/// assert!(month_days(2026, 13).is_err());
/// ```
pub fn month_days(year: i32, month: u32) -> HrResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        HrError::invalid_input("month", format!("{}-{} is not a valid month", year, month))
    })?;

    Ok(first
        .iter_days()
        .take_while(|date| date.month() == month)
        .collect())
}

/// Counts the Monday-to-Friday dates of a month.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::working_days_in_month;
///
/// // January 2026 starts on a Thursday
/// assert_eq!(working_days_in_month(2026, 1).unwrap(), 22);
/// ```
pub fn working_days_in_month(year: i32, month: u32) -> HrResult<u32> {
    let count = month_days(year, month)?
        .into_iter()
        .filter(|date| DayKind::of(*date) == DayKind::Weekday)
        .count();
    Ok(count as u32)
}

/// Lays the configured standard schedule over every weekday of a month.
///
/// Weekend days are returned with no periods.
pub fn standard_schedule(
    year: i32,
    month: u32,
    config: &TimesheetConfig,
) -> HrResult<Vec<WorkDay>> {
    let periods = config.standard_periods()?;

    Ok(month_days(year, month)?
        .into_iter()
        .map(|date| match DayKind::of(date) {
            DayKind::Weekday => WorkDay {
                date,
                periods: periods.clone(),
            },
            DayKind::Weekend => WorkDay::empty(date),
        })
        .collect())
}
