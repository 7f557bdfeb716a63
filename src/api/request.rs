//! Request types for the HR API.
//!
//! The two form endpoints receive untyped strings; [`OvertimeForm`] and
//! [`EmployeeForm`] carry them as-is and are turned into typed values by an
//! explicit parse step before any business logic runs. The timesheet
//! endpoints take JSON ([`TimesheetRequest`]).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_clock_time, parse_decimal_field, require_text, standard_schedule};
use crate::config::TimesheetConfig;
use crate::error::HrResult;
use crate::models::{Employee, OvertimeRequest, WorkDay, WorkPeriod};

/// Form body of `POST /`.
///
/// Missing fields deserialize as empty strings and are reported by
/// [`OvertimeForm::parse`] as required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OvertimeForm {
    /// Monthly base salary.
    #[serde(default)]
    pub salario: String,
    /// Hours at 50%.
    #[serde(default)]
    pub he50: String,
    /// Hours at 100%.
    #[serde(default)]
    pub he100: String,
}

impl OvertimeForm {
    /// Parses the form into a typed overtime request.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_overtime::api::OvertimeForm;
    /// use rust_decimal::Decimal;
    ///
    /// let form = OvertimeForm {
    ///     salario: "2200".to_string(),
    ///     he50: "10".to_string(),
    ///     he100: "5".to_string(),
    /// };
    /// let request = form.parse().unwrap();
    /// assert_eq!(request.base_salary, Decimal::from(2200));
    /// ```
    pub fn parse(&self) -> HrResult<OvertimeRequest> {
        Ok(OvertimeRequest {
            base_salary: parse_decimal_field("salario", &self.salario)?,
            hours_50: parse_decimal_field("he50", &self.he50)?,
            hours_100: parse_decimal_field("he100", &self.he100)?,
        })
    }
}

/// Form body of `POST /funcionarios`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// Employee name.
    #[serde(default)]
    pub nome: String,
    /// Job title.
    #[serde(default)]
    pub cargo: String,
    /// Monthly salary.
    #[serde(default)]
    pub salario: String,
}

impl EmployeeForm {
    /// Parses the form into an employee record, naming the offending form
    /// field on failure.
    pub fn parse(&self) -> HrResult<Employee> {
        Ok(Employee {
            name: require_text("nome", &self.nome)?,
            role: require_text("cargo", &self.cargo)?,
            salary: parse_decimal_field("salario", &self.salario)?,
        })
    }
}

/// A clock-in/clock-out pair as typed by the user, e.g. `"07:30"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Clock-in time (`HH:MM`).
    pub start: String,
    /// Clock-out time (`HH:MM`).
    pub end: String,
}

/// The records of one day in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Periods worked on that date.
    #[serde(default)]
    pub periods: Vec<PeriodRequest>,
}

/// Request body for the `/timesheet` and `/timesheet/csv` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// Monthly base salary.
    pub salary: Decimal,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Recorded days. Days not listed count as days off.
    #[serde(default)]
    pub days: Vec<DayRequest>,
    /// Fill weekdays not listed in `days` with the standard schedule.
    #[serde(default)]
    pub use_standard_schedule: bool,
}

impl TimesheetRequest {
    /// Converts the request into typed work days.
    ///
    /// Clock times are parsed with [`parse_clock_time`]; a bad time fails
    /// with the offending date and side (`start`/`end`) as the field.
    pub fn work_days(&self, config: &TimesheetConfig) -> HrResult<Vec<WorkDay>> {
        let mut days = Vec::with_capacity(self.days.len());
        for day in &self.days {
            let mut periods = Vec::with_capacity(day.periods.len());
            for period in &day.periods {
                periods.push(WorkPeriod {
                    start: parse_clock_time(&format!("{}.start", day.date), &period.start)?,
                    end: parse_clock_time(&format!("{}.end", day.date), &period.end)?,
                });
            }
            days.push(WorkDay {
                date: day.date,
                periods,
            });
        }

        if self.use_standard_schedule {
            let listed: BTreeSet<NaiveDate> = days.iter().map(|d| d.date).collect();
            let standard = standard_schedule(self.year, self.month, config)?;
            days.extend(
                standard
                    .into_iter()
                    .filter(|d| !d.periods.is_empty() && !listed.contains(&d.date)),
            );
        }

        Ok(days)
    }
}
