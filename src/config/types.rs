//! Configuration types for the HR overtime toolkit.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults so a partial file (or no file at all) still yields a usable
//! configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_clock_time;
use crate::error::HrResult;
use crate::models::WorkPeriod;

/// Default number of ordinary hours in a working day.
pub const DEFAULT_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default number of ordinary hours in a working week.
pub const DEFAULT_WEEKLY_HOURS: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The interface to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A clock period as written in the configuration file (`"07:30"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPeriodConfig {
    /// Start of the period, `HH:MM`.
    pub start: String,
    /// End of the period, `HH:MM`.
    pub end: String,
}

/// Working-time thresholds used by the monthly timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetConfig {
    /// Ordinary hours per weekday; anything above goes to the hour bank.
    pub daily_hours: Decimal,
    /// Ordinary hours per week; anything above is paid overtime.
    pub weekly_hours: Decimal,
    /// The company's standard schedule for a weekday.
    pub standard_schedule: Vec<ClockPeriodConfig>,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            daily_hours: DEFAULT_DAILY_HOURS,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            standard_schedule: vec![
                ClockPeriodConfig {
                    start: "07:30".to_string(),
                    end: "12:00".to_string(),
                },
                ClockPeriodConfig {
                    start: "13:30".to_string(),
                    end: "18:00".to_string(),
                },
            ],
        }
    }
}

impl TimesheetConfig {
    /// Parses the configured standard schedule into work periods.
    ///
    /// Fails with `InvalidInput` if any configured time is not `HH:MM`.
    pub fn standard_periods(&self) -> HrResult<Vec<WorkPeriod>> {
        self.standard_schedule
            .iter()
            .map(|period| {
                Ok(WorkPeriod {
                    start: parse_clock_time("standard_schedule.start", &period.start)?,
                    end: parse_clock_time("standard_schedule.end", &period.end)?,
                })
            })
            .collect()
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Monthly timesheet thresholds and standard schedule.
    pub timesheet: TimesheetConfig,
}
