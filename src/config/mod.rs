//! Configuration loading and management for the HR overtime toolkit.
//!
//! This module loads the application configuration (server address and
//! timesheet thresholds) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use hr_overtime::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr.yaml").unwrap();
//! println!("Daily hours: {}", config.timesheet().daily_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, ClockPeriodConfig, DEFAULT_DAILY_HOURS, DEFAULT_WEEKLY_HOURS, ServerConfig,
    TimesheetConfig,
};
