//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{HrError, HrResult};

use super::types::{AppConfig, ServerConfig, TimesheetConfig};

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 5000
/// timesheet:
///   daily_hours: 8
///   weekly_hours: 44
///   standard_schedule:
///     - { start: "07:30", end: "12:00" }
///     - { start: "13:30", end: "18:00" }
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_overtime::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hr.yaml")?;
/// println!("Listening on {}", loader.server().bind_address());
/// # Ok::<(), hr_overtime::error::HrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unparseable schedule
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            HrError::ConfigParseError { message, .. } => HrError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> HrResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| HrError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config).map_err(|e| HrError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AppConfig) -> HrResult<Self> {
        config.timesheet.standard_periods()?;
        if config.timesheet.daily_hours.is_sign_negative()
            || config.timesheet.weekly_hours.is_sign_negative()
        {
            return Err(HrError::invalid_input(
                "timesheet",
                "hour thresholds must not be negative",
            ));
        }
        Ok(Self { config })
    }

    /// Returns the server section.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the timesheet section.
    pub fn timesheet(&self) -> &TimesheetConfig {
        &self.config.timesheet
    }

    /// Overrides the server bind address, e.g. from a CLI flag.
    pub fn with_bind_address(mut self, host: String, port: u16) -> Self {
        self.config.server = ServerConfig { host, port };
        self
    }
}
