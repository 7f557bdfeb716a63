//! Application state for the HR API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TimesheetConfig};
use crate::registry::EmployeeRegistry;

/// Shared application state.
///
/// Holds the loaded configuration and the employee registry. Cloning is
/// cheap; every clone points at the same registry.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// Employees registered since the process started.
    registry: Arc<EmployeeRegistry>,
}

impl AppState {
    /// Creates a new application state with an empty registry.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_registry(config, Arc::new(EmployeeRegistry::new()))
    }

    /// Creates a state around an existing registry.
    pub fn with_registry(config: ConfigLoader, registry: Arc<EmployeeRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            registry,
        }
    }

    /// Returns the timesheet section of the configuration.
    pub fn timesheet(&self) -> &TimesheetConfig {
        self.config.timesheet()
    }

    /// Returns the employee registry.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }
}
