//! HTTP API module for the HR overtime toolkit.
//!
//! This module provides the form endpoints for the overtime calculator and
//! the employee registry, and the JSON/CSV timesheet endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayRequest, EmployeeForm, OvertimeForm, PeriodRequest, TimesheetRequest};
pub use response::{ApiError, ApiErrorResponse, EmployeeList};
pub use state::AppState;
