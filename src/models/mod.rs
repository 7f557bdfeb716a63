//! Core data models for the HR overtime toolkit.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod overtime;
mod timesheet;

pub use employee::Employee;
pub use overtime::{OvertimeRequest, OvertimeResult};
pub use timesheet::{
    DayKind, TimesheetDay, TimesheetSummary, TimesheetTotals, WorkDay, WorkPeriod,
};
