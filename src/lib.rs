//! Overtime pay calculator and employee registry for a small HR team.
//!
//! This crate computes overtime pay from a monthly salary (divisor 220,
//! 50% and 100% bands), keeps an in-memory registry of employees, and
//! computes monthly timesheets with an hour bank and weekly paid overtime.
//! The [`api`] module exposes all of it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
