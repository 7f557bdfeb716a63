//! Calculation logic for the HR overtime toolkit.
//!
//! This module contains the overtime pay calculator, the parse step that
//! turns raw form strings into typed values, worked-hours arithmetic on
//! clock times, month calendar helpers, and the monthly timesheet.

mod calendar;
mod input;
mod overtime;
mod timesheet;
mod worked_hours;

pub use calendar::{month_days, standard_schedule, working_days_in_month};
pub use input::{parse_clock_time, parse_decimal_field, require_text};
pub use overtime::{
    MONEY_DECIMAL_PLACES, MONTHLY_HOURS_DIVISOR, OVERTIME_50_MULTIPLIER, OVERTIME_100_MULTIPLIER,
    compute_overtime, hourly_rate, round_money,
};
pub use timesheet::compute_timesheet;
pub(crate) use overtime::non_negative;
pub use worked_hours::{hours_between, total_hours};
