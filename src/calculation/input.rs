//! Parsing of raw form values into typed inputs.
//!
//! Every value reaching the HTTP boundary is an untyped string. The helpers
//! here turn those strings into [`Decimal`]s, trimmed names and clock times,
//! failing with [`HrError::InvalidInput`] instead of coercing.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{HrError, HrResult};

use super::overtime::non_negative;

/// Parses a non-negative decimal form field.
///
/// Accepts plain (`"3000.50"`) and scientific (`"3e3"`) notation with
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::parse_decimal_field;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal_field("salario", " 2200 ").unwrap(), Decimal::from(2200));
/// assert!(parse_decimal_field("salario", "abc").is_err());
/// assert!(parse_decimal_field("salario", "-1").is_err());
/// ```
pub fn parse_decimal_field(field: &str, raw: &str) -> HrResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HrError::invalid_input(field, "is required"));
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            HrError::invalid_input(field, format!("'{}' is not a decimal number", trimmed))
        })?;

    non_negative(field, value)
}

/// Validates a required text field and returns it trimmed.
pub fn require_text(field: &str, raw: &str) -> HrResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HrError::invalid_input(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parses a wall-clock time written as `H:MM` or `HH:MM` (00:00 to 23:59).
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock_time("entrada", "7:30").unwrap(),
///     NaiveTime::from_hms_opt(7, 30, 0).unwrap()
/// );
/// assert!(parse_clock_time("entrada", "24:00").is_err());
/// ```
pub fn parse_clock_time(field: &str, raw: &str) -> HrResult<NaiveTime> {
    let invalid = || HrError::invalid_input(field, format!("'{}' is not a HH:MM time", raw));

    let (hours, minutes) = raw.trim().split_once(':').ok_or_else(invalid)?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}
