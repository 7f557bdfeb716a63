//! Overtime pay calculation.
//!
//! This module applies the fixed Brazilian overtime multipliers to a
//! monthly base salary.
//!
//! ## Rate Structure
//!
//! - Hourly rate: monthly salary divided by 220 standard hours
//! - HE 50%: hourly rate × 1.5
//! - HE 100%: hourly rate × 2.0
//!
//! All outputs are rounded to 2 decimal places with round-half-to-even.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{HrError, HrResult};
use crate::models::OvertimeResult;

/// Standard monthly working hours used to derive the hourly rate.
pub const MONTHLY_HOURS_DIVISOR: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Multiplier for overtime hours paid at 50% above the hourly rate.
pub const OVERTIME_50_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for overtime hours paid at 100% above the hourly rate.
pub const OVERTIME_100_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Number of fractional digits kept on monetary values.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to exactly two fractional digits.
///
/// Midpoints go to the even neighbour, so `0.125` becomes `0.12` and
/// `0.135` becomes `0.14`.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(125, 3)).to_string(), "0.12");
/// assert_eq!(round_money(Decimal::from(10)).to_string(), "10.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Returns the hourly rate for a monthly salary, unrounded.
pub fn hourly_rate(base_salary: Decimal) -> Decimal {
    base_salary / MONTHLY_HOURS_DIVISOR
}

/// Rejects negative values; a negative zero comes back as plain zero.
pub(crate) fn non_negative(field: &str, value: Decimal) -> HrResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(HrError::invalid_input(field, "must not be negative"));
    }
    Ok(value.abs())
}

pub(crate) fn checked_mul(field: &str, lhs: Decimal, rhs: Decimal) -> HrResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| HrError::invalid_input(field, "value is too large"))
}

pub(crate) fn checked_add(field: &str, lhs: Decimal, rhs: Decimal) -> HrResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| HrError::invalid_input(field, "value is too large"))
}

/// Computes the overtime pay breakdown for a monthly salary.
///
/// # Arguments
///
/// * `base_salary` - Monthly base salary
/// * `hours_50` - Overtime hours paid at 150%
/// * `hours_100` - Overtime hours paid at 200%
///
/// # Returns
///
/// An [`OvertimeResult`] whose four fields are rounded to two places. The
/// total is the rounded sum of the unrounded pays.
///
/// Fails with `InvalidInput` if any argument is negative.
///
/// # Examples
///
/// ```
/// use hr_overtime::calculation::compute_overtime;
/// use rust_decimal::Decimal;
///
/// let result = compute_overtime(Decimal::from(2200), Decimal::from(10), Decimal::from(5)).unwrap();
/// assert_eq!(result.hourly_rate.to_string(), "10.00");
/// assert_eq!(result.pay_50.to_string(), "150.00");
/// assert_eq!(result.pay_100.to_string(), "100.00");
/// assert_eq!(result.total.to_string(), "250.00");
/// ```
pub fn compute_overtime(
    base_salary: Decimal,
    hours_50: Decimal,
    hours_100: Decimal,
) -> HrResult<OvertimeResult> {
    let base_salary = non_negative("base_salary", base_salary)?;
    let hours_50 = non_negative("hours_50", hours_50)?;
    let hours_100 = non_negative("hours_100", hours_100)?;

    let rate = hourly_rate(base_salary);
    let pay_50 = checked_mul("hours_50", rate * OVERTIME_50_MULTIPLIER, hours_50)?;
    let pay_100 = checked_mul("hours_100", rate * OVERTIME_100_MULTIPLIER, hours_100)?;
    let total = checked_add("total", pay_50, pay_100)?;

    Ok(OvertimeResult {
        hourly_rate: round_money(rate),
        pay_50: round_money(pay_50),
        pay_100: round_money(pay_100),
        total: round_money(total),
    })
}
