//! Overtime request and result models.
//!
//! [`OvertimeRequest`] is the typed form of the three raw calculator inputs;
//! [`OvertimeResult`] is the rounded pay breakdown returned to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_overtime;
use crate::error::HrResult;

/// The validated inputs of an overtime calculation.
///
/// Constructed per request by the parse step and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Overtime hours paid at 150% (HE 50%).
    pub hours_50: Decimal,
    /// Overtime hours paid at 200% (HE 100%).
    pub hours_100: Decimal,
}

impl OvertimeRequest {
    /// Runs the overtime calculation for this request.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_overtime::models::OvertimeRequest;
    /// use rust_decimal::Decimal;
    ///
    /// let request = OvertimeRequest {
    ///     base_salary: Decimal::from(2200),
    ///     hours_50: Decimal::from(10),
    ///     hours_100: Decimal::from(5),
    /// };
    /// let result = request.compute().unwrap();
    /// assert_eq!(result.total, Decimal::from(250));
    /// ```
    pub fn compute(&self) -> HrResult<OvertimeResult> {
        compute_overtime(self.base_salary, self.hours_50, self.hours_100)
    }
}

/// The pay breakdown of an overtime calculation.
///
/// Every field carries exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Base salary divided by the monthly hours divisor.
    pub hourly_rate: Decimal,
    /// Pay for the hours at 150%.
    pub pay_50: Decimal,
    /// Pay for the hours at 200%.
    pub pay_100: Decimal,
    /// Sum of both overtime pays.
    pub total: Decimal,
}
