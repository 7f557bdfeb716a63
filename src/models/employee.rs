//! Employee model.
//!
//! This module defines the Employee record kept by the
//! [`EmployeeRegistry`](crate::registry::EmployeeRegistry).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a registered employee.
///
/// Records are created on registration and never updated or deleted;
/// callers only ever see copies handed out by the registry.
///
/// # Examples
///
/// ```
/// use hr_overtime::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     name: "Ana".to_string(),
///     role: "Analyst".to_string(),
///     salary: Decimal::new(300050, 2),
/// };
/// assert_eq!(employee.salary.to_string(), "3000.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name. Never empty.
    pub name: String,
    /// The employee's job title. Never empty.
    pub role: String,
    /// The monthly base salary. Never negative.
    pub salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "name": "Ana",
            "role": "Analyst",
            "salary": "3000.50"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.role, "Analyst");
        assert_eq!(employee.salary, Decimal::from_str("3000.50").unwrap());
    }

    #[test]
    fn test_serialize_salary_as_string() {
        let employee = Employee {
            name: "Bruno".to_string(),
            role: "Developer".to_string(),
            salary: Decimal::new(450000, 2),
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"salary\":\"4500.00\""));
    }
}
