//! In-memory employee registry.
//!
//! The registry is the only shared mutable state in the crate. It is owned
//! by [`AppState`](crate::api::AppState) and handed to request handlers by
//! reference; appends take the write lock, listings the read lock.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{non_negative, require_text};
use crate::error::HrResult;
use crate::models::Employee;

/// Append-only, insertion-ordered collection of employees.
///
/// Records live for the lifetime of the process. There is no update,
/// delete or uniqueness check; two employees may share a name.
///
/// # Example
///
/// ```
/// use hr_overtime::registry::EmployeeRegistry;
/// use rust_decimal::Decimal;
///
/// let registry = EmployeeRegistry::new();
/// registry.register("Ana", "Analyst", Decimal::new(300050, 2)).unwrap();
/// registry.register("Bruno", "Developer", Decimal::from(4500)).unwrap();
///
/// let names: Vec<String> = registry.list_all().into_iter().map(|e| e.name).collect();
/// assert_eq!(names, ["Ana", "Bruno"]);
/// ```
#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new employee to the end of the registry.
    ///
    /// Name and role are trimmed and must not be empty; the salary must not
    /// be negative. Validation happens before the lock is taken, so a
    /// rejected call leaves the registry untouched.
    ///
    /// Returns a copy of the stored record.
    pub fn register(&self, name: &str, role: &str, salary: Decimal) -> HrResult<Employee> {
        let name = require_text("name", name)?;
        let role = require_text("role", role)?;
        let salary = non_negative("salary", salary)?;

        let employee = Employee { name, role, salary };

        let mut employees = self.employees.write();
        employees.push(employee.clone());
        debug!(
            name = %employee.name,
            position = employees.len(),
            "Employee registered"
        );

        Ok(employee)
    }

    /// Returns a snapshot of all employees in registration order.
    pub fn list_all(&self) -> Vec<Employee> {
        self.employees.read().clone()
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.read().len()
    }

    /// Returns true if no employee has been registered.
    pub fn is_empty(&self) -> bool {
        self.employees.read().is_empty()
    }
}
