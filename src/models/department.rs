use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// A department record. `company` holds the owning company's name, not its
/// id; the backend contract keeps this relation name-keyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub company: String,
    pub name: String,
}

/// Input for creating or updating a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentInput {
    pub company: String,
    pub name: String,
}

/// A department expanded with its employee list, as returned by
/// `GET /departments/unwrap`. Read-only on the wire; screens patch their
/// local copies after mutations instead of refetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentWithEmployees {
    pub department: Department,
    pub employees: Vec<Employee>,
}
