use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An employee record. Department membership is name-keyed and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: f64,
    #[serde(rename = "departmentNames", default)]
    pub department_names: Vec<String>,
    pub manager: bool,
}

/// Input for creating an employee, singly or as part of a bulk request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: f64,
    #[serde(rename = "departmentNames")]
    pub department_names: Vec<String>,
    pub manager: bool,
}

/// Input for updating an employee.
///
/// Department membership is deliberately absent: the update path accepts only
/// `{name, salary, manager}`, an asymmetry with create that the backend
/// contract fixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeInput {
    pub name: String,
    pub salary: f64,
    pub manager: bool,
}

/// Result of a bulk create: both halves can be non-empty at once.
///
/// `errors` maps a per-item key (the submitted name) to field-level failure
/// reasons. Successfully created items are not an error, whatever happened to
/// their siblings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkCreateResponse {
    #[serde(default)]
    pub created: Vec<Employee>,
    #[serde(default)]
    pub errors: HashMap<String, HashMap<String, String>>,
}

/// Coerce free-form salary text to a non-negative number.
///
/// Non-numeric, non-finite, and negative inputs all become `0.0`. Permissive
/// by policy: a typo in the salary field must never block a form or push a
/// NaN into a sort.
pub fn parse_salary(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
