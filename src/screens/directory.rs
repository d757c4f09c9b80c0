//! Employee directory screen: the full roster grouped A–Z, with single and
//! bulk creation.

use std::collections::BTreeMap;

use crate::client::ApiClient;
use crate::models::{
    BulkCreateResponse, Company, CreateEmployeeInput, Department, Employee, UpdateEmployeeInput,
};
use crate::screens::{require, LoadState, ScreenError};
use crate::views;

/// A bulk form submits at most this many entries at once.
pub const MAX_BULK_ENTRIES: usize = 10;

/// All employees (name-sorted) plus the department and company caches needed
/// to resolve each employee's occupations.
pub struct DirectoryScreen {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    companies: Vec<Company>,
    load_state: LoadState,
}

impl DirectoryScreen {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            departments: Vec::new(),
            companies: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Fetch employees, departments, and companies concurrently; the screen
    /// only renders once all three settle.
    pub async fn load(&mut self, client: &ApiClient) {
        let (employees, departments, companies) = tokio::join!(
            client.list_employees(),
            client.list_departments(),
            client.list_companies()
        );

        match (employees, departments, companies) {
            (Ok(mut employees), Ok(departments), Ok(companies)) => {
                employees.sort_by(|a, b| a.name.cmp(&b.name));
                self.employees = employees;
                self.departments = departments;
                self.companies = companies;
                self.load_state = LoadState::Loaded;
            }
            (employees, departments, companies) => {
                let e = [
                    employees.err().map(|e| e.to_string()),
                    departments.err().map(|e| e.to_string()),
                    companies.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join("; ");
                tracing::error!("failed to load employee directory: {}", e);
                self.load_state = LoadState::Error(e);
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The A–Z view: employees bucketed by uppercase initial.
    pub fn grouped(&self) -> BTreeMap<char, Vec<&Employee>> {
        views::group_by_initial(&self.employees)
    }

    /// An employee's memberships grouped per resolved company. Empty means
    /// the caller renders the none marker.
    pub fn occupations_of<'a>(&'a self, employee: &'a Employee) -> Vec<(&'a Company, Vec<&'a str>)> {
        views::occupations(employee, &self.departments, &self.companies)
    }

    /// Submit a bulk creation and merge whatever succeeded into the roster.
    ///
    /// Both halves of the returned partition can be non-empty: successes are
    /// in the cache by the time per-item errors are handed back.
    pub async fn create_employees(
        &mut self,
        client: &ApiClient,
        entries: Vec<CreateEmployeeInput>,
    ) -> Result<BulkCreateResponse, ScreenError> {
        if entries.is_empty() {
            return Err(ScreenError::Validation {
                field: "entries",
                message: "nothing to submit".to_string(),
            });
        }
        if entries.len() > MAX_BULK_ENTRIES {
            return Err(ScreenError::Validation {
                field: "entries",
                message: format!("at most {} entries per submission", MAX_BULK_ENTRIES),
            });
        }

        let response = client.create_employees_bulk(&entries).await?;
        if !response.errors.is_empty() {
            tracing::warn!(
                created = response.created.len(),
                failed = response.errors.len(),
                "bulk create partially failed"
            );
        }

        self.employees.extend(response.created.iter().cloned());
        self.employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(response)
    }

    /// Update an employee and re-sort the roster by name.
    pub async fn update_employee(
        &mut self,
        client: &ApiClient,
        employee_id: i64,
        input: UpdateEmployeeInput,
    ) -> Result<(), ScreenError> {
        require("name", &input.name)?;

        let updated = client.update_employee(employee_id, &input).await?;
        for employee in &mut self.employees {
            if employee.id == updated.id {
                *employee = updated.clone();
            }
        }
        self.employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }
}

impl Default for DirectoryScreen {
    fn default() -> Self {
        Self::new()
    }
}
