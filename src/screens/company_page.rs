//! Company detail screen: departments with expandable employee lists, nested
//! edit forms, and the confirmation gate in front of every delete.

use crate::client::ApiClient;
use crate::confirm::ConfirmGate;
use crate::models::{
    Company, CompanyInput, CreateEmployeeInput, Department, DepartmentInput,
    DepartmentWithEmployees, Employee, UpdateEmployeeInput,
};
use crate::screens::{require, ScreenError};
use crate::views;

/// What a pending confirmation will delete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget {
    Company(i64),
    Department(i64),
    Employee(i64),
}

/// Result of a confirmed delete, so the caller knows whether the screen
/// itself is gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteOutcome {
    CompanyDeleted,
    DepartmentDeleted(i64),
    EmployeeDeleted(i64),
}

/// One company plus its departments and their employees, all filtered to the
/// company at load time.
pub struct CompanyScreen {
    company: Company,
    departments: Vec<Department>,
    grouped: Vec<DepartmentWithEmployees>,
    expanded: Option<i64>,
    confirm: ConfirmGate<DeleteTarget>,
}

impl CompanyScreen {
    /// Mount the screen: fetch the company, then its departments and the
    /// unwrap data concurrently, waiting for both before deriving anything.
    pub async fn mount(client: &ApiClient, company_id: i64) -> Result<Self, ScreenError> {
        let company = client.get_company(company_id).await?;

        let (departments, grouped) = tokio::join!(
            client.list_departments(),
            client.list_departments_with_employees()
        );
        let mut departments = departments?;
        let mut grouped = grouped?;

        departments.retain(|d| d.company == company.name);
        grouped.retain(|g| g.department.company == company.name);

        Ok(Self {
            company,
            departments,
            grouped,
            expanded: None,
            confirm: ConfirmGate::new(),
        })
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Employees of a department; empty when the id has no unwrap entry
    /// (e.g. a department created on this screen).
    pub fn employees_in(&self, department_id: i64) -> &[Employee] {
        views::employees_for_department(&self.grouped, department_id)
    }

    // ============================================================
    // Expansion
    // ============================================================

    /// Toggle the single expanded department.
    pub fn toggle_department(&mut self, department_id: i64) {
        self.expanded = if self.expanded == Some(department_id) {
            None
        } else {
            Some(department_id)
        };
    }

    pub fn expanded_department(&self) -> Option<i64> {
        self.expanded
    }

    /// Re-fetch one department's roster through the filtered employees
    /// endpoint and replace its bucket, picking up changes made elsewhere
    /// since mount. Unknown ids are a no-op.
    pub async fn refresh_department(
        &mut self,
        client: &ApiClient,
        department_id: i64,
    ) -> Result<(), ScreenError> {
        let Some(dept) = self
            .departments
            .iter()
            .find(|d| d.id == department_id)
            .cloned()
        else {
            return Ok(());
        };

        let employees = client
            .employees_by_department(self.company.id, &dept.name)
            .await?;
        match self
            .grouped
            .iter_mut()
            .find(|g| g.department.id == department_id)
        {
            Some(group) => group.employees = employees,
            None => self.grouped.push(DepartmentWithEmployees {
                department: dept,
                employees,
            }),
        }
        Ok(())
    }

    // ============================================================
    // Confirmation Gate
    // ============================================================

    pub fn request_delete_company(&mut self) {
        self.confirm.open(
            format!("Are you sure you want to delete {}?", self.company.name),
            DeleteTarget::Company(self.company.id),
        );
    }

    pub fn request_delete_department(&mut self, department_id: i64, name: &str) {
        self.confirm.open(
            format!("Are you sure you want to delete {}?", name),
            DeleteTarget::Department(department_id),
        );
    }

    pub fn request_delete_employee(&mut self, employee_id: i64, name: &str) {
        self.confirm.open(
            format!("Are you sure you want to delete {}?", name),
            DeleteTarget::Employee(employee_id),
        );
    }

    pub fn pending_confirmation(&self) -> Option<&str> {
        self.confirm.message()
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Execute whatever delete is pending. The gate closes either way; the
    /// caches are only patched when the backend call succeeded.
    pub async fn confirm_delete(
        &mut self,
        client: &ApiClient,
    ) -> Result<Option<DeleteOutcome>, ScreenError> {
        let Some(target) = self.confirm.confirm() else {
            return Ok(None);
        };

        match target {
            DeleteTarget::Company(id) => {
                client.delete_company(id).await?;
                tracing::info!(id, "company deleted");
                Ok(Some(DeleteOutcome::CompanyDeleted))
            }
            DeleteTarget::Department(id) => {
                client.delete_department(id).await?;
                tracing::info!(id, "department deleted");
                self.departments.retain(|d| d.id != id);
                self.grouped.retain(|g| g.department.id != id);
                if self.expanded == Some(id) {
                    self.expanded = None;
                }
                Ok(Some(DeleteOutcome::DepartmentDeleted(id)))
            }
            DeleteTarget::Employee(id) => {
                client.delete_employee(id).await?;
                tracing::info!(id, "employee deleted");
                for group in &mut self.grouped {
                    group.employees.retain(|e| e.id != id);
                }
                Ok(Some(DeleteOutcome::EmployeeDeleted(id)))
            }
        }
    }

    // ============================================================
    // Company Mutations
    // ============================================================

    /// Update the company's own record.
    pub async fn update_company(
        &mut self,
        client: &ApiClient,
        input: CompanyInput,
    ) -> Result<(), ScreenError> {
        require("name", &input.name)?;
        require("location", &input.location)?;

        self.company = client.update_company(self.company.id, &input).await?;
        Ok(())
    }

    // ============================================================
    // Department Mutations
    // ============================================================

    /// Create a department in this company. The company field is forced to
    /// this screen's company; callers only supply a name.
    pub async fn create_department(
        &mut self,
        client: &ApiClient,
        name: String,
    ) -> Result<Department, ScreenError> {
        require("name", &name)?;

        let input = DepartmentInput {
            company: self.company.name.clone(),
            name,
        };
        let created = client.create_department(&input).await?;
        self.departments.push(created.clone());
        Ok(created)
    }

    /// Rename a department, patching both the listing and the unwrap copy.
    pub async fn update_department(
        &mut self,
        client: &ApiClient,
        department_id: i64,
        name: String,
    ) -> Result<(), ScreenError> {
        require("name", &name)?;

        let input = DepartmentInput {
            company: self.company.name.clone(),
            name,
        };
        let updated = client.update_department(department_id, &input).await?;

        for dept in &mut self.departments {
            if dept.id == updated.id {
                *dept = updated.clone();
            }
        }
        for group in &mut self.grouped {
            if group.department.id == updated.id {
                group.department = updated.clone();
            }
        }
        Ok(())
    }

    // ============================================================
    // Employee Mutations
    // ============================================================

    /// Create an employee in one or more of this company's departments and
    /// append them to every matching expanded bucket.
    pub async fn create_employee(
        &mut self,
        client: &ApiClient,
        input: CreateEmployeeInput,
    ) -> Result<Employee, ScreenError> {
        require("name", &input.name)?;
        if input.department_names.is_empty() {
            return Err(ScreenError::Validation {
                field: "departments",
                message: "select at least one department".to_string(),
            });
        }

        let created = client.create_employee(&input).await?;
        for group in &mut self.grouped {
            if input.department_names.contains(&group.department.name) {
                group.employees.push(created.clone());
            }
        }
        Ok(created)
    }

    /// Update an employee's name, salary, or manager flag. Department
    /// membership is not updatable through this path.
    pub async fn update_employee(
        &mut self,
        client: &ApiClient,
        employee_id: i64,
        input: UpdateEmployeeInput,
    ) -> Result<(), ScreenError> {
        require("name", &input.name)?;

        let updated = client.update_employee(employee_id, &input).await?;
        for group in &mut self.grouped {
            for employee in &mut group.employees {
                if employee.id == updated.id {
                    *employee = updated.clone();
                }
            }
        }
        Ok(())
    }
}
