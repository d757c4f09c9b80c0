//! Salary screen: every employee ordered by salary, with a top-3 earners
//! highlight and an employer link per row.

use crate::client::ApiClient;
use crate::models::{Company, Department, Employee};
use crate::screens::LoadState;
use crate::views::{self, CompanyLink};

pub struct SalariesScreen {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    companies: Vec<Company>,
    load_state: LoadState,
}

impl SalariesScreen {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            departments: Vec::new(),
            companies: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// Fetch employees, departments, and companies concurrently; rank by
    /// salary once everything settled.
    pub async fn load(&mut self, client: &ApiClient) {
        let (employees, departments, companies) = tokio::join!(
            client.list_employees(),
            client.list_departments(),
            client.list_companies()
        );

        match (employees, departments, companies) {
            (Ok(employees), Ok(departments), Ok(companies)) => {
                self.employees = views::rank_by_salary(employees);
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
                tracing::error!("failed to load salaries: {}", e);
                self.load_state = LoadState::Error(e);
            }
        }
    }

    /// All employees, descending by salary.
    pub fn ranked(&self) -> &[Employee] {
        &self.employees
    }

    /// The top earners panel: first min(3, n) of the ranking.
    pub fn top_three(&self) -> &[Employee] {
        views::top_three(&self.employees)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Resolve an employee's employer through their first department.
    pub fn employer_of<'a>(&'a self, employee: &'a Employee) -> CompanyLink<'a> {
        views::employer_of(employee, &self.departments, &self.companies)
    }
}

impl Default for SalariesScreen {
    fn default() -> Self {
        Self::new()
    }
}
