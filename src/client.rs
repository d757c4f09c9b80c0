//! HTTP client for the orgdesk backend.
//!
//! Configuration is via environment variables:
//! - `ORGDESK_API_URL` - Base URL (default: `http://localhost:8080/api`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:8080/api";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the orgdesk backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ORGDESK_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Build a request for a path under the base URL.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// Handle response that may return empty body (204 No Content).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    // ============================================================
    // Company Operations
    // ============================================================

    /// List all companies.
    pub async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        let response = self.request(reqwest::Method::GET, "/company").send().await?;
        self.handle_response(response).await
    }

    /// Get a company by id.
    pub async fn get_company(&self, id: i64) -> Result<Company, ClientError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/company/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a company and recover its assigned id.
    ///
    /// The create response does not reliably carry the new id, so after the
    /// POST succeeds the client re-lists all companies and matches by
    /// `(name, location)`. A miss after a successful create is surfaced as a
    /// server error rather than papered over with a guessed id.
    pub async fn create_company(&self, input: &CompanyInput) -> Result<Company, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/company")
            .json(input)
            .send()
            .await?;
        let echoed: CompanyInput = self.handle_response(response).await?;

        let companies = self.list_companies().await?;
        companies
            .into_iter()
            .find(|c| c.name == echoed.name && c.location == echoed.location)
            .ok_or_else(|| {
                ClientError::Server(format!(
                    "company '{}' created but missing from listing",
                    echoed.name
                ))
            })
    }

    /// Update a company.
    pub async fn update_company(
        &self,
        id: i64,
        input: &CompanyInput,
    ) -> Result<Company, ClientError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/company/{}", id))
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a company.
    pub async fn delete_company(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/company/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// List the employees of one of a company's departments.
    pub async fn employees_by_department(
        &self,
        company_id: i64,
        department_name: &str,
    ) -> Result<Vec<Employee>, ClientError> {
        let response = self
            .request(
                reqwest::Method::GET,
                &format!("/company/{}/employees", company_id),
            )
            .query(&[("departmentName", department_name)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // Department Operations
    // ============================================================

    /// List all departments.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/departments")
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a department by id.
    pub async fn get_department(&self, id: i64) -> Result<Department, ClientError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/departments/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List all departments expanded with their employees.
    pub async fn list_departments_with_employees(
        &self,
    ) -> Result<Vec<DepartmentWithEmployees>, ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/departments/unwrap")
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a department.
    pub async fn create_department(
        &self,
        input: &DepartmentInput,
    ) -> Result<Department, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/departments")
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a department.
    pub async fn update_department(
        &self,
        id: i64,
        input: &DepartmentInput,
    ) -> Result<Department, ClientError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/departments/{}", id))
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a department.
    pub async fn delete_department(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/departments/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    // ============================================================
    // Employee Operations
    // ============================================================

    /// List all employees.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/employee")
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get an employee by id.
    pub async fn get_employee(&self, id: i64) -> Result<Employee, ClientError> {
        let response = self
            .request(reqwest::Method::GET, &format!("/employee/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a single employee.
    pub async fn create_employee(
        &self,
        input: &CreateEmployeeInput,
    ) -> Result<Employee, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/employee/create")
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create employees in bulk.
    ///
    /// Partial success is the expected shape: `created` and `errors` can both
    /// be non-empty in one response.
    pub async fn create_employees_bulk(
        &self,
        inputs: &[CreateEmployeeInput],
    ) -> Result<BulkCreateResponse, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/employee/bulk")
            .json(&inputs)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update an employee. Department membership is not updatable here.
    pub async fn update_employee(
        &self,
        id: i64,
        input: &UpdateEmployeeInput,
    ) -> Result<Employee, ClientError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/employee/{}", id))
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an employee.
    pub async fn delete_employee(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/employee/{}", id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
