//! In-memory stub backend for client and screen tests.
//!
//! Serves the same REST surface the production backend exposes, on an
//! ephemeral local port, so tests drive the real reqwest client end to end.
//! The create-company response deliberately omits the assigned id, matching
//! the quirk the client's id recovery exists for.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use orgdesk::models::*;

#[derive(Default)]
pub struct StubState {
    pub companies: Vec<Company>,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub next_id: i64,
    /// When set, create-company acknowledges but does not persist, so the
    /// client's relist-and-match id recovery comes up empty.
    pub lose_created_companies: bool,
}

impl StubState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    fn fresh_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn with_company(mut self, name: &str, location: &str) -> Self {
        let id = self.fresh_id();
        self.companies.push(Company {
            id,
            name: name.to_string(),
            location: location.to_string(),
        });
        self
    }

    pub fn with_department(mut self, company: &str, name: &str) -> Self {
        let id = self.fresh_id();
        self.departments.push(Department {
            id,
            company: company.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_employee(
        mut self,
        name: &str,
        salary: f64,
        departments: &[&str],
        manager: bool,
    ) -> Self {
        let id = self.fresh_id();
        self.employees.push(Employee {
            id,
            name: name.to_string(),
            salary,
            department_names: departments.iter().map(|d| d.to_string()).collect(),
            manager,
        });
        self
    }

    fn unwrap_departments(&self) -> Vec<DepartmentWithEmployees> {
        self.departments
            .iter()
            .map(|dept| DepartmentWithEmployees {
                department: dept.clone(),
                employees: self
                    .employees
                    .iter()
                    .filter(|e| e.department_names.contains(&dept.name))
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

type Shared = Arc<Mutex<StubState>>;

/// Serve the stub on an ephemeral port; returns the client base URL and a
/// handle onto the backing state.
pub async fn serve(state: StubState) -> (String, Shared) {
    let shared: Shared = Arc::new(Mutex::new(state));
    let app = router(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server died");
    });

    (format!("http://{}/api", addr), shared)
}

fn router(shared: Shared) -> Router {
    let api = Router::new()
        // Companies
        .route("/company", get(list_companies).post(create_company))
        .route(
            "/company/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/company/{id}/employees", get(employees_by_department))
        // Departments
        .route("/departments", get(list_departments).post(create_department))
        .route("/departments/unwrap", get(unwrap_departments))
        .route(
            "/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        // Employees
        .route("/employee", get(list_employees))
        .route("/employee/create", post(create_employee))
        .route("/employee/bulk", post(bulk_create_employees))
        .route(
            "/employee/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        );

    Router::new().nest("/api", api).with_state(shared)
}

// ============================================================
// Companies
// ============================================================

async fn list_companies(State(state): State<Shared>) -> Json<Vec<Company>> {
    Json(state.lock().unwrap().companies.clone())
}

async fn get_company(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Company>, (StatusCode, String)> {
    state
        .lock()
        .unwrap()
        .companies
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Company not found".to_string()))
}

/// Create echoes the input without the assigned id.
async fn create_company(
    State(state): State<Shared>,
    Json(input): Json<CompanyInput>,
) -> (StatusCode, Json<CompanyInput>) {
    let mut state = state.lock().unwrap();
    if !state.lose_created_companies {
        let id = state.fresh_id();
        state.companies.push(Company {
            id,
            name: input.name.clone(),
            location: input.location.clone(),
        });
    }
    (StatusCode::CREATED, Json(input))
}

async fn update_company(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(input): Json<CompanyInput>,
) -> Result<Json<Company>, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let company = state
        .companies
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or((StatusCode::NOT_FOUND, "Company not found".to_string()))?;
    company.name = input.name;
    company.location = input.location;
    Ok(Json(company.clone()))
}

async fn delete_company(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let before = state.companies.len();
    state.companies.retain(|c| c.id != id);
    if state.companies.len() == before {
        return Err((StatusCode::NOT_FOUND, "Company not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct EmployeesQuery {
    #[serde(rename = "departmentName")]
    department_name: String,
}

async fn employees_by_department(
    State(state): State<Shared>,
    Path(_company_id): Path<i64>,
    Query(query): Query<EmployeesQuery>,
) -> Json<Vec<Employee>> {
    let state = state.lock().unwrap();
    Json(
        state
            .employees
            .iter()
            .filter(|e| e.department_names.contains(&query.department_name))
            .cloned()
            .collect(),
    )
}

// ============================================================
// Departments
// ============================================================

async fn list_departments(State(state): State<Shared>) -> Json<Vec<Department>> {
    Json(state.lock().unwrap().departments.clone())
}

async fn get_department(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Department>, (StatusCode, String)> {
    state
        .lock()
        .unwrap()
        .departments
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Department not found".to_string()))
}

async fn unwrap_departments(State(state): State<Shared>) -> Json<Vec<DepartmentWithEmployees>> {
    Json(state.lock().unwrap().unwrap_departments())
}

async fn create_department(
    State(state): State<Shared>,
    Json(input): Json<DepartmentInput>,
) -> (StatusCode, Json<Department>) {
    let mut state = state.lock().unwrap();
    let id = state.fresh_id();
    let department = Department {
        id,
        company: input.company,
        name: input.name,
    };
    state.departments.push(department.clone());
    (StatusCode::CREATED, Json(department))
}

async fn update_department(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(input): Json<DepartmentInput>,
) -> Result<Json<Department>, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let department = state
        .departments
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or((StatusCode::NOT_FOUND, "Department not found".to_string()))?;
    department.company = input.company;
    department.name = input.name;
    Ok(Json(department.clone()))
}

async fn delete_department(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let before = state.departments.len();
    state.departments.retain(|d| d.id != id);
    if state.departments.len() == before {
        return Err((StatusCode::NOT_FOUND, "Department not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Employees
// ============================================================

async fn list_employees(State(state): State<Shared>) -> Json<Vec<Employee>> {
    Json(state.lock().unwrap().employees.clone())
}

async fn get_employee(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, (StatusCode, String)> {
    state
        .lock()
        .unwrap()
        .employees
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))
}

fn admit_employee(state: &mut StubState, input: &CreateEmployeeInput) -> Employee {
    let id = state.fresh_id();
    let employee = Employee {
        id,
        name: input.name.clone(),
        salary: input.salary,
        department_names: input.department_names.clone(),
        manager: input.manager,
    };
    state.employees.push(employee.clone());
    employee
}

async fn create_employee(
    State(state): State<Shared>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), (StatusCode, String)> {
    if input.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name must not be empty".to_string()));
    }
    let mut state = state.lock().unwrap();
    let employee = admit_employee(&mut state, &input);
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Per-item partition: valid entries are created, invalid entries land in
/// the errors map keyed by the submitted name.
async fn bulk_create_employees(
    State(state): State<Shared>,
    Json(inputs): Json<Vec<CreateEmployeeInput>>,
) -> Json<BulkCreateResponse> {
    let mut state = state.lock().unwrap();
    let mut response = BulkCreateResponse::default();

    for (index, input) in inputs.iter().enumerate() {
        let mut reasons = HashMap::new();
        if input.name.trim().is_empty() {
            reasons.insert("name".to_string(), "must not be empty".to_string());
        }
        if input.department_names.is_empty() {
            reasons.insert(
                "departmentNames".to_string(),
                "select at least one department".to_string(),
            );
        }

        if reasons.is_empty() {
            let employee = admit_employee(&mut state, input);
            response.created.push(employee);
        } else {
            let key = if input.name.trim().is_empty() {
                format!("#{}", index)
            } else {
                input.name.clone()
            };
            response.errors.insert(key, reasons);
        }
    }

    Json(response)
}

async fn update_employee(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateEmployeeInput>,
) -> Result<Json<Employee>, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let employee = state
        .employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;
    // Department membership is not updatable through this path.
    employee.name = input.name;
    employee.salary = input.salary;
    employee.manager = input.manager;
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(state): State<Shared>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut state = state.lock().unwrap();
    let before = state.employees.len();
    state.employees.retain(|e| e.id != id);
    if state.employees.len() == before {
        return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
