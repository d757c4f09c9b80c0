//! Pure view derivations over already-fetched caches.
//!
//! Everything in this module is side-effect free: screens fetch, these
//! functions shape. Outputs are deterministic for a fixed input order, and
//! ranking ties keep their prior relative order (stable sorts throughout).

use std::collections::BTreeMap;

use crate::models::{Company, Department, DepartmentWithEmployees, Employee};

/// Employees of the department with the given id; empty if the id is not in
/// the unwrap data.
pub fn employees_for_department(
    groups: &[DepartmentWithEmployees],
    department_id: i64,
) -> &[Employee] {
    groups
        .iter()
        .find(|g| g.department.id == department_id)
        .map(|g| g.employees.as_slice())
        .unwrap_or(&[])
}

/// Departments belonging to the named company.
pub fn departments_of<'a>(
    departments: &'a [Department],
    company_name: &str,
) -> Vec<&'a Department> {
    departments
        .iter()
        .filter(|d| d.company == company_name)
        .collect()
}

/// Partition employees by the uppercase first character of their name.
///
/// Keys come out in character order and only non-empty buckets exist. No
/// employee is dropped or duplicated; a (degenerate) empty name lands in a
/// `'#'` bucket rather than vanishing.
pub fn group_by_initial(employees: &[Employee]) -> BTreeMap<char, Vec<&Employee>> {
    let mut buckets: BTreeMap<char, Vec<&Employee>> = BTreeMap::new();
    for employee in employees {
        let initial = employee
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('#');
        buckets.entry(initial).or_default().push(employee);
    }
    buckets
}

/// Sort unwrap data descending by employee count. Ties keep input order.
pub fn rank_by_headcount(mut groups: Vec<DepartmentWithEmployees>) -> Vec<DepartmentWithEmployees> {
    groups.sort_by(|a, b| b.employees.len().cmp(&a.employees.len()));
    groups
}

/// Sort employees descending by salary. Ties keep input order; `total_cmp`
/// keeps the comparison a total order even if a NaN ever slipped in upstream.
pub fn rank_by_salary(mut employees: Vec<Employee>) -> Vec<Employee> {
    employees.sort_by(|a, b| b.salary.total_cmp(&a.salary));
    employees
}

/// The highlight prefix of a ranking: the first `min(3, n)` elements.
pub fn top_three<T>(ranked: &[T]) -> &[T] {
    &ranked[..ranked.len().min(3)]
}

/// Outcome of resolving a name-keyed company reference.
///
/// `Unknown` (a reference that matches nothing, e.g. after a rename) must
/// render distinctly from `None` (genuinely no membership); neither is an
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompanyLink<'a> {
    Found(&'a Company),
    Unknown(&'a str),
    None,
}

/// Resolve a company name against the company cache.
pub fn resolve_company<'a>(companies: &'a [Company], name: &'a str) -> CompanyLink<'a> {
    companies
        .iter()
        .find(|c| c.name == name)
        .map(CompanyLink::Found)
        .unwrap_or(CompanyLink::Unknown(name))
}

/// Resolve an employee's employer through their first department.
pub fn employer_of<'a>(
    employee: &'a Employee,
    departments: &'a [Department],
    companies: &'a [Company],
) -> CompanyLink<'a> {
    let Some(first) = employee.department_names.first() else {
        return CompanyLink::None;
    };
    match departments.iter().find(|d| &d.name == first) {
        Some(dept) => resolve_company(companies, &dept.company),
        None => CompanyLink::Unknown(first),
    }
}

/// An employee's memberships grouped per resolved company, in first-seen
/// company order. Unresolvable department names contribute nothing; an empty
/// result is the caller's cue for the none marker.
pub fn occupations<'a>(
    employee: &'a Employee,
    departments: &'a [Department],
    companies: &'a [Company],
) -> Vec<(&'a Company, Vec<&'a str>)> {
    let mut grouped: Vec<(&Company, Vec<&str>)> = Vec::new();
    for dept_name in &employee.department_names {
        let Some(dept) = departments.iter().find(|d| &d.name == dept_name) else {
            continue;
        };
        let Some(company) = companies.iter().find(|c| c.name == dept.company) else {
            continue;
        };
        match grouped.iter_mut().find(|(c, _)| c.id == company.id) {
            Some((_, names)) => names.push(dept_name),
            None => grouped.push((company, vec![dept_name])),
        }
    }
    grouped
}
