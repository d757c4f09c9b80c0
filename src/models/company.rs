use serde::{Deserialize, Serialize};

/// A company record as returned by the backend.
///
/// `name` is assumed unique: departments reference their company by name, and
/// the create flow recovers the assigned id by matching `(name, location)`
/// against a fresh listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Input for creating or updating a company. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub location: String,
}
