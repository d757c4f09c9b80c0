//! Domain models for the orgdesk backend.
//!
//! # Core Concepts
//!
//! - [`Company`]: Top-level organisation, identified by a backend-assigned id.
//! - [`Department`]: Belongs to exactly one company, referenced by the
//!   company's *name*, a denormalized foreign key inherited from the backend
//!   contract.
//! - [`Employee`]: May belong to zero or more departments, referenced by
//!   department name.
//! - [`DepartmentWithEmployees`]: Read-only join produced by the backend's
//!   unwrap endpoint; never mutated independently.
//!
//! Because relations are name-keyed, a rename can orphan dependent records
//! until the next full refetch. The resolution helpers in [`crate::views`]
//! turn such a miss into an explicit marker instead of an error.

mod company;
mod department;
mod employee;

pub use company::*;
pub use department::*;
pub use employee::*;
