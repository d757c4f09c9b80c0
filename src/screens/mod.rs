//! Per-screen state: entity caches plus mutation coordination.
//!
//! Every screen owns ephemeral copies of the entities it displays, fetched on
//! mount and discarded with the screen. Mutations call the transport client
//! and, only on success, patch the local caches in place (append on create,
//! replace-by-id on update, filter-out-by-id on delete) so the view reflects
//! the change without a refetch. On failure the caches stay untouched.
//!
//! Mutation methods take `&mut self`, so a second mutation cannot start while
//! one is awaited; the double-click hazard is unrepresentable here.

mod company_page;
mod directory;
mod home;
mod rankings;
mod salaries;

pub use company_page::*;
pub use directory::*;
pub use home::*;
pub use rankings::*;
pub use salaries::*;

use thiserror::Error;

use crate::client::ClientError;

/// State of data loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Error(String),
}

/// Why a screen mutation did not go through.
///
/// `Validation` fires before any network call and names the offending field;
/// `Transport` wraps a backend failure after which the caches are unchanged.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error(transparent)]
    Transport(#[from] ClientError),
}

/// Reject blank required fields before anything touches the network.
fn require(field: &'static str, value: &str) -> Result<(), ScreenError> {
    if value.trim().is_empty() {
        return Err(ScreenError::Validation {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}
