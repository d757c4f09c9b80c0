//! orgdesk: a terminal admin client for a company/department/employee REST
//! backend.
//!
//! The crate is split along the same seams as the screens it renders:
//! [`client`] talks to the backend, [`models`] are the wire types, [`views`]
//! derive display structures from fetched caches, [`screens`] own per-mount
//! caches and coordinate mutations, and [`confirm`] gates destructive
//! operations behind an explicit confirmation state.

pub mod client;
pub mod confirm;
pub mod models;
pub mod screens;
pub mod views;
