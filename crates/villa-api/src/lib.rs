//! # Villa API
//!
//! CRUD over villas and villa numbers, served over HTTP with axum.
//!
//! ## Module Tour
//!
//! - [`model`] - stored records and transfer objects, with the mapping between them
//! - [`villa`], [`villa_number`] - store wiring and error types per resource
//! - [`clients`] - business rules per resource, written against the
//!   [`Repository`](resource_store::Repository) port
//! - [`api`] - handlers, the response envelope, and the router
//! - [`patch`] - JSON Patch for partial villa updates
//! - [`lifecycle`] - [`VillaSystem`](lifecycle::VillaSystem), which starts and stops
//!   the stores
//! - [`config`] - layered configuration
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -p villa-api -- --bind 127.0.0.1:8087
//! ```
//!
//! ## Known race
//!
//! Name and number pre-checks run before the insert as separate store requests.
//! The store re-checks keys on insert, so the loser of a race gets the same 400 it
//! would have got from the pre-check. The foreign key check on villa numbers has no
//! such second line: a villa deleted between the check and the insert leaves an
//! orphan. The same holds the other way round for villa deletes: a villa number
//! created between the "no villa numbers assigned" check and the removal ends up
//! pointing at a villa that no longer exists.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod patch;
pub mod villa;
pub mod villa_number;
