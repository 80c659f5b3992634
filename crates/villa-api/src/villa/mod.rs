//! # Villa Resource
//!
//! Store wiring for [`Villa`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](resource_store::StoreEntity) implementation for [`Villa`]
//! - [`error`] - [`VillaError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = villa::new(32);
//! tokio::spawn(actor.run());
//! let villas = VillaClient::new(Arc::new(client), numbers_repo);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Villa;
use resource_store::{StoreActor, StoreClient};

/// Creates a new Villa store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Villa>, StoreClient<Villa>) {
    StoreActor::new(buffer_size)
}
