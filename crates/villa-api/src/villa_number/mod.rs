//! # VillaNumber Resource
//!
//! Store wiring for [`VillaNumber`] records. Unlike villas, the key is supplied by
//! the caller; the foreign key to [`Villa`](crate::model::Villa) is checked by
//! [`VillaNumberClient`](crate::clients::VillaNumberClient) before every write.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::VillaNumber;
use resource_store::{StoreActor, StoreClient};

/// Creates a new VillaNumber store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<VillaNumber>, StoreClient<VillaNumber>) {
    StoreActor::new(buffer_size)
}
