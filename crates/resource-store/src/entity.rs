//! # StoreEntity Trait
//!
//! The contract a record type implements to be kept by a [`StoreActor`](crate::StoreActor).
//!
//! Only the key is mandatory. The two provided methods cover the policies the store
//! enforces on insert:
//! - [`StoreEntity::assign_id`] - server-assigned keys (default: the caller's key is kept)
//! - [`StoreEntity::unique_key`] - a secondary key that must not repeat (default: none)

use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `StoreActor`.
pub trait StoreEntity: Clone + Send + Sync + Debug + 'static {
    /// Primary key. Ordered so the store can find the current maximum.
    type Id: Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// The record's primary key.
    fn id(&self) -> Self::Id;

    /// Called by the store right before insertion with the largest key it has ever
    /// held (removed records included), so `last + 1` never hands out a key twice.
    ///
    /// Override to let the store assign keys. The default keeps whatever key the
    /// caller put on the record.
    fn assign_id(&mut self, _last: Option<&Self::Id>) {}

    /// Secondary key that must be unique among stored records at insert time.
    ///
    /// Return an already-normalized value (e.g. lowercased) when the comparison
    /// should ignore case.
    fn unique_key(&self) -> Option<String> {
        None
    }
}
