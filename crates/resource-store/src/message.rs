//! # Store Messages
//!
//! The requests a [`StoreActor`](crate::StoreActor) understands. Each variant carries a
//! one-shot sender for the reply, so a client call is one send plus one receive.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Filter evaluated inside the store task against each record.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Internal message type sent to the store.
///
/// The variants are the persistence port operations: list everything, find the
/// first match, insert, replace, and remove by key.
pub enum StoreRequest<T: StoreEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Find {
        predicate: Predicate<T>,
        respond_to: Response<Option<T>>,
    },
    Create {
        item: T,
        respond_to: Response<T>,
    },
    Update {
        item: T,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
}

impl<T: StoreEntity> std::fmt::Debug for StoreRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreRequest::List { .. } => f.write_str("List"),
            StoreRequest::Find { .. } => f.write_str("Find"),
            StoreRequest::Create { item, .. } => f.debug_tuple("Create").field(item).finish(),
            StoreRequest::Update { item, .. } => f.debug_tuple("Update").field(item).finish(),
            StoreRequest::Remove { id, .. } => f.debug_tuple("Remove").field(id).finish(),
        }
    }
}
