//! # Store Actor
//!
//! The `StoreActor` owns the records of one entity kind and processes every
//! [`StoreRequest`] sequentially in its own Tokio task. Because nothing else touches
//! the map, single operations are atomic without a `Mutex`.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new()` returns the actor (server) and a client.
/// 2. **Seed** (optional): `with_records()` loads initial data before the loop starts.
/// 3. **Run**: spawn `actor.run()` on the runtime.
///
/// The loop ends once every client clone has been dropped.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    /// Largest key ever stored, removed records included.
    high_water: Option<T::Id>,
}

impl<T: StoreEntity> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            high_water: None,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Preloads records, keyed by their current id. Existing keys are overwritten.
    pub fn with_records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        for record in records {
            let id = record.id();
            self.raise_high_water(&id);
            self.store.insert(id, record);
        }
        self
    }

    /// Runs the store's event loop until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Villa" instead of "villa_api::model::villa::Villa")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Find {
                    predicate,
                    respond_to,
                } => {
                    let item = self.store.values().find(|item| predicate(*item)).cloned();
                    debug!(entity_type, found = item.is_some(), "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Create { item, respond_to } => {
                    debug!(entity_type, ?item, "Create");
                    let _ = respond_to.send(self.insert(entity_type, item));
                }
                StoreRequest::Update { item, respond_to } => {
                    debug!(entity_type, ?item, "Update");
                    let id = item.id();
                    if let Some(slot) = self.store.get_mut(&id) {
                        *slot = item.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn insert(&mut self, entity_type: &str, mut item: T) -> Result<T, StoreError> {
        item.assign_id(self.high_water.as_ref());
        let id = item.id();

        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate key");
            return Err(StoreError::Conflict(format!(
                "{entity_type} {id} already exists"
            )));
        }

        if let Some(key) = item.unique_key() {
            let taken = self
                .store
                .values()
                .any(|other| other.unique_key().as_ref() == Some(&key));
            if taken {
                warn!(entity_type, %id, %key, "Duplicate unique key");
                return Err(StoreError::Conflict(format!(
                    "{entity_type} '{key}' already exists"
                )));
            }
        }

        self.raise_high_water(&id);
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    fn raise_high_water(&mut self, id: &T::Id) {
        if self.high_water.as_ref().map_or(true, |last| id > last) {
            self.high_water = Some(id.clone());
        }
    }
}
