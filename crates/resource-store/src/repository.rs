//! # Repository Port
//!
//! The persistence interface resource handlers depend on. It is object safe, so
//! services hold an `Arc<dyn Repository<T>>` and tests can hand them a mock.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::Predicate;
use async_trait::async_trait;

/// Get-all / get-one / create / update / remove over one entity kind.
#[async_trait]
pub trait Repository<T: StoreEntity>: Send + Sync {
    /// All records, ordered by key.
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// First record matching `predicate`.
    async fn get(&self, predicate: Predicate<T>) -> Result<Option<T>, StoreError>;

    /// Inserts a record and returns it as stored (with its assigned key).
    async fn create(&self, item: T) -> Result<T, StoreError>;

    /// Replaces the record with the same key. `NotFound` when it does not exist.
    async fn update(&self, item: T) -> Result<T, StoreError>;

    /// Removes the record with `id`. `NotFound` when it does not exist.
    async fn remove(&self, id: T::Id) -> Result<(), StoreError>;

    /// Exact-key lookup.
    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.get(Box::new(move |item: &T| item.id() == id)).await
    }
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for StoreClient<T> {
    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        tracing::debug!("Sending request");
        self.list().await
    }

    #[tracing::instrument(skip_all)]
    async fn get(&self, predicate: Predicate<T>) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        self.find(predicate).await
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, item: T) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        StoreClient::create(self, item).await
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, item: T) -> Result<T, StoreError> {
        tracing::debug!("Sending request");
        StoreClient::update(self, item).await
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        tracing::debug!("Sending request");
        StoreClient::remove(self, id).await
    }
}
