//! # Store Client
//!
//! The `StoreClient<T>` is the "Client" half of a store. It is cheap to clone and
//! turns every call into a [`StoreRequest`] plus a one-shot reply.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::{Predicate, Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Handle for sending requests to a [`StoreActor`](crate::StoreActor).
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn find(&self, predicate: Predicate<T>) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find {
            predicate,
            respond_to,
        })
        .await
    }

    pub async fn create(&self, item: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { item, respond_to })
            .await
    }

    pub async fn update(&self, item: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update { item, respond_to })
            .await
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
