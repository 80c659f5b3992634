//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of expectations instead of a record map. Use it to test code that sits on
//! top of a [`Repository`](crate::Repository) without spawning a store actor.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | None (expectations) | Real records |
//! | **Use Case** | Logic *around* the repository | Full flows |
//! | **Error Injection** | Easy (`return_err`) | Only closed channels |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut villas = MockStore::<Villa>::new();
//! villas.expect_list().return_err(StoreError::Closed);
//!
//! let repo: Arc<dyn Repository<Villa>> = Arc::new(villas.client());
//! assert_eq!(repo.get_all().await, Err(StoreError::Closed));
//! villas.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation panics the mock task, which surfaces as [`StoreError::Dropped`] in the
//! caller.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Represents an expected request and the canned reply.
enum Expectation<T: StoreEntity> {
    List(Result<Vec<T>, StoreError>),
    Find(Result<Option<T>, StoreError>),
    Create(Result<T, StoreError>),
    Update(Result<T, StoreError>),
    Remove(Result<(), StoreError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates the mock and spawns its responder task. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StoreRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { respond_to, .. },
                        Some(Expectation::Update(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { respond_to, .. },
                        Some(Expectation::Remove(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Find)
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    pub fn expect_remove(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Remove)
    }

    /// Panics if any expectation has not been consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }
}

/// Fluent builder that queues one reply.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    expectations: Expectations<T>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(response));
    }
}
