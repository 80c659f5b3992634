//! # Resource Store
//!
//! A small persistence port for resource-oriented services. Each entity kind is
//! owned by one [`StoreActor`], a Tokio task that keeps the records in memory and
//! applies requests one at a time. Callers talk to it through a [`StoreClient`],
//! usually type-erased behind the [`Repository`] trait so handlers never know which
//! store they run against.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - how a record is keyed, whether the store
//!    assigns the key, and which secondary key must stay unique
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and the record map
//! 3. **Interface Layer** ([`StoreClient`], [`Repository`]) - type-safe access
//!
//! ## Persistence Port
//!
//! [`Repository`] is the narrow interface the rest of a service depends on:
//!
//! - `get_all` - every record, ordered by key
//! - `get` - the first record matching a predicate
//! - `create` - insert, with the key assigned by the store when the entity asks for it
//! - `update` - wholesale replacement of an existing record
//! - `remove` - delete by key
//!
//! ```rust,ignore
//! let (actor, client) = StoreActor::<Cabin>::new(32);
//! tokio::spawn(actor.run());
//!
//! let repo: Arc<dyn Repository<Cabin>> = Arc::new(client);
//! let cabin = repo.create(Cabin::new("Pine")).await?;
//! assert_eq!(cabin.id, 1);
//! ```
//!
//! ## Uniqueness
//!
//! Key uniqueness and the optional [`StoreEntity::unique_key`] are checked inside the
//! actor, so two concurrent creates cannot both win. Callers that pre-check for a
//! friendlier error still get a [`StoreError::Conflict`] when they lose the race.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers store requests from a queue of expectations, which is
//! the easy way to inject failures into code that sits on top of a [`Repository`].

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Predicate, Response, StoreRequest};
pub use repository::Repository;
