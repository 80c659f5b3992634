//! Resource clients: the business rules of each resource, written against the
//! [`Repository`](resource_store::Repository) port so any store can sit underneath.

pub mod villa_client;
pub mod villa_number_client;

pub use villa_client::*;
pub use villa_number_client::*;
