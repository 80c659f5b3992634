//! # System Lifecycle
//!
//! Starts the two store actors, wires the resource clients to them, and shuts
//! everything down in order.
//!
//! ## Shutdown
//!
//! 1. **Stop serving** - the HTTP server drains and drops its router (and with it
//!    the client clones)
//! 2. **Drop the clients** - closes the store channels
//! 3. **Stores exit** - `recv()` returns `None` after the queued requests
//! 4. **Await completion** - the task handles are joined
//!
//! The dependency graph is acyclic (clients point at stores, stores point at
//! nothing), so closing the channels is enough to stop every task.

pub mod seed;
pub mod villa_system;

pub use seed::*;
pub use villa_system::*;
