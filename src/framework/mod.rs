//! Generic single-state actor framework.
//!
//! This module provides the building blocks the café runtime is assembled from:
//! a piece of state that lives inside one Tokio task and is only ever touched
//! by that task, plus a cloneable client that talks to it over channels.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state types implement to be owned by an actor
//! - [`StateActor`] - Generic actor that owns exactly one state value
//! - [`StateClient`] - Type-safe handle for sending requests to a [`StateActor`]
//! - [`FrameworkError`] - Channel-level failures (actor gone, response dropped)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use entity::ActorState;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
