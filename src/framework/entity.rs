//! # ActorState Trait
//!
//! The `ActorState` trait defines the contract a piece of state must satisfy to be owned by a
//! [`StateActor`](crate::framework::StateActor). The actor holds exactly one value of the state
//! type and applies every request to it sequentially, so the state never needs a lock.
//!
//! # Provided Methods (Hooks)
//! - [`ActorState::on_start`] runs once before the first message is processed.
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any actor-owned state must implement.
///
/// # Associated Types
/// Every request shape is a type of its own. A session cannot be sent a ledger action,
/// and a ledger snapshot cannot be mistaken for a conversation history.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that action handlers can call out to other actors or
/// to remote collaborators. The `Context` type is injected into every hook at `run()` time
/// ("late binding"), which keeps construction free of dependency ordering problems.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Read-only view handed out by snapshot requests.
    type Snapshot: Send + Debug;

    /// Enum of the operations this state supports (e.g., `Append`, `Finalize`).
    type Action: Send + Debug;

    /// The result type returned by actions. Variants usually match actions 1:1.
    type ActionResult: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// One enum per actor, not one per action: clients match on a single error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce the read-only view of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once, before the first message, with the injected context.
    ///
    /// A failure is logged by the actor and processing continues with the state as it is.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one action to the state.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
