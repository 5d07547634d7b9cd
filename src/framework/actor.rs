//! # Generic State Actor
//!
//! This module defines the `StateActor`, the "Server" half of the actor model. It owns one
//! state value and the receiving end of the channel, and processes messages one at a time.

use crate::framework::client::StateClient;
use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single piece of state.
///
/// # Concurrency Model
/// Each `StateActor` runs in its own Tokio task and handles its messages *sequentially*.
/// While an action is being handled (including any `.await` inside it), no other request
/// can observe or mutate the state. Callers therefore get exclusive ownership of the state
/// for the duration of their request without a `Mutex`.
///
/// # Usage Pattern
///
/// 1. **Create**: `StateActor::new(state, buffer)` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// The loop exits when every client has been dropped.
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` around `state`, plus its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel, raised to 1 when zero. When the
    /// channel is full, client calls wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every hook, so dependencies created
    /// *after* the actor (other clients, remote backends) can still be handed to it.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Session" instead of "cafe_assistant::session_actor::entity::Session")
        let actor = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(actor, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(actor, error = %e, "on_start failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(actor, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(actor, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(actor, "Action ok"),
                        Err(e) => warn!(actor, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(actor, "Shutdown");
    }
}
