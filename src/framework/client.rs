//! # State Client
//!
//! The "Client" half of the actor model: a cheap, cloneable handle that forwards requests
//! over an mpsc channel and awaits each answer on a oneshot channel.

use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a [`StateActor`](crate::framework::StateActor).
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared across tasks.
pub struct StateClient<T: ActorState> {
    sender: mpsc::Sender<StateRequest<T>>,
}

impl<T: ActorState> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorState> StateClient<T> {
    pub fn new(sender: mpsc::Sender<StateRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
