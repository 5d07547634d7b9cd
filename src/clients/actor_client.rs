//! # ActorClient Trait
//!
//! Common interface for the typed clients, adding a default `snapshot` built on top of the
//! generic [`StateClient`].

use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for actor-specific clients to inherit the standard read operation.
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The actor-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the specific actor error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current read-only view of the actor's state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
