//! # Messages
//!
//! The request type carried over the actor's channel, and the one-shot response alias.

use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a [`StateActor`](crate::framework::StateActor).
///
/// There are only two shapes of request:
///
/// - **Snapshot**: read the current state through [`ActorState::snapshot`].
/// - **Action**: apply an [`ActorState::Action`] and return its result.
///
/// Both are answered in arrival order, which is what gives callers exclusive
/// access to the state for the duration of their request.
pub enum StateRequest<T: ActorState> {
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
