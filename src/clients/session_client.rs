//! # Session Client
//!
//! High-level API for the session actor: the entry point for customer utterances.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{Menu, OrderEntry, Turn};
use crate::session_actor::{Session, SessionAction, SessionActionResult, SessionError, TurnOutcome};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SessionClient {
    inner: StateClient<Session>,
}

impl SessionClient {
    pub fn new(inner: StateClient<Session>) -> Self {
        Self { inner }
    }

    async fn perform(&self, action: SessionAction) -> Result<SessionActionResult, SessionError> {
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }

    /// Run one customer utterance through the completion gate.
    #[instrument(skip(self))]
    pub async fn handle_utterance(&self, utterance: &str) -> Result<TurnOutcome, SessionError> {
        debug!("Sending request");
        match self.perform(SessionAction::Utterance(utterance.to_string())).await? {
            SessionActionResult::Utterance(outcome) => Ok(outcome),
            other => Err(unexpected("Utterance", other)),
        }
    }

    /// Extract the current conversation into the ledger regardless of what was said.
    #[instrument(skip(self))]
    pub async fn finalize_order(&self) -> Result<OrderEntry, SessionError> {
        debug!("Sending request");
        match self.perform(SessionAction::Finalize).await? {
            SessionActionResult::Finalize(entry) => Ok(entry),
            other => Err(unexpected("Finalize", other)),
        }
    }

    /// Replace the active menu. Returns its item count.
    #[instrument(skip(self, menu), fields(items = menu.len()))]
    pub async fn set_menu(&self, menu: Menu) -> Result<usize, SessionError> {
        debug!("Sending request");
        match self.perform(SessionAction::SetMenu(menu)).await? {
            SessionActionResult::SetMenu(items) => Ok(items),
            other => Err(unexpected("SetMenu", other)),
        }
    }

    /// Turns of the order currently being taken.
    pub async fn history(&self) -> Result<Vec<Turn>, SessionError> {
        Ok(self.snapshot().await?.history)
    }
}

fn unexpected(action: &str, result: SessionActionResult) -> SessionError {
    SessionError::ActorCommunicationError(format!("{action} answered with {result:?}"))
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &StateClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SessionError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_handle_utterance_round_trip() {
        let (client, mut receiver) = create_mock_client::<Session>(10);
        let session = SessionClient::new(client);

        let task = tokio::spawn(async move { session.handle_utterance("A latte please").await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, SessionAction::Utterance(ref u) if u == "A latte please"));
        responder
            .send(Ok(SessionActionResult::Utterance(TurnOutcome::Replied("Large or small?".into()))))
            .unwrap();

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.text(), "Large or small?");
    }

    #[tokio::test]
    async fn test_set_menu_reports_item_count() {
        let (client, mut receiver) = create_mock_client::<Session>(10);
        let session = SessionClient::new(client);

        let task = tokio::spawn(async move { session.set_menu(Menu::default()).await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, SessionAction::SetMenu(_)));
        responder.send(Ok(SessionActionResult::SetMenu(0))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_framework_error_is_mapped() {
        let (client, mut receiver) = create_mock_client::<Session>(10);
        let session = SessionClient::new(client);

        let task = tokio::spawn(async move { session.finalize_order().await });

        let (_, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        responder.send(Err(FrameworkError::ActorDropped)).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(SessionError::ActorCommunicationError(_))
        ));
    }
}
