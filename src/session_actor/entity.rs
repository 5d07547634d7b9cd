//! [`ActorState`] implementation for [`Session`].
//!
//! The session owns the conversation for the order being taken and the active menu. Because
//! the actor handles one message at a time, a reply or an extraction has the conversation
//! to itself from start to finish.

use super::actions::{SessionAction, SessionActionResult, TurnOutcome};
use super::error::SessionError;
use crate::clients::LedgerClient;
use crate::dialogue::{is_complete, OrderExtractor, ResponseGenerator};
use crate::framework::ActorState;
use crate::model::{ConversationState, Menu, OrderEntry, Turn};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default)]
pub struct Session {
    conversation: ConversationState,
    menu: Arc<Menu>,
}

impl Session {
    pub fn new(menu: Menu) -> Self {
        Self {
            conversation: ConversationState::new(),
            menu: Arc::new(menu),
        }
    }

    async fn finalize(&mut self, ctx: &SessionContext) -> Result<OrderEntry, SessionError> {
        let entry = ctx.extractor.extract(&mut self.conversation).await;
        let orders = ctx
            .ledger
            .append(entry.clone())
            .await
            .map_err(|e| SessionError::Ledger(e.to_string()))?;
        info!(orders, customer = %entry.customer_name, "Order placed");
        Ok(entry)
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub history: Vec<Turn>,
    pub menu: Arc<Menu>,
}

/// Dependencies of the session actor.
pub struct SessionContext {
    pub generator: ResponseGenerator,
    pub extractor: OrderExtractor,
    pub ledger: LedgerClient,
}

#[async_trait]
impl ActorState for Session {
    type Snapshot = SessionSnapshot;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = SessionContext;
    type Error = SessionError;

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            history: self.conversation.turns().to_vec(),
            menu: Arc::clone(&self.menu),
        }
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::Utterance(utterance) => {
                let outcome = if is_complete(&utterance) {
                    TurnOutcome::OrderPlaced(self.finalize(ctx).await?)
                } else {
                    TurnOutcome::Replied(ctx.generator.respond(&mut self.conversation, &self.menu, &utterance).await)
                };
                Ok(SessionActionResult::Utterance(outcome))
            }
            SessionAction::Finalize => Ok(SessionActionResult::Finalize(self.finalize(ctx).await?)),
            SessionAction::SetMenu(menu) => {
                let items = menu.len();
                self.menu = Arc::new(menu);
                info!(items, "Menu replaced");
                Ok(SessionActionResult::SetMenu(items))
            }
        }
    }
}
