//! [`ActorState`] implementation for [`OrderLedger`].
//!
//! The in-memory ledger is the source of truth. When a store is configured every change is
//! mirrored to it; a store failure is logged and the in-memory change stands.

use super::actions::{LedgerAction, LedgerActionResult};
use super::error::LedgerError;
use crate::framework::ActorState;
use crate::model::{OrderEntry, OrderLedger};
use crate::store::OrderStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Dependencies of the ledger actor.
#[derive(Clone, Default)]
pub struct LedgerContext {
    pub store: Option<Arc<dyn OrderStore>>,
}

impl LedgerContext {
    pub fn new(store: Option<Arc<dyn OrderStore>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActorState for OrderLedger {
    type Snapshot = Vec<OrderEntry>;
    type Action = LedgerAction;
    type ActionResult = LedgerActionResult;
    type Context = LedgerContext;
    type Error = LedgerError;

    fn snapshot(&self) -> Vec<OrderEntry> {
        self.entries().to_vec()
    }

    /// Reload orders persisted by an earlier run.
    async fn on_start(&mut self, ctx: &LedgerContext) -> Result<(), LedgerError> {
        let Some(store) = &ctx.store else {
            return Ok(());
        };
        let persisted = store.list().await.map_err(|e| LedgerError::Store(e.to_string()))?;
        for entry in persisted {
            self.append(entry);
        }
        info!(orders = self.len(), "Ledger restored");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: LedgerAction,
        ctx: &LedgerContext,
    ) -> Result<LedgerActionResult, LedgerError> {
        match action {
            LedgerAction::Append(entry) => {
                if let Some(store) = &ctx.store {
                    if let Err(e) = store.append(&entry).await {
                        warn!(error = %e, "Failed to persist order");
                    }
                }
                Ok(LedgerActionResult::Append(self.append(entry)))
            }
            LedgerAction::Reset => {
                if let Some(store) = &ctx.store {
                    if let Err(e) = store.reset().await {
                        warn!(error = %e, "Failed to reset order store");
                    }
                }
                Ok(LedgerActionResult::Reset(self.reset()))
            }
            LedgerAction::Count => Ok(LedgerActionResult::Count(self.len())),
            LedgerAction::Revenue => Ok(LedgerActionResult::Revenue(self.revenue())),
        }
    }
}
