//! # Ledger Client
//!
//! High-level API for the ledger actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::ledger_actor::{LedgerAction, LedgerActionResult, LedgerError};
use crate::model::{OrderEntry, OrderLedger};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct LedgerClient {
    inner: StateClient<OrderLedger>,
}

impl LedgerClient {
    pub fn new(inner: StateClient<OrderLedger>) -> Self {
        Self { inner }
    }

    async fn perform(&self, action: LedgerAction) -> Result<LedgerActionResult, LedgerError> {
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }

    /// Record a finalized order. Returns the ledger length afterwards.
    #[instrument(skip(self, entry))]
    pub async fn append(&self, entry: OrderEntry) -> Result<usize, LedgerError> {
        debug!(?entry, "append called");
        match self.perform(LedgerAction::Append(entry)).await? {
            LedgerActionResult::Append(len) => Ok(len),
            other => Err(unexpected("Append", other)),
        }
    }

    /// All orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<OrderEntry>, LedgerError> {
        self.snapshot().await
    }

    /// Clear the ledger. Returns how many orders were removed.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<usize, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::Reset).await? {
            LedgerActionResult::Reset(cleared) => Ok(cleared),
            other => Err(unexpected("Reset", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::Count).await? {
            LedgerActionResult::Count(count) => Ok(count),
            other => Err(unexpected("Count", other)),
        }
    }

    /// Sum of every recorded order total.
    #[instrument(skip(self))]
    pub async fn revenue(&self) -> Result<Decimal, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::Revenue).await? {
            LedgerActionResult::Revenue(total) => Ok(total),
            other => Err(unexpected("Revenue", other)),
        }
    }
}

fn unexpected(action: &str, result: LedgerActionResult) -> LedgerError {
    LedgerError::ActorCommunicationError(format!("{action} answered with {result:?}"))
}

#[async_trait]
impl ActorClient<OrderLedger> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &StateClient<OrderLedger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LedgerError::ActorCommunicationError(e.to_string())
    }
}
