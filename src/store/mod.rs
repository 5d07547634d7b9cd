//! Persistence for finalized orders.

pub mod csv;

pub use self::csv::CsvOrderStore;

use crate::model::OrderEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Order store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Order store CSV error: {0}")]
    Csv(String),
}

impl From<csv_async::Error> for StoreError {
    fn from(e: csv_async::Error) -> Self {
        StoreError::Csv(e.to_string())
    }
}

/// Durable mirror of the order ledger.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn append(&self, entry: &OrderEntry) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<OrderEntry>, StoreError>;

    async fn reset(&self) -> Result<(), StoreError>;
}
