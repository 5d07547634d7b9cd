use super::{OrderStore, StoreError};
use crate::model::money::parse_amount;
use crate::model::OrderEntry;
use async_trait::async_trait;
use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder};
use futures::StreamExt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tracing::{debug, warn};

/// Row layout on disk. Amounts are kept as text so a hand-edited file still loads.
#[derive(Debug, Serialize, Deserialize)]
struct OrderRow {
    customer_name: String,
    items: String,
    customizations: String,
    price_per_item: String,
    order_total: String,
}

impl From<&OrderEntry> for OrderRow {
    fn from(entry: &OrderEntry) -> Self {
        Self {
            customer_name: entry.customer_name.clone(),
            items: entry.items.clone(),
            customizations: entry.customizations.clone(),
            price_per_item: entry.price_per_item.to_string(),
            order_total: entry.order_total.to_string(),
        }
    }
}

impl From<OrderRow> for OrderEntry {
    fn from(row: OrderRow) -> Self {
        Self {
            customer_name: row.customer_name,
            items: row.items,
            customizations: row.customizations,
            price_per_item: parse_amount(&row.price_per_item).unwrap_or(Decimal::ZERO),
            order_total: parse_amount(&row.order_total).unwrap_or(Decimal::ZERO),
        }
    }
}

/// Appends one CSV row per order, with a header row at the top of the file.
#[derive(Debug, Clone)]
pub struct CsvOrderStore {
    path: PathBuf,
}

impl CsvOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for CsvOrderStore {
    async fn append(&self, entry: &OrderEntry) -> Result<(), StoreError> {
        self.ensure_parent().await?;
        let file = OpenOptions::new().create(true).append(true).open(&self.path).await?;
        let is_new = file.metadata().await?.len() == 0;

        let mut serializer = AsyncWriterBuilder::new()
            .has_headers(is_new)
            .create_serializer(file);
        serializer.serialize(OrderRow::from(entry)).await?;
        serializer.flush().await?;
        debug!(path = %self.path.display(), "Order row written");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<OrderEntry>, StoreError> {
        let file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut deserializer = AsyncReaderBuilder::new().create_deserializer(file);
        let mut rows = deserializer.deserialize::<OrderRow>();
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await {
            match row {
                Ok(row) => entries.push(OrderEntry::from(row)),
                Err(e) => warn!(path = %self.path.display(), error = %e, "Skipping unreadable order row"),
            }
        }
        Ok(entries)
    }

    async fn reset(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
