use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use stockcast_core::ItemId;
use stockcast_records::{InventoryRecord, RecordStore, SalesRecord};

/// Sales table file name inside a data directory.
pub const SALES_FILE: &str = "sales.csv";
/// Inventory table file name inside a data directory.
pub const INVENTORY_FILE: &str = "inventory.csv";

pub type IngestResult<T> = Result<T, IngestError>;

/// Ingestion failure.
///
/// Surfaced to the engine's callers as `DataUnavailable`; never retried here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid value in {path} record {record}: {reason}")]
    InvalidValue {
        path: String,
        record: usize,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct SalesRow {
    item_id: String,
    /// UNIX epoch seconds.
    timestamp: i64,
    quantity: f64,
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    item_id: String,
    quantity_on_hand: f64,
    days_until_expiration: Option<i64>,
    /// UNIX epoch seconds; empty cell marks an active item.
    termination_date: Option<i64>,
}

/// Load the sales table (columns: item_id, timestamp, quantity).
pub fn load_sales(path: impl AsRef<Path>) -> IngestResult<Vec<SalesRecord>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|source| IngestError::Io {
        path: shown.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<SalesRow>().enumerate() {
        let record = i + 1;
        let row = row.map_err(|source| IngestError::Malformed {
            path: shown.clone(),
            source,
        })?;

        if row.quantity < 0.0 {
            return Err(IngestError::InvalidValue {
                path: shown.clone(),
                record,
                reason: format!("quantity cannot be negative (got {})", row.quantity),
            });
        }
        let timestamp = timestamp_from_unix(row.timestamp).ok_or_else(|| {
            IngestError::InvalidValue {
                path: shown.clone(),
                record,
                reason: format!("timestamp out of range: {}", row.timestamp),
            }
        })?;

        records.push(SalesRecord {
            item_id: ItemId::new(row.item_id),
            timestamp,
            quantity: row.quantity,
        });
    }

    tracing::info!(path = %shown, rows = records.len(), "loaded sales table");
    Ok(records)
}

/// Load the inventory table (columns: item_id, quantity_on_hand,
/// days_until_expiration, termination_date).
pub fn load_inventory(path: impl AsRef<Path>) -> IngestResult<Vec<InventoryRecord>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|source| IngestError::Io {
        path: shown.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<InventoryRow>().enumerate() {
        let record = i + 1;
        let row = row.map_err(|source| IngestError::Malformed {
            path: shown.clone(),
            source,
        })?;

        if row.quantity_on_hand < 0.0 {
            return Err(IngestError::InvalidValue {
                path: shown.clone(),
                record,
                reason: format!(
                    "quantity_on_hand cannot be negative (got {})",
                    row.quantity_on_hand
                ),
            });
        }
        let termination_date = match row.termination_date {
            None => None,
            Some(secs) => Some(timestamp_from_unix(secs).ok_or_else(|| {
                IngestError::InvalidValue {
                    path: shown.clone(),
                    record,
                    reason: format!("termination_date out of range: {secs}"),
                }
            })?),
        };

        records.push(InventoryRecord {
            item_id: ItemId::new(row.item_id),
            quantity_on_hand: row.quantity_on_hand,
            days_until_expiration: row.days_until_expiration,
            termination_date,
        });
    }

    tracing::info!(path = %shown, rows = records.len(), "loaded inventory table");
    Ok(records)
}

/// Load both tables from a data directory and build the indexed store.
pub fn load_store(data_dir: impl AsRef<Path>) -> IngestResult<RecordStore> {
    let data_dir = data_dir.as_ref();
    let sales = load_sales(data_dir.join(SALES_FILE))?;
    let inventory = load_inventory(data_dir.join(INVENTORY_FILE))?;
    Ok(RecordStore::new(sales, inventory))
}

/// UNIX epoch seconds to an absolute instant.
fn timestamp_from_unix(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
