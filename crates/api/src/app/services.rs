use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use stockcast_engine::InventoryEngine;
use stockcast_ingest::IngestError;
use stockcast_records::RecordStore;

/// Application services handed to request handlers.
///
/// The store snapshot is swapped whole on reload (an ownership handoff, not
/// an in-place mutation); handlers clone the `Arc` once per request, so
/// in-flight queries keep the snapshot they started with.
#[derive(Debug)]
pub struct AppServices {
    data_dir: PathBuf,
    store: RwLock<Arc<RecordStore>>,
}

/// Counts reported after a successful snapshot (re)load.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReloadSummary {
    pub sales_items: usize,
    pub inventory_items: usize,
}

impl AppServices {
    pub fn new(data_dir: PathBuf, store: RecordStore) -> Self {
        Self {
            data_dir,
            store: RwLock::new(Arc::new(store)),
        }
    }

    /// Load the initial snapshot from `data_dir`.
    pub fn load(data_dir: PathBuf) -> Result<Self, IngestError> {
        let store = stockcast_ingest::load_store(&data_dir)?;
        tracing::info!(
            data_dir = %data_dir.display(),
            sales_items = store.sales_item_count(),
            inventory_items = store.inventory_item_count(),
            "snapshot loaded"
        );
        Ok(Self::new(data_dir, store))
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<RecordStore> {
        self.store.read().unwrap().clone()
    }

    /// Engine over the current snapshot.
    pub fn engine(&self) -> InventoryEngine {
        InventoryEngine::new(self.snapshot())
    }

    /// Re-ingest the data directory and swap the snapshot in whole.
    ///
    /// On failure the previous snapshot keeps serving.
    pub fn reload(&self) -> Result<ReloadSummary, IngestError> {
        let store = stockcast_ingest::load_store(&self.data_dir)?;
        let summary = ReloadSummary {
            sales_items: store.sales_item_count(),
            inventory_items: store.inventory_item_count(),
        };
        *self.store.write().unwrap() = Arc::new(store);

        tracing::info!(
            sales_items = summary.sales_items,
            inventory_items = summary.inventory_items,
            "snapshot reloaded"
        );
        Ok(summary)
    }
}
