use std::collections::HashMap;

use stockcast_core::ItemId;

use crate::record::{InventoryRecord, SalesRecord};

/// Immutable, queryable projection of the sales and inventory tables.
///
/// Sales are indexed by item and sorted ascending by timestamp at build time,
/// so per-item queries stay proportional to the lookback window instead of
/// the full dataset. All queries are read-only; a single instance serves
/// concurrent lookups without coordination. Reload means constructing a new
/// store and swapping it in whole, never mutating this one.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    sales: HashMap<ItemId, Vec<SalesRecord>>,
    /// Inventory snapshot in ingestion order (scans stay deterministic).
    inventory: Vec<InventoryRecord>,
    inventory_index: HashMap<ItemId, usize>,
}

impl RecordStore {
    /// Build the indexed store from already-validated records.
    ///
    /// Sales with equal timestamps keep their input order. A later inventory
    /// row for an item replaces the earlier one.
    pub fn new(sales: Vec<SalesRecord>, inventory: Vec<InventoryRecord>) -> Self {
        let mut by_item: HashMap<ItemId, Vec<SalesRecord>> = HashMap::new();
        for record in sales {
            by_item
                .entry(record.item_id.clone())
                .or_default()
                .push(record);
        }
        for series in by_item.values_mut() {
            series.sort_by_key(|r| r.timestamp);
        }

        let mut rows: Vec<InventoryRecord> = Vec::with_capacity(inventory.len());
        let mut index: HashMap<ItemId, usize> = HashMap::new();
        for record in inventory {
            match index.get(&record.item_id) {
                Some(&at) => rows[at] = record,
                None => {
                    index.insert(record.item_id.clone(), rows.len());
                    rows.push(record);
                }
            }
        }

        Self {
            sales: by_item,
            inventory: rows,
            inventory_index: index,
        }
    }

    /// Sales for an item, ascending by timestamp (most recent last).
    ///
    /// Unknown items answer with an empty slice; whether "no data" is an
    /// error is the forecaster's call, not the store's.
    pub fn sales_for(&self, item_id: &ItemId) -> &[SalesRecord] {
        self.sales.get(item_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inventory record for an item, if one was ingested.
    pub fn inventory_for(&self, item_id: &ItemId) -> Option<&InventoryRecord> {
        self.inventory_index
            .get(item_id)
            .map(|&at| &self.inventory[at])
    }

    /// Full inventory snapshot, in ingestion order.
    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    /// Inventory records with no recorded termination date.
    pub fn active_items(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.inventory.iter().filter(|r| r.is_active())
    }

    /// Number of distinct items with sales history.
    pub fn sales_item_count(&self) -> usize {
        self.sales.len()
    }

    /// Number of items in the inventory snapshot.
    pub fn inventory_item_count(&self) -> usize {
        self.inventory.len()
    }
}
