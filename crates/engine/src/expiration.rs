use serde::{Deserialize, Serialize};

use stockcast_core::ItemId;
use stockcast_records::RecordStore;

/// Expiration horizon assumed when the caller does not specify one.
pub const DEFAULT_EXPIRATION_THRESHOLD_DAYS: i64 = 7;

/// An inventory record at or below the expiration threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationFlag {
    pub item_id: ItemId,
    pub days_until_expiration: i64,
    pub quantity_on_hand: f64,
}

/// Inventory records expiring within `days_threshold`, soonest first.
///
/// Records with no expiration data are not tracked and never flagged —
/// absence means "not tracked", not "expiring now" or "never expiring". The
/// filter runs over the full snapshot on each call; caching is the caller's
/// concern. Items with equal days keep snapshot order.
pub fn expiring_items(store: &RecordStore, days_threshold: i64) -> Vec<ExpirationFlag> {
    let mut flags: Vec<ExpirationFlag> = store
        .inventory()
        .iter()
        .filter_map(|record| {
            let days = record.days_until_expiration?;
            (days <= days_threshold).then(|| ExpirationFlag {
                item_id: record.item_id.clone(),
                days_until_expiration: days,
                quantity_on_hand: record.quantity_on_hand,
            })
        })
        .collect();

    flags.sort_by_key(|f| f.days_until_expiration);

    tracing::debug!(days_threshold, flagged = flags.len(), "expiration scan");

    flags
}
