use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::ItemId;

/// A single historical sale. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub item_id: ItemId,
    pub timestamp: DateTime<Utc>,
    /// Units sold; never negative.
    pub quantity: f64,
}

/// Current stock position for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_id: ItemId,
    /// Units currently in stock; never negative.
    pub quantity_on_hand: f64,
    /// Absent means expiration is not tracked for this item.
    pub days_until_expiration: Option<i64>,
    /// Absent marks an active item.
    pub termination_date: Option<DateTime<Utc>>,
}

impl InventoryRecord {
    /// Active items have no recorded termination date.
    pub fn is_active(&self) -> bool {
        self.termination_date.is_none()
    }
}
