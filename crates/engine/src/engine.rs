use std::sync::Arc;

use stockcast_core::{EngineResult, ItemId, Period};
use stockcast_records::RecordStore;

use crate::expiration::{self, ExpirationFlag};
use crate::forecast::{self, ForecastResult};
use crate::recommend::{self, RecommendationReport};
use crate::reorder::{self, ReorderRecommendation};

/// Read-only facade over one store snapshot.
///
/// Cheap to construct per request batch. All methods are synchronous pure
/// functions of the snapshot, so one engine can serve concurrent callers
/// without coordination; swapping in fresh data means building a new store
/// and a new engine, never mutating this one.
#[derive(Debug, Clone)]
pub struct InventoryEngine {
    store: Arc<RecordStore>,
}

impl InventoryEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Trailing-moving-average demand estimate (§ forecaster contract).
    pub fn forecast(&self, item_id: &ItemId, period: Period) -> EngineResult<ForecastResult> {
        forecast::forecast(&self.store, item_id, period)
    }

    /// Safety-stock-adjusted reorder point from the daily forecast.
    pub fn reorder_point(
        &self,
        item_id: &ItemId,
        lead_time_days: i64,
    ) -> EngineResult<ReorderRecommendation> {
        reorder::reorder_point(&self.store, item_id, lead_time_days)
    }

    /// Inventory expiring within the threshold, soonest first.
    pub fn expiring_items(&self, days_threshold: i64) -> Vec<ExpirationFlag> {
        expiration::expiring_items(&self.store, days_threshold)
    }

    /// Full per-item recommendation report.
    pub fn recommend(&self, item_id: &ItemId) -> EngineResult<RecommendationReport> {
        recommend::recommend(&self.store, item_id)
    }
}
