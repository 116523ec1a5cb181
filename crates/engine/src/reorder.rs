use serde::{Deserialize, Serialize};

use stockcast_core::{EngineError, EngineResult, ItemId, Period};
use stockcast_records::RecordStore;

use crate::forecast::forecast;

/// Supplier lead time assumed when the caller does not specify one.
pub const DEFAULT_LEAD_TIME_DAYS: i64 = 3;

/// Safety-stock-adjusted reorder point for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    pub item_id: ItemId,
    pub lead_time_days: i64,
    /// Buffer above expected lead-time demand: half of lead-time demand.
    pub safety_stock: f64,
    /// Stock level that should trigger a new order (ceiling of lead-time
    /// demand plus safety stock).
    pub reorder_point: i64,
}

/// Derive the reorder point from the daily demand forecast and a supplier
/// lead time.
///
/// Safety stock is defined as half of lead-time demand; this is a
/// simplification, not a service-level calculation. A pure function of the
/// forecast and the lead time — inventory state is never touched.
///
/// `lead_time_days` must be positive; zero or negative values are a caller
/// contract violation (`InvalidArgument`).
pub fn reorder_point(
    store: &RecordStore,
    item_id: &ItemId,
    lead_time_days: i64,
) -> EngineResult<ReorderRecommendation> {
    if lead_time_days <= 0 {
        return Err(EngineError::invalid_argument(format!(
            "lead_time_days must be a positive integer (got {lead_time_days})"
        )));
    }

    let daily = forecast(store, item_id, Period::Daily)?;
    let lead_time_demand = daily.predicted_demand * lead_time_days as f64;
    let safety_stock = lead_time_demand * 0.5;
    let reorder_point = (lead_time_demand + safety_stock).ceil() as i64;

    tracing::debug!(
        item_id = %item_id,
        lead_time_days,
        safety_stock,
        reorder_point,
        "reorder point"
    );

    Ok(ReorderRecommendation {
        item_id: item_id.clone(),
        lead_time_days,
        safety_stock,
        reorder_point,
    })
}
