use serde::{Deserialize, Serialize};

use stockcast_core::{EngineResult, ItemId, Period};
use stockcast_records::RecordStore;

use crate::expiration::{ExpirationFlag, DEFAULT_EXPIRATION_THRESHOLD_DAYS};
use crate::forecast::forecast;
use crate::reorder::{reorder_point, DEFAULT_LEAD_TIME_DAYS};

/// Stock position classification for one item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Reorder,
    Optimal,
    Overstocked,
}

/// Suggested follow-up for a stock position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    OrderNow,
    Monitor,
    ReduceOrders,
}

/// Per-item recommendation combining forecasts, reorder point, stock
/// classification and the expiration flag when one applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub item_id: ItemId,
    pub predicted_daily_demand: f64,
    pub predicted_weekly_demand: f64,
    pub reorder_point: i64,
    pub quantity_on_hand: f64,
    pub status: StockStatus,
    pub action: StockAction,
    /// Present when the item is inside the default expiration horizon.
    pub expiration: Option<ExpirationFlag>,
}

/// Classify a stock position against its reorder point.
///
/// Thresholds: below the reorder point → reorder/order_now; under twice the
/// reorder point → optimal/monitor; anything above → overstocked/reduce_orders.
/// At a reorder point of zero (zero demand) any stock level classifies as
/// overstocked.
fn classify(on_hand: f64, reorder_point: i64) -> (StockStatus, StockAction) {
    let point = reorder_point as f64;
    if on_hand < point {
        (StockStatus::Reorder, StockAction::OrderNow)
    } else if on_hand < 2.0 * point {
        (StockStatus::Optimal, StockAction::Monitor)
    } else {
        (StockStatus::Overstocked, StockAction::ReduceOrders)
    }
}

/// Assemble the per-item recommendation report.
///
/// `ItemNotFound` from the forecaster surfaces unchanged. An item with sales
/// history but no inventory row counts as zero on hand: the genuinely
/// unknown-item case is already guarded by the forecaster, and a known item
/// with no counted stock should surface as most urgent rather than fail.
pub fn recommend(store: &RecordStore, item_id: &ItemId) -> EngineResult<RecommendationReport> {
    let daily = forecast(store, item_id, Period::Daily)?;
    let weekly = forecast(store, item_id, Period::Weekly)?;
    let reorder = reorder_point(store, item_id, DEFAULT_LEAD_TIME_DAYS)?;

    let record = store.inventory_for(item_id);
    let on_hand = record.map(|r| r.quantity_on_hand).unwrap_or(0.0);
    let (status, action) = classify(on_hand, reorder.reorder_point);

    let expiration = record.and_then(|r| {
        let days = r.days_until_expiration?;
        (days <= DEFAULT_EXPIRATION_THRESHOLD_DAYS).then(|| ExpirationFlag {
            item_id: r.item_id.clone(),
            days_until_expiration: days,
            quantity_on_hand: r.quantity_on_hand,
        })
    });

    tracing::debug!(item_id = %item_id, status = ?status, action = ?action, "recommendation");

    Ok(RecommendationReport {
        item_id: item_id.clone(),
        predicted_daily_demand: daily.predicted_demand,
        predicted_weekly_demand: weekly.predicted_demand,
        reorder_point: reorder.reorder_point,
        quantity_on_hand: on_hand,
        status,
        action,
        expiration,
    })
}
