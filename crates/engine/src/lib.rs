//! `stockcast-engine`
//!
//! **Responsibility:** demand forecasting and reorder-point optimization over
//! one immutable store snapshot.
//!
//! Everything here is deterministic domain logic:
//! - No IO, no HTTP, no storage, no retries.
//! - Operations never mutate the snapshot; reload is the caller's concern.
//! - Failures are typed (`ItemNotFound` / `InvalidArgument` /
//!   `DataUnavailable`) and deterministic functions of the input.

pub mod engine;
pub mod expiration;
pub mod forecast;
pub mod recommend;
pub mod reorder;

pub use engine::InventoryEngine;
pub use expiration::{ExpirationFlag, DEFAULT_EXPIRATION_THRESHOLD_DAYS};
pub use forecast::ForecastResult;
pub use recommend::{RecommendationReport, StockAction, StockStatus};
pub use reorder::{ReorderRecommendation, DEFAULT_LEAD_TIME_DAYS};
