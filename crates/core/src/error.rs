//! Engine error model.

use thiserror::Error;

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Every variant is a deterministic function of the request and the current
/// snapshot; the engine never retries internally. Transport mapping (404/400/
/// 503 equivalents) belongs to the serving layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No sales records exist for the requested item.
    #[error("no sales data found for item: {0}")]
    ItemNotFound(String),

    /// A caller-supplied argument violated the contract
    /// (e.g. non-positive lead time, unrecognized period).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The ingestion collaborator failed to supply a required table.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
}

impl EngineError {
    pub fn item_not_found(item_id: impl Into<String>) -> Self {
        Self::ItemNotFound(item_id.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }
}
