use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/inventory/predict`.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub item_id: String,
    /// One of "daily" | "weekly" | "monthly"; defaults to daily.
    pub period: Option<String>,
}

/// Query of `GET /api/inventory/expiring`.
#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    /// Defaults to the engine's 7-day horizon.
    pub days_threshold: Option<i64>,
}
