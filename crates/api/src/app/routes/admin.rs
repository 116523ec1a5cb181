use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};

use stockcast_core::EngineError;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/reload", post(reload_snapshot))
}

/// Re-ingest the data directory and swap the store snapshot atomically.
///
/// A failed reload keeps the previous snapshot serving and reports 503.
pub async fn reload_snapshot(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.reload() {
        Ok(summary) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "reloaded",
                "sales_items": summary.sales_items,
                "inventory_items": summary.inventory_items,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "snapshot reload failed");
            errors::engine_error_to_response(EngineError::data_unavailable(e.to_string()))
        }
    }
}
