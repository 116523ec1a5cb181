use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockcast_core::{ItemId, Period};
use stockcast_engine::DEFAULT_EXPIRATION_THRESHOLD_DAYS;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/predict", post(predict_demand))
        .route("/:item_id/recommendation", get(get_recommendation))
        .route("/expiring", get(get_expiring))
}

pub async fn predict_demand(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PredictRequest>,
) -> axum::response::Response {
    if body.item_id.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_argument", "item_id is required");
    }

    let period = match body.period.as_deref() {
        None => Period::Daily,
        Some(raw) => match raw.parse::<Period>() {
            Ok(period) => period,
            Err(e) => return errors::engine_error_to_response(e),
        },
    };

    let engine = services.engine();
    match engine.forecast(&ItemId::new(body.item_id), period) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_recommendation(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    let engine = services.engine();
    match engine.recommend(&ItemId::new(item_id)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_expiring(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ExpiringQuery>,
) -> axum::response::Response {
    let days_threshold = query
        .days_threshold
        .unwrap_or(DEFAULT_EXPIRATION_THRESHOLD_DAYS);

    let engine = services.engine();
    let flags = engine.expiring_items(days_threshold);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "days_threshold": days_threshold,
            "count": flags.len(),
            "items": flags,
        })),
    )
        .into_response()
}
