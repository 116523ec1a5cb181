use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockcast_core::EngineError;

/// Map engine failures to protocol responses.
///
/// The engine itself knows no transport; this is the single place where its
/// error kinds meet HTTP.
pub fn engine_error_to_response(err: EngineError) -> axum::response::Response {
    match &err {
        EngineError::ItemNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "item_not_found", err.to_string())
        }
        EngineError::InvalidArgument(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", err.to_string())
        }
        EngineError::DataUnavailable(_) => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "data_unavailable",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
