use axum::Router;

pub mod admin;
pub mod inventory;
pub mod system;

/// Router for all domain endpoints (health is wired separately).
pub fn router() -> Router {
    Router::new()
        .nest("/api/inventory", inventory::router())
        .nest("/api/admin", admin::router())
}
