use std::path::PathBuf;
use std::sync::Arc;

use stockcast_api::app;
use stockcast_api::app::services::AppServices;

#[tokio::main]
async fn main() {
    stockcast_observability::init();

    let data_dir = std::env::var("STOCKCAST_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("STOCKCAST_DATA_DIR not set; using ./data");
        "data".to_string()
    });

    let services = match AppServices::load(PathBuf::from(data_dir)) {
        Ok(services) => services,
        Err(e) => {
            tracing::error!(error = %e, "failed to load initial snapshot");
            std::process::exit(1);
        }
    };

    let app = app::build_app(Arc::new(services));

    let bind = std::env::var("STOCKCAST_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
