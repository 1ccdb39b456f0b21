pub mod handlers;

use crate::AppState;
use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// JSON routes over the shared state. Middleware (CORS, tracing) is layered on
/// by the binary.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/search", get(handlers::search::search))
        .route(
            "/results",
            get(handlers::search::results).delete(handlers::search::clear),
        )
        .route("/movie/{id}", get(handlers::movie::detail))
        .route("/movie/{id}/trailers", get(handlers::movie::trailers))
        .route("/loading", get(handlers::loading::status))
        .route("/loading/on", post(handlers::loading::on))
        .route("/loading/off", post(handlers::loading::off))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cinescout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
