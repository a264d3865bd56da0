use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service banner and endpoint index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Blog API (Rust)",
        "version": version,
        "endpoints": {
            "users": "/users[/:id] (writes require an administrator or the user themself)",
            "posts": "/posts[/:id]",
            "comments": "/comments, /comments/:postId (GET), /comments/:id (PUT, DELETE)",
            "categories": "/categories[/:id]",
            "health": "/health",
        }
    }))
}

/// GET /health - pings the store; the store error is logged, never returned
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
