//! Health check and service banner

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "emotion-backend".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /
///
/// Names the service and lists its record endpoints.
pub async fn service_banner() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "EmotionSense backend running",
        "endpoints": {
            "save": "POST /api/emotions/save",
            "all": "GET /api/emotions/all",
            "get": "GET /api/emotions/{id}",
            "delete": "DELETE /api/emotions/{id}",
        }
    }))
}

/// Build health check and banner routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_banner))
        .route("/health", get(health_check))
}
