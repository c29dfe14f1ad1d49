//! emotion-backend library - EmotionSense record service
//!
//! Three layers, each built from the one below at startup:
//! repository (storage) → service → HTTP router.

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod repository;
pub mod service;

use repository::SqliteEmotionRepository;
use service::EmotionService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: EmotionService,
}

impl AppState {
    /// Create new application state
    pub fn new(service: EmotionService) -> Self {
        Self { service }
    }

    /// Compose the SQLite repository and service over `db`
    pub fn from_pool(db: SqlitePool) -> Self {
        let repository = Arc::new(SqliteEmotionRepository::new(db));
        Self::new(EmotionService::new(repository))
    }
}

/// Build application router
///
/// All routes are public; cross-origin requests are allowed from any origin.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let emotions = Router::new()
        .route("/save", post(api::save_emotion))
        .route("/all", get(api::get_all_emotions))
        .route(
            "/:id",
            get(api::get_emotion_by_id).delete(api::delete_emotion),
        );

    Router::new()
        .nest("/api/emotions", emotions)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
