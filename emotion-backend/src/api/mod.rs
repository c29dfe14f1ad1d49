//! HTTP API handlers for emotion-backend

pub mod emotions;
pub mod health;

pub use emotions::{delete_emotion, get_all_emotions, get_emotion_by_id, save_emotion, DELETE_CONFIRMATION};
pub use health::{health_routes, service_banner};
