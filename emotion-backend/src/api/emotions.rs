//! Emotion record endpoints under `/api/emotions`

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use emotion_common::EmotionRecord;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Emotion record deleted successfully!";

/// POST /api/emotions/save
///
/// Stores the record and returns it with its id and server timestamp.
/// No field is validated.
pub async fn save_emotion(
    State(state): State<AppState>,
    payload: Result<Json<EmotionRecord>, JsonRejection>,
) -> ApiResult<Json<EmotionRecord>> {
    let Json(record) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let saved = state.service.save_emotion(record).await?;
    Ok(Json(saved))
}

/// GET /api/emotions/all
pub async fn get_all_emotions(State(state): State<AppState>) -> ApiResult<Json<Vec<EmotionRecord>>> {
    let records = state.service.get_all_emotions().await?;
    Ok(Json(records))
}

/// GET /api/emotions/:id
///
/// An unknown id answers 200 with an empty body, not 404.
pub async fn get_emotion_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let response = match state.service.get_emotion_by_id(id).await? {
        Some(record) => Json(record).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// DELETE /api/emotions/:id
///
/// No existence check: deleting an unknown id fails with 500.
pub async fn delete_emotion(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<&'static str> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state.service.delete_emotion(id).await?;
    Ok(DELETE_CONFIRMATION)
}
