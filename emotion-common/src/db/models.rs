//! Database models

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One persisted emotion detection, a row of `emotion_records`.
///
/// Every field except `id` is free-form and accepted as sent; missing JSON
/// fields decode to `null` (or `0.0` for `confidence`). `timestamp` is
/// assigned by the service on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionRecord {
    /// Server-generated identifier, `None` until first persisted
    pub id: Option<i64>,
    /// Input channel: "facial", "voice", "text" by convention
    pub modality: Option<String>,
    /// Detected label, e.g. "happy"
    pub emotion: Option<String>,
    /// Detector certainty, conventionally in [0, 1]
    #[serde(deserialize_with = "null_as_zero")]
    pub confidence: f64,
    /// Originating file name or input reference
    pub source_file: Option<String>,
    /// Local server time at save
    pub timestamp: Option<NaiveDateTime>,
}

/// `null` confidence decodes as `0.0`, same as an absent one
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl EmotionRecord {
    /// Build an unsaved record (no id, no timestamp)
    pub fn new(
        modality: impl Into<String>,
        emotion: impl Into<String>,
        confidence: f64,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            modality: Some(modality.into()),
            emotion: Some(emotion.into()),
            confidence,
            source_file: Some(source_file.into()),
            timestamp: None,
        }
    }
}
