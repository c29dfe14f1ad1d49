//! Service layer
//!
//! Stamps records with the server time on save; everything else passes
//! straight through to the repository.

use crate::repository::EmotionRepository;
use chrono::Local;
use emotion_common::{EmotionRecord, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct EmotionService {
    repository: Arc<dyn EmotionRepository>,
}

impl EmotionService {
    pub fn new(repository: Arc<dyn EmotionRepository>) -> Self {
        Self { repository }
    }

    /// Persist a record, replacing any client-supplied timestamp with now
    pub async fn save_emotion(&self, mut record: EmotionRecord) -> Result<EmotionRecord> {
        record.timestamp = Some(Local::now().naive_local());
        let saved = self.repository.save(record).await?;

        info!(
            "Saved emotion record {:?} ({:?}/{:?}, confidence {})",
            saved.id, saved.modality, saved.emotion, saved.confidence
        );
        Ok(saved)
    }

    pub async fn get_all_emotions(&self) -> Result<Vec<EmotionRecord>> {
        self.repository.find_all().await
    }

    /// `None` when no record has this id
    pub async fn get_emotion_by_id(&self, id: i64) -> Result<Option<EmotionRecord>> {
        let record = self.repository.find_by_id(id).await?;
        debug!("Lookup of emotion record {}: found={}", id, record.is_some());
        Ok(record)
    }

    /// Delete by id; a missing record surfaces as the repository's error
    pub async fn delete_emotion(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        info!("Deleted emotion record {}", id);
        Ok(())
    }
}
