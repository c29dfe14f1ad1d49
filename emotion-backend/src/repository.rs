//! Storage layer: persistence of emotion records
//!
//! A key-value-with-scan store keyed by a server-generated integer id:
//! insert/upsert, full scan, point lookup and point delete.

use async_trait::async_trait;
use emotion_common::{EmotionRecord, Error, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Persistence operations for emotion records
#[async_trait]
pub trait EmotionRepository: Send + Sync {
    /// Insert a record without id (assigning one), or upsert a record with id
    async fn save(&self, record: EmotionRecord) -> Result<EmotionRecord>;

    /// All stored records
    async fn find_all(&self) -> Result<Vec<EmotionRecord>>;

    /// The record with `id`, or `None` if absent
    async fn find_by_id(&self, id: i64) -> Result<Option<EmotionRecord>>;

    /// Remove the record with `id`; `Error::NotFound` if there is none
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// `EmotionRepository` over the `emotion_records` SQLite table
#[derive(Clone)]
pub struct SqliteEmotionRepository {
    db: SqlitePool,
}

impl SqliteEmotionRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

const SELECT_COLUMNS: &str = "SELECT id, modality, emotion, confidence, source_file, timestamp FROM emotion_records";

#[async_trait]
impl EmotionRepository for SqliteEmotionRepository {
    async fn save(&self, record: EmotionRecord) -> Result<EmotionRecord> {
        // id = NULL lets SQLite assign the next rowid; a concrete id replaces
        // the existing row or inserts under that id
        let saved = sqlx::query_as::<_, EmotionRecord>(
            "INSERT INTO emotion_records (id, modality, emotion, confidence, source_file, timestamp)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 modality = excluded.modality,
                 emotion = excluded.emotion,
                 confidence = excluded.confidence,
                 source_file = excluded.source_file,
                 timestamp = excluded.timestamp
             RETURNING id, modality, emotion, confidence, source_file, timestamp",
        )
        .bind(record.id)
        .bind(&record.modality)
        .bind(&record.emotion)
        .bind(record.confidence)
        .bind(&record.source_file)
        .bind(record.timestamp)
        .fetch_one(&self.db)
        .await?;

        debug!("Stored emotion record {:?}", saved.id);
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<EmotionRecord>> {
        let records = sqlx::query_as::<_, EmotionRecord>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.db)
            .await?;

        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<EmotionRecord>> {
        let record = sqlx::query_as::<_, EmotionRecord>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM emotion_records WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No emotion record with id {}", id)));
        }

        Ok(())
    }
}
