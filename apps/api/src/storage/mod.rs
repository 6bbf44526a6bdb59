//! Persistence for completed analyses.
//!
//! `AppState` holds an `Arc<dyn AnalysisStore>`; production uses Postgres.
//! Storage failures are never retried or buffered.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::analysis::{AnalysisRow, NewAnalysis};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Stores one analysis and returns it with its assigned id and timestamp.
    async fn insert(&self, analysis: NewAnalysis) -> Result<AnalysisRow, StorageError>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRow>, StorageError>;

    /// All analyses for a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRow>, StorageError>;

    /// Connectivity probe; returns the number of stored analyses.
    async fn count(&self) -> Result<i64, StorageError>;
}

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, analysis: NewAnalysis) -> Result<AnalysisRow, StorageError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            INSERT INTO analyses
                (user_id, skill_gaps, suitable_role, project_suggestions, learning_roadmap, score)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&analysis.user_id)
        .bind(&analysis.skill_gaps)
        .bind(&analysis.suitable_role)
        .bind(&analysis.project_suggestions)
        .bind(&analysis.learning_roadmap)
        .bind(analysis.score)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRow>, StorageError> {
        let row = sqlx::query_as::<_, AnalysisRow>("SELECT * FROM analyses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisRow>, StorageError> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analyses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
