use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;

/// A stored analysis. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: String,
    pub skill_gaps: Vec<String>,
    pub suitable_role: String,
    pub project_suggestions: Vec<String>,
    pub learning_roadmap: Vec<String>,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: the analysis fields plus the caller's user identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub user_id: String,
    pub skill_gaps: Vec<String>,
    pub suitable_role: String,
    pub project_suggestions: Vec<String>,
    pub learning_roadmap: Vec<String>,
    pub score: i32,
}

impl NewAnalysis {
    pub fn new(user_id: impl Into<String>, analysis: AnalysisResult) -> Self {
        Self {
            user_id: user_id.into(),
            skill_gaps: analysis.skill_gaps,
            suitable_role: analysis.suitable_role,
            project_suggestions: analysis.project_suggestions,
            learning_roadmap: analysis.learning_roadmap,
            // validated results are within 0..=100
            score: i32::try_from(analysis.score).unwrap_or(i32::MAX),
        }
    }
}
