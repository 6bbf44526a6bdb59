//! Career analysis: orchestrates one analysis request end to end.
//!
//! Flow: validate request → build prompt → degradation policy → persist.
//!
//! Nothing is held across requests; every call builds its own prompt and
//! result from the inputs it is given.

use serde::Deserialize;
use tracing::info;

use crate::analysis::degradation::run_analysis;
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::github::types::ProfileSnapshot;
use crate::llm_client::TextGenerator;
use crate::models::analysis::{AnalysisRow, NewAnalysis};
use crate::storage::AnalysisStore;

/// Request body for `POST /api/v1/analyze`. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub github_data: Option<ProfileSnapshot>,
    pub user_id: Option<String>,
}

/// A request with all inputs present.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub snapshot: ProfileSnapshot,
    pub user_id: String,
}

impl TryFrom<AnalyzeRequest> for AnalysisInput {
    type Error = AppError;

    fn try_from(request: AnalyzeRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation("Missing required data".to_string());

        let resume_text = request
            .resume_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(missing)?;
        let snapshot = request.github_data.ok_or_else(missing)?;
        let user_id = request
            .user_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(missing)?;

        Ok(Self {
            resume_text,
            snapshot,
            user_id,
        })
    }
}

/// Produces an analysis for `input` and stores it.
///
/// Errors: model transport failure (`AppError::Llm`) and storage failure
/// (`AppError::Storage`). Quota and unusable model output degrade to canned
/// results and still get stored.
pub async fn generate_analysis(
    store: &dyn AnalysisStore,
    generator: &dyn TextGenerator,
    input: AnalysisInput,
) -> Result<AnalysisRow, AppError> {
    let prompt = build_analysis_prompt(&input.resume_text, &input.snapshot);
    let outcome = run_analysis(generator, &prompt).await?;

    let row = store
        .insert(NewAnalysis::new(input.user_id, outcome.analysis))
        .await?;

    info!(
        analysis_id = %row.id,
        user_id = %row.user_id,
        tier = ?outcome.tier,
        "stored analysis"
    );
    Ok(row)
}
