use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::github::aggregator::aggregate_profile;
use crate::github::types::ProfileSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GithubQuery {
    pub username: Option<String>,
}

/// GET /api/v1/github?username=<handle>
pub async fn handle_get_github_profile(
    State(state): State<AppState>,
    Query(params): Query<GithubQuery>,
) -> Result<Json<ProfileSnapshot>, AppError> {
    let handle = params
        .username
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::Validation("Username is required".to_string()))?;

    let snapshot = aggregate_profile(
        &state.github,
        handle,
        state.config.language_fetch_concurrency,
    )
    .await?;

    Ok(Json(snapshot))
}
