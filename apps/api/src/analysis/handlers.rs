//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::analysis::generator::{generate_analysis, AnalysisInput, AnalyzeRequest};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::state::AppState;

const STORAGE_HINT: &str =
    "Make sure the 'analyses' table exists and DATABASE_URL points at the right database";

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct StorageHealthResponse {
    pub success: bool,
    pub message: String,
    pub stored_analyses: i64,
    pub has_github_token: bool,
}

/// POST /api/v1/analyze
///
/// Full pipeline: prompt → model (with fallbacks) → store. Returns the stored record.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRow>, AppError> {
    let input = AnalysisInput::try_from(request)?;
    let row = generate_analysis(state.store.as_ref(), state.generator.as_ref(), input).await?;
    Ok(Json(row))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    let row = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/analyses?user_id=<id>
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    let rows = state.store.list_for_user(&params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/storage/health
///
/// Failures bypass the `AppError` envelope and answer with
/// `{success: false, error, hint}`.
pub async fn handle_storage_health(State(state): State<AppState>) -> Response {
    match state.store.count().await {
        Ok(stored_analyses) => Json(StorageHealthResponse {
            success: true,
            message: "Database connection successful".to_string(),
            stored_analyses,
            has_github_token: state.github.has_token(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Storage health check failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "hint": STORAGE_HINT,
                })),
            )
                .into_response()
        }
    }
}
