use std::sync::Arc;

use crate::config::Config;
use crate::github::GithubClient;
use crate::llm_client::TextGenerator;
use crate::storage::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every client is built once in `main` and handed in here; components never
/// construct their own.
#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
    /// Model backend. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Analysis persistence. Default: `PgAnalysisStore`.
    pub store: Arc<dyn AnalysisStore>,
    pub config: Config,
}
