//! Degradation policy: always yields a schema-valid analysis unless the
//! model could not be reached at all.
//!
//! Primary: generate → parse.
//!   parse fails          → UnusableOutput fallback
//!   generate → Quota     → Quota fallback
//!   generate → Transport → error to the caller
//! Anything that still is not schema-valid → Default fallback.

use tracing::{error, info, warn};

use crate::analysis::fallback::FallbackCause;
use crate::analysis::models::AnalysisResult;
use crate::analysis::parser::parse_analysis;
use crate::llm_client::{LlmError, TextGenerator};

/// Which tier produced the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback(FallbackCause),
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub analysis: AnalysisResult,
    pub tier: Tier,
}

impl Outcome {
    fn fallback(cause: FallbackCause) -> Self {
        Self {
            analysis: cause.analysis(),
            tier: Tier::Fallback(cause),
        }
    }
}

/// Runs one analysis request through the tiers.
///
/// Only `LlmError::Transport` escapes; quota and parse failures degrade.
pub async fn run_analysis(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<Outcome, LlmError> {
    let produced = match generator.generate(prompt).await {
        Ok(raw) => match parse_analysis(&raw) {
            Ok(analysis) => Some(Outcome {
                analysis,
                tier: Tier::Primary,
            }),
            Err(e) => {
                warn!(error = %e, "model output unusable; using generic fallback");
                Some(Outcome::fallback(FallbackCause::UnusableOutput))
            }
        },
        Err(LlmError::Quota(message)) => {
            warn!(%message, "model quota exhausted; using quota fallback");
            Some(Outcome::fallback(FallbackCause::Quota))
        }
        Err(e @ LlmError::Transport(_)) => {
            error!(error = %e, "model unreachable; no analysis produced");
            return Err(e);
        }
    };

    let outcome = finalize(produced);
    info!(tier = ?outcome.tier, score = outcome.analysis.score, "analysis produced");
    Ok(outcome)
}

/// Last safety net: anything absent or not schema-valid becomes the default.
fn finalize(produced: Option<Outcome>) -> Outcome {
    match produced {
        Some(outcome) if outcome.analysis.validate().is_ok() => outcome,
        _ => {
            warn!("no schema-valid analysis produced; using default fallback");
            Outcome::fallback(FallbackCause::Default)
        }
    }
}
