// Prompt text for career analysis.
// The rendered prompt is a pure function of its inputs: same résumé and
// snapshot always give the same bytes.

use crate::github::types::ProfileSnapshot;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Repositories listed in the prompt, in source order.
pub const MAX_PROMPT_REPOSITORIES: usize = 5;

pub const COACH_PREAMBLE: &str = "You are an AI career coach. \
Analyze the following user data and provide detailed career guidance.";

/// Literal output contract shown to the model.
pub const OUTPUT_SCHEMA: &str = r#"{
  "skill_gaps": ["skill1", "skill2", "skill3"],
  "suitable_role": "Best matching role title",
  "project_suggestions": ["project1", "project2", "project3"],
  "learning_roadmap": ["step1", "step2", "step3", "step4", "step5"],
  "score": 85
}"#;

pub const OUTPUT_RULES: &str = "\
- skill_gaps: array of 3 to 5 strings, key skills missing for target roles
- suitable_role: one non-empty string, the single best role match (e.g. \"Full Stack Developer\", \"Backend Engineer\", \"ML Engineer\")
- project_suggestions: array of exactly 3 strings, specific project ideas to build
- learning_roadmap: array of exactly 5 strings, actionable learning steps in order
- score: integer from 0 to 100, overall profile score";

/// Renders the analysis request for one résumé and profile snapshot.
pub fn build_analysis_prompt(resume_text: &str, snapshot: &ProfileSnapshot) -> String {
    let profile_json = serde_json::to_string(&snapshot.profile).unwrap_or_default();
    let languages = join_or_none(snapshot.languages.iter().map(String::as_str));
    let topics = join_or_none(snapshot.topics.iter().map(String::as_str));
    let repositories = snapshot
        .repositories
        .iter()
        .take(MAX_PROMPT_REPOSITORIES)
        .map(|repo| {
            format!(
                "{} ({})",
                repo.name,
                repo.language.as_deref().unwrap_or("unspecified")
            )
        })
        .collect::<Vec<_>>();
    let repositories = join_or_none(repositories.iter().map(String::as_str));

    format!(
        "{COACH_PREAMBLE}\n\n\
         RESUME DATA:\n{resume_text}\n\n\
         GITHUB DATA:\n\
         Profile: {profile_json}\n\
         Languages: {languages}\n\
         Topics: {topics}\n\
         Recent Repositories: {repositories}\n\n\
         Return a JSON object with this EXACT structure:\n{OUTPUT_SCHEMA}\n\n\
         Field rules:\n{OUTPUT_RULES}\n\n\
         Focus on practical, actionable advice. Consider current market trends and in-demand skills.\n\
         {JSON_ONLY_INSTRUCTION}\n"
    )
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}
