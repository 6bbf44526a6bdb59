// Career analysis: prompt → model → parse → fallbacks → storage.
// All model calls go through llm_client::TextGenerator.

pub mod degradation;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
