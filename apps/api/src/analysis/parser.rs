//! Response parsing: pulls the analysis JSON out of free-form model text.
//!
//! The span runs from the first `{` to the last `}`. This tolerates prose or
//! markdown fences around the object, but not two separate objects or prose
//! containing braces; both of those end up as `SchemaViolation`.

use thiserror::Error;

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no JSON object found in model response")]
    NoJsonFound,

    #[error("model response violates the analysis schema: {0}")]
    SchemaViolation(String),
}

/// Returns the greedy `{ ... }` span, if any.
pub fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Parses and validates an [`AnalysisResult`]. There is no partial success.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, ParseError> {
    let span = extract_json_span(raw).ok_or(ParseError::NoJsonFound)?;

    let value: serde_json::Value = serde_json::from_str(span)
        .map_err(|e| ParseError::SchemaViolation(format!("invalid JSON: {e}")))?;

    let analysis: AnalysisResult = serde_json::from_value(value)
        .map_err(|e| ParseError::SchemaViolation(e.to_string()))?;

    analysis.validate().map_err(ParseError::SchemaViolation)?;
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "skill_gaps": ["Docker", "Kubernetes", "System Design"],
        "suitable_role": "Backend Engineer",
        "project_suggestions": ["Build a queue", "Write a cache", "Ship a CLI"],
        "learning_roadmap": ["one", "two", "three", "four", "five"],
        "score": 71
    }"#;

    #[test]
    fn test_parses_bare_object() {
        let result = parse_analysis(VALID).unwrap();
        assert_eq!(result.suitable_role, "Backend Engineer");
        assert_eq!(result.skill_gaps.len(), 3);
        assert_eq!(result.project_suggestions.len(), 3);
        assert_eq!(result.learning_roadmap.len(), 5);
        assert_eq!(result.score, 71);
    }

    #[test]
    fn test_tolerates_prose_and_markdown_fences() {
        let raw = format!("Here is your analysis:\n```json\n{VALID}\n```\nGood luck!");
        assert!(parse_analysis(&raw).is_ok());
    }

    #[test]
    fn test_ignores_extra_fields() {
        let raw = VALID.replacen('{', r#"{"confidence": "high","#, 1);
        assert!(parse_analysis(&raw).is_ok());
    }

    #[test]
    fn test_no_braces_is_no_json_found() {
        assert_eq!(
            parse_analysis("I'm sorry, I can't help with that."),
            Err(ParseError::NoJsonFound)
        );
    }

    #[test]
    fn test_reversed_braces_is_no_json_found() {
        assert_eq!(parse_analysis("} nothing here {"), Err(ParseError::NoJsonFound));
    }

    #[test]
    fn test_empty_text_is_no_json_found() {
        assert_eq!(parse_analysis(""), Err(ParseError::NoJsonFound));
    }

    #[test]
    fn test_string_score_is_schema_violation() {
        let raw = VALID.replace("71", "\"high\"");
        assert!(matches!(
            parse_analysis(&raw),
            Err(ParseError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_short_arrays_are_schema_violation() {
        let raw = "Sure! Here is the JSON: {\"skill_gaps\":[\"Docker\"],\"suitable_role\":\"X\",\"project_suggestions\":[\"a\",\"b\"],\"learning_roadmap\":[\"1\"],\"score\":50}";
        assert!(matches!(
            parse_analysis(raw),
            Err(ParseError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_missing_field_is_schema_violation() {
        let raw = r#"{"skill_gaps": ["a", "b", "c"], "score": 10}"#;
        assert!(matches!(
            parse_analysis(raw),
            Err(ParseError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_two_objects_span_is_schema_violation() {
        let raw = format!("{VALID} and also {{\"note\": 1}}");
        assert!(matches!(
            parse_analysis(&raw),
            Err(ParseError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_negative_score_is_schema_violation() {
        let raw = VALID.replace("71", "-3");
        assert!(matches!(
            parse_analysis(&raw),
            Err(ParseError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_score_out_of_range_is_schema_violation() {
        let raw = VALID.replace("71", "140");
        assert!(matches!(
            parse_analysis(&raw),
            Err(ParseError::SchemaViolation(ref m)) if m.contains("score")
        ));
    }

    #[test]
    fn test_extract_json_span_is_greedy() {
        assert_eq!(extract_json_span("a {x} b {y} c"), Some("{x} b {y}"));
    }
}
