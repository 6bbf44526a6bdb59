use serde::{Deserialize, Serialize};

pub const MIN_SKILL_GAPS: usize = 3;
pub const MAX_SKILL_GAPS: usize = 5;
pub const PROJECT_SUGGESTIONS: usize = 3;
pub const ROADMAP_STEPS: usize = 5;
pub const MAX_SCORE: u32 = 100;

/// The career analysis every tier must produce.
///
/// Shape: 3–5 skill gaps, one role, exactly 3 projects, exactly 5 roadmap
/// steps, score in 0..=100. Use [`AnalysisResult::validate`] before trusting
/// a value that did not come from the fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skill_gaps: Vec<String>,
    pub suitable_role: String,
    pub project_suggestions: Vec<String>,
    pub learning_roadmap: Vec<String>,
    pub score: u32,
}

impl AnalysisResult {
    /// Checks counts, ranges, and that no entry is blank.
    pub fn validate(&self) -> Result<(), String> {
        let gaps = self.skill_gaps.len();
        if !(MIN_SKILL_GAPS..=MAX_SKILL_GAPS).contains(&gaps) {
            return Err(format!(
                "skill_gaps must have {MIN_SKILL_GAPS}-{MAX_SKILL_GAPS} entries, got {gaps}"
            ));
        }
        if self.suitable_role.trim().is_empty() {
            return Err("suitable_role must not be empty".to_string());
        }
        if self.project_suggestions.len() != PROJECT_SUGGESTIONS {
            return Err(format!(
                "project_suggestions must have exactly {PROJECT_SUGGESTIONS} entries, got {}",
                self.project_suggestions.len()
            ));
        }
        if self.learning_roadmap.len() != ROADMAP_STEPS {
            return Err(format!(
                "learning_roadmap must have exactly {ROADMAP_STEPS} entries, got {}",
                self.learning_roadmap.len()
            ));
        }
        if self.score > MAX_SCORE {
            return Err(format!("score must be within 0-{MAX_SCORE}, got {}", self.score));
        }

        let lists = [
            ("skill_gaps", &self.skill_gaps),
            ("project_suggestions", &self.project_suggestions),
            ("learning_roadmap", &self.learning_roadmap),
        ];
        for (field, items) in lists {
            if items.iter().any(|item| item.trim().is_empty()) {
                return Err(format!("{field} contains a blank entry"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn valid() -> AnalysisResult {
        AnalysisResult {
            skill_gaps: strings(&["Docker", "Kubernetes", "GraphQL"]),
            suitable_role: "Backend Engineer".to_string(),
            project_suggestions: strings(&["a", "b", "c"]),
            learning_roadmap: strings(&["1", "2", "3", "4", "5"]),
            score: 64,
        }
    }

    #[test]
    fn test_valid_result_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_five_skill_gaps_is_allowed() {
        let mut r = valid();
        r.skill_gaps = strings(&["a", "b", "c", "d", "e"]);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_six_skill_gaps_is_rejected() {
        let mut r = valid();
        r.skill_gaps = strings(&["a", "b", "c", "d", "e", "f"]);
        assert!(r.validate().unwrap_err().contains("skill_gaps"));
    }

    #[test]
    fn test_two_projects_is_rejected() {
        let mut r = valid();
        r.project_suggestions.pop();
        assert!(r.validate().unwrap_err().contains("project_suggestions"));
    }

    #[test]
    fn test_four_roadmap_steps_is_rejected() {
        let mut r = valid();
        r.learning_roadmap.pop();
        assert!(r.validate().unwrap_err().contains("learning_roadmap"));
    }

    #[test]
    fn test_score_above_100_is_rejected() {
        let mut r = valid();
        r.score = 101;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_blank_role_is_rejected() {
        let mut r = valid();
        r.suitable_role = "   ".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_blank_list_entry_is_rejected() {
        let mut r = valid();
        r.learning_roadmap[2] = String::new();
        assert!(r.validate().unwrap_err().contains("blank"));
    }
}
