//! Canned analyses, one per degradation cause.
//!
//! Payloads differ by cause so a stored record shows why the model answer
//! was not used: quota pressure, unusable output, or the default safety net.

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// The model provider reported quota exhaustion.
    Quota,
    /// The model answered but the output could not be parsed or validated.
    UnusableOutput,
    /// Nothing schema-valid was produced by any other path.
    Default,
}

struct CannedAnalysis {
    cause: FallbackCause,
    skill_gaps: &'static [&'static str],
    suitable_role: &'static str,
    project_suggestions: [&'static str; 3],
    learning_roadmap: [&'static str; 5],
    score: u32,
}

static FALLBACKS: [CannedAnalysis; 3] = [
    CannedAnalysis {
        cause: FallbackCause::Quota,
        skill_gaps: &[
            "Advanced TypeScript",
            "System Design",
            "Cloud Architecture",
            "Testing",
        ],
        suitable_role: "Senior Full Stack Developer",
        project_suggestions: [
            "Build a scalable e-commerce platform with microservices",
            "Create a real-time collaboration tool",
            "Develop a comprehensive testing framework",
        ],
        learning_roadmap: [
            "Master advanced TypeScript patterns",
            "Study system design at scale",
            "Learn cloud architecture patterns",
            "Implement comprehensive testing strategies",
            "Practice technical leadership skills",
        ],
        score: 82,
    },
    CannedAnalysis {
        cause: FallbackCause::UnusableOutput,
        skill_gaps: &["Docker", "Kubernetes", "System Design", "GraphQL"],
        suitable_role: "Full Stack Developer",
        project_suggestions: [
            "Build a microservices architecture with Docker and Kubernetes",
            "Create a real-time chat application with WebSocket",
            "Develop a GraphQL API with authentication and authorization",
        ],
        learning_roadmap: [
            "Master containerization with Docker",
            "Learn Kubernetes for orchestration",
            "Study system design principles",
            "Build projects with GraphQL",
            "Practice coding interviews and system design",
        ],
        score: 78,
    },
    CannedAnalysis {
        cause: FallbackCause::Default,
        skill_gaps: &["Technical Skills", "Communication", "Project Management"],
        suitable_role: "Software Developer",
        project_suggestions: [
            "Build a personal portfolio website",
            "Create a full-stack application",
            "Contribute to open source projects",
        ],
        learning_roadmap: [
            "Strengthen core programming skills",
            "Learn modern frameworks and tools",
            "Practice system design",
            "Improve communication skills",
            "Build a professional network",
        ],
        score: 75,
    },
];

impl FallbackCause {
    fn canned(self) -> &'static CannedAnalysis {
        FALLBACKS
            .iter()
            .find(|canned| canned.cause == self)
            .unwrap_or(&FALLBACKS[FALLBACKS.len() - 1])
    }

    /// Builds the canned analysis for this cause.
    pub fn analysis(self) -> AnalysisResult {
        let canned = self.canned();
        AnalysisResult {
            skill_gaps: canned.skill_gaps.iter().map(|s| s.to_string()).collect(),
            suitable_role: canned.suitable_role.to_string(),
            project_suggestions: canned
                .project_suggestions
                .iter()
                .map(|s| s.to_string())
                .collect(),
            learning_roadmap: canned
                .learning_roadmap
                .iter()
                .map(|s| s.to_string())
                .collect(),
            score: canned.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FallbackCause; 3] = [
        FallbackCause::Quota,
        FallbackCause::UnusableOutput,
        FallbackCause::Default,
    ];

    #[test]
    fn test_table_entry_matches_its_cause() {
        for cause in ALL {
            assert_eq!(cause.canned().cause, cause);
        }
    }

    #[test]
    fn test_every_canned_analysis_is_schema_valid() {
        for cause in ALL {
            assert!(cause.analysis().validate().is_ok(), "{cause:?} is invalid");
        }
    }

    #[test]
    fn test_quota_payload() {
        let analysis = FallbackCause::Quota.analysis();
        assert_eq!(analysis.suitable_role, "Senior Full Stack Developer");
        assert_eq!(analysis.score, 82);
    }

    #[test]
    fn test_unusable_output_payload() {
        let analysis = FallbackCause::UnusableOutput.analysis();
        assert_eq!(analysis.suitable_role, "Full Stack Developer");
        assert_eq!(analysis.score, 78);
    }

    #[test]
    fn test_default_payload() {
        let analysis = FallbackCause::Default.analysis();
        assert_eq!(analysis.suitable_role, "Software Developer");
        assert_eq!(analysis.score, 75);
    }

    #[test]
    fn test_payloads_are_distinguishable() {
        let quota = FallbackCause::Quota.analysis();
        let unusable = FallbackCause::UnusableOutput.analysis();
        let default = FallbackCause::Default.analysis();
        assert_ne!(quota, unusable);
        assert_ne!(unusable, default);
        assert_ne!(quota, default);
    }
}
