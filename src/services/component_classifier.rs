use crate::enums::risk_tier::RiskTier;
use crate::structs::classified_file::ClassifiedFile;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::file_change::FileChange;

pub const TAG_AUTH: &str = "auth";
pub const TAG_SECURITY: &str = "security";
pub const TAG_DATABASE: &str = "database";
pub const TAG_CONFIG: &str = "config";
pub const TAG_API: &str = "api";
pub const TAG_FRONTEND: &str = "frontend";
pub const TAG_BACKEND: &str = "backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Contains(&'static str),
    Extension(&'static str),
}

impl Marker {
    fn matches(&self, lowered_path: &str) -> bool {
        match self {
            Marker::Contains(needle) => lowered_path.contains(needle),
            Marker::Extension(ext) => lowered_path.ends_with(ext),
        }
    }
}

/// Functional-area rules tag what a file does; layer rules only say which
/// side of the stack it lives on and apply when no area rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Area,
    Layer,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub tag: &'static str,
    pub markers: &'static [Marker],
    pub risk: RiskTier,
    pub kind: RuleKind,
}

impl ClassificationRule {
    pub fn matches(&self, path: &str) -> bool {
        let lowered = path.to_ascii_lowercase();
        self.markers.iter().any(|m| m.matches(&lowered))
    }
}

pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        tag: TAG_AUTH,
        markers: &[Marker::Contains("auth"), Marker::Contains("login"), Marker::Contains("user")],
        risk: RiskTier::High,
        kind: RuleKind::Area,
    },
    ClassificationRule {
        tag: TAG_SECURITY,
        markers: &[Marker::Contains("security"), Marker::Contains("ssl"), Marker::Contains("crypto")],
        risk: RiskTier::High,
        kind: RuleKind::Area,
    },
    ClassificationRule {
        tag: TAG_DATABASE,
        markers: &[
            Marker::Extension(".sql"),
            Marker::Contains("migration"),
            Marker::Contains("models"),
            Marker::Contains("db"),
        ],
        risk: RiskTier::High,
        kind: RuleKind::Area,
    },
    ClassificationRule {
        tag: TAG_CONFIG,
        markers: &[
            Marker::Contains("config"),
            Marker::Extension(".env"),
            Marker::Extension(".yaml"),
            Marker::Extension(".json"),
        ],
        risk: RiskTier::High,
        kind: RuleKind::Area,
    },
    ClassificationRule {
        tag: TAG_API,
        markers: &[Marker::Contains("api"), Marker::Contains("endpoints"), Marker::Contains("routes")],
        risk: RiskTier::Medium,
        kind: RuleKind::Area,
    },
    ClassificationRule {
        tag: TAG_FRONTEND,
        markers: &[
            Marker::Extension(".js"),
            Marker::Extension(".ts"),
            Marker::Extension(".vue"),
            Marker::Extension(".html"),
            Marker::Extension(".css"),
        ],
        risk: RiskTier::Medium,
        kind: RuleKind::Layer,
    },
    ClassificationRule {
        tag: TAG_BACKEND,
        markers: &[
            Marker::Extension(".py"),
            Marker::Extension(".java"),
            Marker::Extension(".cpp"),
            Marker::Extension(".go"),
        ],
        risk: RiskTier::Medium,
        kind: RuleKind::Layer,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    pub medium_lines: usize,
    pub high_lines: usize,
}

impl From<&AnalysisConfig> for RiskThresholds {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            medium_lines: config.medium_risk_lines,
            high_lines: config.high_risk_lines,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::from(&AnalysisConfig::default())
    }
}

/// Tags a changed path with functional areas and a risk tier.
#[derive(Debug, Clone, Default)]
pub struct ComponentClassifier {
    thresholds: RiskThresholds,
}

impl ComponentClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, path: &str, line_delta: usize) -> (Vec<String>, RiskTier) {
        let area_rules: Vec<&ClassificationRule> = CLASSIFICATION_RULES
            .iter()
            .filter(|rule| rule.kind == RuleKind::Area && rule.matches(path))
            .collect();

        let matched = if area_rules.is_empty() {
            CLASSIFICATION_RULES
                .iter()
                .filter(|rule| rule.kind == RuleKind::Layer && rule.matches(path))
                .collect()
        } else {
            area_rules
        };

        let tag_tier = matched.iter().map(|rule| rule.risk).max().unwrap_or(RiskTier::Low);
        let tags = matched.iter().map(|rule| rule.tag.to_string()).collect();

        (tags, self.escalate(tag_tier, line_delta))
    }

    // Size only ever raises the tag-derived tier.
    fn escalate(&self, tier: RiskTier, line_delta: usize) -> RiskTier {
        if line_delta > self.thresholds.high_lines {
            RiskTier::High
        } else if line_delta >= self.thresholds.medium_lines && tier == RiskTier::Low {
            RiskTier::Medium
        } else {
            tier
        }
    }

    pub fn classify_file(&self, change: FileChange) -> ClassifiedFile {
        let (area_tags, risk_tier) = self.classify(&change.path, change.line_delta);
        ClassifiedFile {
            change,
            area_tags,
            risk_tier,
        }
    }

    pub fn classify_all(&self, changes: Vec<FileChange>) -> Vec<ClassifiedFile> {
        changes.into_iter().map(|change| self.classify_file(change)).collect()
    }
}
