use serde::{Deserialize, Serialize};
use crate::enums::risk_tier::RiskTier;
use crate::structs::test_step::TestStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScenario {
    pub title: String,
    pub steps: Vec<TestStep>,
    pub risk_level: RiskTier,
    #[serde(default)]
    pub area_tags: Vec<String>,
}

impl TestScenario {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.area_tags.iter().any(|t| t == tag)
    }
}
