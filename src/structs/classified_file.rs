use serde::{Deserialize, Serialize};
use crate::enums::risk_tier::RiskTier;
use crate::structs::file_change::FileChange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFile {
    #[serde(flatten)]
    pub change: FileChange,
    pub area_tags: Vec<String>,
    pub risk_tier: RiskTier,
}

impl ClassifiedFile {
    pub fn path(&self) -> &str {
        &self.change.path
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.area_tags.iter().any(|t| t == tag)
    }
}
