use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_diff_char_limit")]
    pub diff_char_limit: usize,

    #[serde(default = "ConfigHelper::default_max_files")]
    pub max_files: usize,

    #[serde(default = "ConfigHelper::default_medium_risk_lines")]
    pub medium_risk_lines: usize,

    #[serde(default = "ConfigHelper::default_high_risk_lines")]
    pub high_risk_lines: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            diff_char_limit: ConfigHelper::default_diff_char_limit(),
            max_files: ConfigHelper::default_max_files(),
            medium_risk_lines: ConfigHelper::default_medium_risk_lines(),
            high_risk_lines: ConfigHelper::default_high_risk_lines(),
        }
    }
}
