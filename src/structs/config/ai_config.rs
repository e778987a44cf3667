use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_model_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_ping_timeout_secs")]
    pub ping_timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            timeout_secs: ConfigHelper::default_model_timeout_secs(),
            ping_timeout_secs: ConfigHelper::default_ping_timeout_secs(),
        }
    }
}
