use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GitLabConfig {
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_ssl_verify")]
    pub ssl_verify: bool,

    #[serde(default = "ConfigHelper::default_gitlab_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            token_env: ConfigHelper::default_token_env(),
            ssl_verify: ConfigHelper::default_ssl_verify(),
            timeout_secs: ConfigHelper::default_gitlab_timeout_secs(),
        }
    }
}
