use crate::config::constants::{
    DEFAULT_DIFF_CHAR_LIMIT, DEFAULT_GITLAB_TIMEOUT_SECS, DEFAULT_HIGH_RISK_LINES, DEFAULT_MAX_FILES,
    DEFAULT_MAX_TOKENS, DEFAULT_MEDIUM_RISK_LINES, DEFAULT_MODEL_TIMEOUT_SECS, DEFAULT_OLLAMA_HOST, DEFAULT_PING_TIMEOUT_SECS,
    DEFAULT_OLLAMA_MODEL, DEFAULT_TEMPERATURE, GITLAB_TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_OLLAMA_HOST.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_OLLAMA_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_model_timeout_secs() -> u64 {
        DEFAULT_MODEL_TIMEOUT_SECS
    }

    pub fn default_ping_timeout_secs() -> u64 {
        DEFAULT_PING_TIMEOUT_SECS
    }

    pub fn default_diff_char_limit() -> usize {
        DEFAULT_DIFF_CHAR_LIMIT
    }

    pub fn default_max_files() -> usize {
        DEFAULT_MAX_FILES
    }

    pub fn default_medium_risk_lines() -> usize {
        DEFAULT_MEDIUM_RISK_LINES
    }

    pub fn default_high_risk_lines() -> usize {
        DEFAULT_HIGH_RISK_LINES
    }

    pub fn default_token_env() -> String {
        GITLAB_TOKEN_ENV.to_string()
    }

    pub fn default_ssl_verify() -> bool {
        true
    }

    pub fn default_gitlab_timeout_secs() -> u64 {
        DEFAULT_GITLAB_TIMEOUT_SECS
    }
}
