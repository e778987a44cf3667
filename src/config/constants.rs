use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".mr-test-planner";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5-coder:1.5b";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PING_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_GITLAB_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_DIFF_CHAR_LIMIT: usize = 2000;
pub const DEFAULT_MAX_FILES: usize = 10;
pub const DEFAULT_MEDIUM_RISK_LINES: usize = 50;
pub const DEFAULT_HIGH_RISK_LINES: usize = 100;

pub const MIN_SCENARIOS: usize = 2;
pub const MAX_SCENARIOS: usize = 5;

pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";
pub const GITLAB_SSL_VERIFY_ENV: &str = "GITLAB_SSL_VERIFY";
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";
pub const OLLAMA_MODEL_ENV: &str = "OLLAMA_MODEL";
pub const AI_MAX_TOKENS_ENV: &str = "AI_MAX_TOKENS";
pub const AI_TEMPERATURE_ENV: &str = "AI_TEMPERATURE";
pub const AI_TIMEOUT_SECS_ENV: &str = "AI_TIMEOUT_SECS";
pub const AI_PING_TIMEOUT_SECS_ENV: &str = "AI_PING_TIMEOUT_SECS";
pub const DIFF_CHARS_ENV: &str = "MR_PLAN_DIFF_CHARS";
pub const MAX_FILES_ENV: &str = "MR_PLAN_MAX_FILES";
pub const MEDIUM_RISK_LINES_ENV: &str = "MR_PLAN_MEDIUM_RISK_LINES";
pub const HIGH_RISK_LINES_ENV: &str = "MR_PLAN_HIGH_RISK_LINES";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
