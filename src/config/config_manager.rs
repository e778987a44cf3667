use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use crate::config::constants::{
    AI_MAX_TOKENS_ENV, AI_PING_TIMEOUT_SECS_ENV, AI_TEMPERATURE_ENV, AI_TIMEOUT_SECS_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    DIFF_CHARS_ENV, GITLAB_SSL_VERIFY_ENV, HIGH_RISK_LINES_ENV, MAX_FILES_ENV, MEDIUM_RISK_LINES_ENV,
    OLLAMA_HOST_ENV, OLLAMA_MODEL_ENV,
};
use crate::errors::{PlanError, PlanResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config file (if present) and layers environment overrides on top.
    pub fn load() -> PlanResult<Config> {
        let config = Self::load_from(&Self::default_path())?;
        Self::apply_env_overrides(config, |key| std::env::var(key).ok())
    }

    pub fn load_from(path: &Path) -> PlanResult<Config> {
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        log::debug!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> PlanResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(OLLAMA_HOST_ENV) {
            config.ai.host = host.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(OLLAMA_MODEL_ENV) {
            config.ai.model = model;
        }
        if let Some(value) = lookup(AI_MAX_TOKENS_ENV) {
            config.ai.max_tokens = Self::parse_env(AI_MAX_TOKENS_ENV, &value)?;
        }
        if let Some(value) = lookup(AI_TEMPERATURE_ENV) {
            config.ai.temperature = Self::parse_env(AI_TEMPERATURE_ENV, &value)?;
        }
        if let Some(value) = lookup(AI_TIMEOUT_SECS_ENV) {
            config.ai.timeout_secs = Self::parse_env(AI_TIMEOUT_SECS_ENV, &value)?;
        }
        if let Some(value) = lookup(AI_PING_TIMEOUT_SECS_ENV) {
            config.ai.ping_timeout_secs = Self::parse_env(AI_PING_TIMEOUT_SECS_ENV, &value)?;
        }
        if let Some(value) = lookup(DIFF_CHARS_ENV) {
            config.analysis.diff_char_limit = Self::parse_env(DIFF_CHARS_ENV, &value)?;
        }
        if let Some(value) = lookup(MAX_FILES_ENV) {
            config.analysis.max_files = Self::parse_env(MAX_FILES_ENV, &value)?;
        }
        if let Some(value) = lookup(MEDIUM_RISK_LINES_ENV) {
            config.analysis.medium_risk_lines = Self::parse_env(MEDIUM_RISK_LINES_ENV, &value)?;
        }
        if let Some(value) = lookup(HIGH_RISK_LINES_ENV) {
            config.analysis.high_risk_lines = Self::parse_env(HIGH_RISK_LINES_ENV, &value)?;
        }
        if let Some(value) = lookup(GITLAB_SSL_VERIFY_ENV) {
            config.gitlab.ssl_verify = !value.trim().eq_ignore_ascii_case("false");
        }

        Ok(config)
    }

    fn parse_env<T: FromStr>(key: &str, value: &str) -> PlanResult<T> {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| PlanError::config_error(key, &format!("cannot parse '{}'", value)))
    }

    pub fn create_sample_config(path: &Path) -> PlanResult<()> {
        let sample_config = r#"# MR Test Planner Configuration
#
# Every value can also be overridden from the environment
# (OLLAMA_HOST, OLLAMA_MODEL, AI_MAX_TOKENS, AI_TEMPERATURE, AI_TIMEOUT_SECS,
#  AI_PING_TIMEOUT_SECS,
#  MR_PLAN_DIFF_CHARS, MR_PLAN_MAX_FILES, MR_PLAN_MEDIUM_RISK_LINES,
#  MR_PLAN_HIGH_RISK_LINES, GITLAB_SSL_VERIFY).

# Local model runtime (Ollama)
[ai]
host = "http://localhost:11434"
model = "qwen2.5-coder:1.5b"
max_tokens = 2048
temperature = 0.3
timeout_secs = 120
ping_timeout_secs = 5

# Change analysis limits and risk escalation thresholds
[analysis]
diff_char_limit = 2000
max_files = 10
medium_risk_lines = 50
high_risk_lines = 100

# GitLab access. The token itself is read from the named environment variable.
[gitlab]
token_env = "GITLAB_TOKEN"
ssl_verify = true
timeout_secs = 30
"#;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        match url::Url::parse(&config.ai.host) {
            Ok(url) if url.host_str().is_some() => {}
            _ => result.error(format!("ai.host is not a valid URL: {}", config.ai.host)),
        }

        if config.ai.model.trim().is_empty() {
            result.error("ai.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            result.error(format!("ai.temperature must be within [0, 2], got {}", config.ai.temperature));
        }

        if config.ai.timeout_secs == 0 {
            result.error("ai.timeout_secs must be greater than zero".to_string());
        }

        if config.ai.ping_timeout_secs == 0 {
            result.error("ai.ping_timeout_secs must be greater than zero".to_string());
        }

        if config.analysis.max_files == 0 {
            result.error("analysis.max_files must be greater than zero".to_string());
        }

        if config.analysis.diff_char_limit == 0 {
            result.error("analysis.diff_char_limit must be greater than zero".to_string());
        }

        if config.analysis.medium_risk_lines > config.analysis.high_risk_lines {
            result.error(format!(
                "analysis.medium_risk_lines ({}) exceeds analysis.high_risk_lines ({})",
                config.analysis.medium_risk_lines, config.analysis.high_risk_lines
            ));
        }

        if !config.gitlab.ssl_verify {
            result.warning("gitlab.ssl_verify is disabled; certificates will not be checked".to_string());
        }

        if std::env::var(&config.gitlab.token_env).is_err() {
            result.warning(format!(
                "{} is not set; only public projects will be readable",
                config.gitlab.token_env
            ));
        }

        result
    }

}
