use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration_secs;
use crate::enums::model_error::ModelError;
use crate::structs::ai::ollama::ollama_generate_request::OllamaGenerateRequest;
use crate::structs::ai::ollama::ollama_generate_response::OllamaGenerateResponse;
use crate::structs::ai::ollama::ollama_options::OllamaOptions;
use crate::structs::ai::ollama::ollama_tags_response::OllamaTagsResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::model_runtime::ModelRuntime;

/// `ModelRuntime` backed by a local Ollama server.
#[derive(Clone)]
pub struct OllamaProvider {
    base_url: String,
    client: Client,
    model: String,
    timeout: Duration,
    ping_timeout: Duration,
}

impl OllamaProvider {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            base_url: config.host.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            timeout: timeout_duration_secs(config.timeout_secs),
            ping_timeout: timeout_duration_secs(config.ping_timeout_secs),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_request(&self, system_prompt: String, user_prompt: String, max_tokens: u32, temperature: f32) -> OllamaGenerateRequest {
        OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: user_prompt,
            system: system_prompt,
            stream: false,
            options: OllamaOptions {
                temperature,
                num_predict: max_tokens,
            },
        }
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ModelError {
        if error.is_timeout() {
            ModelError::Timeout(self.timeout.as_secs())
        } else {
            ModelError::Unreachable(format!("{} (is `ollama serve` running at {}?)", error, self.base_url))
        }
    }

    pub async fn installed_models(&self) -> Result<Vec<String>, ModelError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Status { status, body });
        }

        let tags: OllamaTagsResponse = response.json().await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

#[async_trait]
impl ModelRuntime for OllamaProvider {

    async fn generate(&self, system_prompt: String, user_prompt: String, max_tokens: u32, temperature: f32) -> Result<String, ModelError> {
        let url = format!("{}/api/generate", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompt, max_tokens, temperature);

        log::debug!("📦 Request model: {} ({} prompt chars)", request_body.model, request_body.prompt.len());

        let response = self.client
            .post(&url)
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Status { status, body });
        }

        let result: OllamaGenerateResponse = response.json().await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout(self.timeout.as_secs())
                } else {
                    ModelError::InvalidResponse(e.to_string())
                }
            })?;

        Ok(result.response.trim().to_string())
    }

    async fn ping(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);

        match self.client.get(&url).timeout(self.ping_timeout).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Model runtime ping failed: {}", e);
                false
            }
        }
    }
}
