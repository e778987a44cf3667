use serde::{Deserialize, Serialize};
use crate::structs::ai::ollama::ollama_options::OllamaOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    pub model: String,

    pub prompt: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub system: String,

    pub stream: bool,

    pub options: OllamaOptions,
}
