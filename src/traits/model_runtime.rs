use async_trait::async_trait;
use crate::enums::model_error::ModelError;

/// Text generation backend used for impact analysis and scenarios.
#[async_trait]
pub trait ModelRuntime: Send + Sync {

    async fn generate(&self, system_prompt: String, user_prompt: String, max_tokens: u32, temperature: f32)
        -> Result<String, ModelError>;

    /// Never fails; any transport problem reads as "not available".
    async fn ping(&self) -> bool;
}
