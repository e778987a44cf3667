use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("Model runtime unreachable: {0}")]
    Unreachable(String),
    #[error("Model runtime returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Model call timed out after {0}s")]
    Timeout(u64),
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}
