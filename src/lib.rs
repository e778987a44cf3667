//! Risk-ranked UI test plans for GitLab merge requests, drafted by a local
//! Ollama model with a deterministic heuristic fallback.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
