pub mod ollama_generate_request;
pub mod ollama_generate_response;
pub mod ollama_options;
pub mod ollama_tags_response;
