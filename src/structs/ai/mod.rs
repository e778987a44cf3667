pub mod model_impact_analysis;
pub mod model_scenario;
pub mod ollama;
