pub mod change_reference_resolver;
pub mod component_classifier;
pub mod heuristic_analyzer;
pub mod model_orchestrator;
pub mod model_providers;
pub mod response_sanitizer;
pub mod source_control;
pub mod test_plan_assembler;
pub mod test_plan_builder;
