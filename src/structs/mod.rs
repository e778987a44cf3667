pub mod ai;
pub mod change_reference;
pub mod classified_file;
pub mod cli;
pub mod config;
pub mod file_change;
pub mod gitlab;
pub mod impact_analysis;
pub mod test_plan;
pub mod test_scenario;
pub mod test_step;
pub mod validation_result;
