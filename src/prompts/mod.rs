pub mod impact_analysis_prompt;
pub mod scenario_generation_prompt;
