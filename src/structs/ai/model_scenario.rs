use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelTestStep {
    pub action: String,
    pub expected_result: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelScenario {
    pub title: String,
    pub steps: Vec<ModelTestStep>,
    pub risk_level: String,
}
