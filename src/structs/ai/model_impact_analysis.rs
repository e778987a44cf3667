use serde::Deserialize;

// Wire shape requested from the model; every key is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelImpactAnalysis {
    pub summary: String,
    pub affected_areas: Vec<String>,
    pub user_impact: String,
    pub risk_areas: Vec<String>,
}
