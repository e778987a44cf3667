use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAnalysis {
    pub summary: String,
    pub affected_areas: Vec<String>,
    pub user_impact: String,
    pub risk_areas: Vec<String>,
}
