use serde::{Deserialize, Serialize};
use crate::structs::change_reference::ChangeReference;
use crate::structs::impact_analysis::ImpactAnalysis;
use crate::structs::test_scenario::TestScenario;

/// Final output of one planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPlan {
    pub mr_title: String,
    pub change_reference: ChangeReference,
    pub impact_analysis: ImpactAnalysis,
    pub overall_summary: String,
    pub scenarios: Vec<TestScenario>,
    pub ai_assisted: bool,
}
