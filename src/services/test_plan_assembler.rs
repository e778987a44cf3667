use crate::config::constants::{MAX_SCENARIOS, MIN_SCENARIOS};
use crate::enums::model_outcome::ModelOutcome;
use crate::services::heuristic_analyzer::HeuristicAnalyzer;
use crate::services::model_orchestrator::ModelOrchestrator;
use crate::structs::change_reference::ChangeReference;
use crate::structs::classified_file::ClassifiedFile;
use crate::structs::impact_analysis::ImpactAnalysis;
use crate::structs::test_plan::TestPlan;
use crate::structs::test_scenario::TestScenario;

/// Combines model and heuristic results into a plan of 2 to 5 scenarios.
pub struct TestPlanAssembler<'a> {
    orchestrator: &'a ModelOrchestrator,
    heuristics: &'a HeuristicAnalyzer,
    model_available: bool,
}

impl<'a> TestPlanAssembler<'a> {
    pub fn new(orchestrator: &'a ModelOrchestrator, heuristics: &'a HeuristicAnalyzer) -> Self {
        Self {
            orchestrator,
            heuristics,
            model_available: true,
        }
    }

    /// When false, both model calls are skipped and the heuristic path is used.
    pub fn model_available(mut self, available: bool) -> Self {
        self.model_available = available;
        self
    }

    pub async fn assemble(&self, reference: ChangeReference, title: String, files: &[ClassifiedFile]) -> TestPlan {
        let (impact_analysis, analysis_from_model) = match self.analyze(files, &title).await {
            ModelOutcome::Success(analysis) => (analysis, true),
            ModelOutcome::Unavailable(_) => {
                log::info!("📋 Using heuristic impact analysis");
                (self.heuristics.summarize(files), false)
            }
        };

        let (scenarios, scenarios_from_model) = match self.scenarios(&impact_analysis, files, &title).await {
            ModelOutcome::Success(scenarios) => (tag_model_scenarios(scenarios, &impact_analysis), true),
            ModelOutcome::Unavailable(_) => {
                log::info!("📋 Using heuristic test scenarios");
                (self.heuristics.scenarios_for(files), false)
            }
        };

        let scenarios = clamp_scenarios(scenarios, files, self.heuristics);

        TestPlan {
            overall_summary: overall_summary(files.len(), &impact_analysis),
            mr_title: title,
            change_reference: reference,
            impact_analysis,
            scenarios,
            ai_assisted: analysis_from_model || scenarios_from_model,
        }
    }

    async fn analyze(&self, files: &[ClassifiedFile], title: &str) -> ModelOutcome<ImpactAnalysis> {
        if !self.model_available {
            return ModelOutcome::Unavailable("model runtime not reachable".to_string());
        }
        self.orchestrator.analyze(files, title).await
    }

    async fn scenarios(&self, analysis: &ImpactAnalysis, files: &[ClassifiedFile], title: &str) -> ModelOutcome<Vec<TestScenario>> {
        if !self.model_available {
            return ModelOutcome::Unavailable("model runtime not reachable".to_string());
        }
        self.orchestrator.generate_scenarios(analysis, files, title).await
    }
}

/// Truncates to the maximum plan size, then pads with heuristic fillers whose
/// titles are not already present.
pub fn clamp_scenarios(mut scenarios: Vec<TestScenario>, files: &[ClassifiedFile], heuristics: &HeuristicAnalyzer) -> Vec<TestScenario> {
    scenarios.truncate(MAX_SCENARIOS);

    for filler in heuristics.filler_scenarios(files) {
        if scenarios.len() >= MIN_SCENARIOS {
            break;
        }
        if scenarios.iter().all(|s| s.title != filler.title) {
            scenarios.push(filler);
        }
    }

    scenarios
}

fn tag_model_scenarios(scenarios: Vec<TestScenario>, analysis: &ImpactAnalysis) -> Vec<TestScenario> {
    scenarios
        .into_iter()
        .map(|mut scenario| {
            let haystack = std::iter::once(scenario.title.as_str())
                .chain(scenario.steps.iter().map(|s| s.action.as_str()))
                .collect::<Vec<_>>()
                .join("\n")
                .to_lowercase();

            scenario.area_tags = analysis
                .affected_areas
                .iter()
                .filter(|area| haystack.contains(&area.to_lowercase()))
                .cloned()
                .collect();
            scenario
        })
        .collect()
}

fn overall_summary(file_count: usize, analysis: &ImpactAnalysis) -> String {
    let scope = if analysis.affected_areas.is_empty() {
        String::new()
    } else {
        format!(" affecting {}", analysis.affected_areas.join(", "))
    };

    format!(
        "Test plan for {} changed file(s){}. Focus on end-to-end verification of user-facing workflows.",
        file_count, scope
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use async_trait::async_trait;
    use mockall::mock;
    use crate::enums::change_type::ChangeType;
    use crate::enums::model_error::ModelError;
    use crate::enums::risk_tier::RiskTier;
    use crate::services::component_classifier::ComponentClassifier;
    use crate::services::heuristic_analyzer::{EDGE_CASES_TITLE, GENERAL_REGRESSION_TITLE};
    use crate::structs::config::ai_config::AiConfig;
    use crate::structs::config::analysis_config::AnalysisConfig;
    use crate::structs::file_change::FileChange;
    use crate::structs::test_step::TestStep;
    use crate::traits::model_runtime::ModelRuntime;

    mock! {
        pub Runtime {}

        #[async_trait]
        impl ModelRuntime for Runtime {
            async fn generate(&self, system_prompt: String, user_prompt: String, max_tokens: u32, temperature: f32)
                -> Result<String, ModelError>;
            async fn ping(&self) -> bool;
        }
    }

    fn reference() -> ChangeReference {
        ChangeReference {
            instance_root: "https://gitlab.example.com".to_string(),
            project_path: "group/proj".to_string(),
            change_number: 42,
        }
    }

    fn login_and_readme() -> Vec<ClassifiedFile> {
        let classifier = ComponentClassifier::default();
        vec![
            classifier.classify_file(FileChange::new("src/auth/login.py", ChangeType::Modified, "").with_line_delta(30)),
            classifier.classify_file(FileChange::new("README.md", ChangeType::Modified, "").with_line_delta(5)),
        ]
    }

    fn scenario(title: &str) -> TestScenario {
        TestScenario {
            title: title.to_string(),
            steps: vec![TestStep::new("Open the login page", "It loads")],
            risk_level: RiskTier::Low,
            area_tags: Vec::new(),
        }
    }

    fn orchestrator(runtime: MockRuntime) -> ModelOrchestrator {
        ModelOrchestrator::new(Arc::new(runtime), AiConfig::default(), AnalysisConfig::default())
    }

    #[test]
    fn clamp_pads_empty_and_single() {
        let heuristics = HeuristicAnalyzer::new();
        let files = login_and_readme();

        let padded = clamp_scenarios(Vec::new(), &files, &heuristics);
        let titles: Vec<&str> = padded.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec![GENERAL_REGRESSION_TITLE, EDGE_CASES_TITLE]);

        let padded = clamp_scenarios(vec![scenario("Only one")], &files, &heuristics);
        assert_eq!(padded.len(), 2);
        assert_eq!(padded[1].title, GENERAL_REGRESSION_TITLE);
    }

    #[test]
    fn clamp_skips_fillers_already_present() {
        let padded = clamp_scenarios(vec![scenario(GENERAL_REGRESSION_TITLE)], &[], &HeuristicAnalyzer::new());
        assert_eq!(padded.len(), 2);
        assert_eq!(padded[1].title, EDGE_CASES_TITLE);
    }

    #[test]
    fn clamp_keeps_in_range_and_truncates_extras() {
        let heuristics = HeuristicAnalyzer::new();
        let three: Vec<TestScenario> = (1..=3).map(|i| scenario(&format!("S{}", i))).collect();
        assert_eq!(clamp_scenarios(three.clone(), &[], &heuristics), three);

        let seven: Vec<TestScenario> = (1..=7).map(|i| scenario(&format!("S{}", i))).collect();
        let clamped = clamp_scenarios(seven, &[], &heuristics);
        assert_eq!(clamped.len(), 5);
        assert_eq!(clamped[4].title, "S5");
    }

    #[test]
    fn model_scenarios_are_tagged_by_mentioned_areas() {
        let analysis = ImpactAnalysis {
            summary: String::new(),
            affected_areas: vec!["Login".to_string(), "Billing".to_string()],
            user_impact: String::new(),
            risk_areas: Vec::new(),
        };
        let tagged = tag_model_scenarios(vec![scenario("Sign-in flow")], &analysis);
        assert_eq!(tagged[0].area_tags, vec!["Login"]);
    }

    #[tokio::test]
    async fn unavailable_model_yields_heuristic_plan() {
        let mut runtime = MockRuntime::new();
        runtime.expect_generate().never();
        let orchestrator = orchestrator(runtime);
        let heuristics = HeuristicAnalyzer::new();
        let files = login_and_readme();

        let plan = TestPlanAssembler::new(&orchestrator, &heuristics)
            .model_available(false)
            .assemble(reference(), "Fix login".to_string(), &files)
            .await;

        assert!(!plan.ai_assisted);
        assert_eq!(plan.impact_analysis, heuristics.summarize(&files));
        assert_eq!(plan.scenarios, heuristics.scenarios_for(&files));
        assert_eq!(plan.impact_analysis.affected_areas, vec!["auth"]);
        assert_eq!(plan.impact_analysis.risk_areas, vec!["src/auth/login.py"]);
        assert_eq!(plan.scenarios.len(), 2);
        assert_eq!(plan.scenarios.iter().filter(|s| s.has_tag("auth")).count(), 1);
        assert_eq!(
            plan.overall_summary,
            "Test plan for 2 changed file(s) affecting auth. Focus on end-to-end verification of user-facing workflows."
        );
    }

    #[tokio::test]
    async fn analysis_success_alone_marks_plan_assisted() {
        let mut runtime = MockRuntime::new();
        let mut calls = 0;
        runtime.expect_generate().times(2).returning(move |_, _, _, _| {
            calls += 1;
            if calls == 1 {
                Ok(r#"{"summary": "Login rework", "affected_areas": ["Login"], "user_impact": "Users sign in differently", "risk_areas": []}"#.to_string())
            } else {
                Ok("I cannot produce scenarios.".to_string())
            }
        });
        let orchestrator = orchestrator(runtime);
        let heuristics = HeuristicAnalyzer::new();
        let files = login_and_readme();

        let plan = TestPlanAssembler::new(&orchestrator, &heuristics)
            .assemble(reference(), "Fix login".to_string(), &files)
            .await;

        assert!(plan.ai_assisted);
        assert_eq!(plan.impact_analysis.summary, "Login rework");
        assert_eq!(plan.scenarios, heuristics.scenarios_for(&files));
    }

    #[tokio::test]
    async fn short_model_scenario_list_is_padded() {
        let mut runtime = MockRuntime::new();
        let mut calls = 0;
        runtime.expect_generate().times(2).returning(move |_, _, _, _| {
            calls += 1;
            if calls == 1 {
                Err(ModelError::Timeout(120))
            } else {
                Ok(r#"[{"title": "Auth login check", "steps": [{"action": "Open login", "expected_result": "Form shown"}], "risk_level": "high"}]"#.to_string())
            }
        });
        let orchestrator = orchestrator(runtime);
        let heuristics = HeuristicAnalyzer::new();
        let files = login_and_readme();

        let plan = TestPlanAssembler::new(&orchestrator, &heuristics)
            .assemble(reference(), "Fix login".to_string(), &files)
            .await;

        assert!(plan.ai_assisted);
        assert_eq!(plan.scenarios.len(), 2);
        assert_eq!(plan.scenarios[0].title, "Auth login check");
        assert_eq!(plan.scenarios[0].area_tags, vec!["auth"]);
        assert_eq!(plan.scenarios[1].title, GENERAL_REGRESSION_TITLE);
    }
}
