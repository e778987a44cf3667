use std::sync::Arc;
use crate::errors::PlanResult;
use crate::services::change_reference_resolver::ChangeReferenceResolver;
use crate::services::component_classifier::{ComponentClassifier, RiskThresholds};
use crate::services::heuristic_analyzer::HeuristicAnalyzer;
use crate::services::model_orchestrator::ModelOrchestrator;
use crate::services::model_providers::ollama::OllamaProvider;
use crate::services::source_control::gitlab::GitLabClient;
use crate::services::test_plan_assembler::TestPlanAssembler;
use crate::structs::config::config::Config;
use crate::structs::test_plan::TestPlan;
use crate::traits::model_runtime::ModelRuntime;
use crate::traits::source_control::SourceControl;

/// Entry point wiring source control, classification and plan assembly.
pub struct TestPlanBuilder {
    source_control: Arc<dyn SourceControl>,
    orchestrator: ModelOrchestrator,
    classifier: ComponentClassifier,
    heuristics: HeuristicAnalyzer,
}

impl TestPlanBuilder {
    pub fn new(source_control: Arc<dyn SourceControl>, runtime: Arc<dyn ModelRuntime>, config: &Config) -> Self {
        Self {
            source_control,
            orchestrator: ModelOrchestrator::new(runtime, config.ai.clone(), config.analysis.clone()),
            classifier: ComponentClassifier::new(RiskThresholds::from(&config.analysis)),
            heuristics: HeuristicAnalyzer::new(),
        }
    }

    pub fn from_config(config: &Config) -> PlanResult<Self> {
        let source_control = Arc::new(GitLabClient::new(&config.gitlab)?);
        let runtime = Arc::new(OllamaProvider::new(&config.ai));
        Ok(Self::new(source_control, runtime, config))
    }

    /// Resolves `raw`, fetches the change set, and always returns a plan once
    /// the files are known. Only reference and source-control failures surface.
    pub async fn build_test_plan(&self, raw: &str) -> PlanResult<TestPlan> {
        let reference = ChangeReferenceResolver::resolve(raw)?;
        log::info!("🔍 Planning tests for {} ({})", reference, reference.web_url());

        let (changes, title, model_available) = tokio::join!(
            self.source_control.fetch_changes(reference.clone()),
            self.source_control.fetch_title(reference.clone()),
            self.orchestrator.check_availability(),
        );
        let changes = changes?;
        let title = title?;

        log::info!("📁 {} changed file(s) in \"{}\"", changes.len(), title);

        let files = self.classifier.classify_all(changes);

        let plan = TestPlanAssembler::new(&self.orchestrator, &self.heuristics)
            .model_available(model_available)
            .assemble(reference, title, &files)
            .await;

        log::info!(
            "✅ Test plan ready: {} scenario(s), AI-assisted: {}",
            plan.scenarios.len(),
            plan.ai_assisted
        );
        Ok(plan)
    }
}
