use std::sync::Arc;
use serde_json::Value;
use crate::enums::model_outcome::ModelOutcome;
use crate::enums::risk_tier::RiskTier;
use crate::helpers::prompt_generator;
use crate::prompts::impact_analysis_prompt::IMPACT_ANALYSIS_SYSTEM_PROMPT;
use crate::prompts::scenario_generation_prompt::SCENARIO_GENERATION_SYSTEM_PROMPT;
use crate::services::response_sanitizer::extract_json_value;
use crate::structs::ai::model_impact_analysis::ModelImpactAnalysis;
use crate::structs::ai::model_scenario::ModelScenario;
use crate::structs::classified_file::ClassifiedFile;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::impact_analysis::ImpactAnalysis;
use crate::structs::test_scenario::TestScenario;
use crate::structs::test_step::TestStep;
use crate::traits::model_runtime::ModelRuntime;

const SCENARIO_WRAPPER_KEYS: &[&str] = &["scenarios", "test_scenarios"];

/// Runs the two model calls and turns every failure into `ModelOutcome::Unavailable`.
pub struct ModelOrchestrator {
    runtime: Arc<dyn ModelRuntime>,
    ai_config: AiConfig,
    analysis_config: AnalysisConfig,
}

impl ModelOrchestrator {
    pub fn new(runtime: Arc<dyn ModelRuntime>, ai_config: AiConfig, analysis_config: AnalysisConfig) -> Self {
        Self {
            runtime,
            ai_config,
            analysis_config,
        }
    }

    pub async fn check_availability(&self) -> bool {
        let available = self.runtime.ping().await;
        if available {
            log::info!("🤖 Model runtime available ({})", self.ai_config.model);
        } else {
            log::warn!("⚠️ Model runtime not available at {}", self.ai_config.host);
        }
        available
    }

    async fn call(&self, system_prompt: &str, user_prompt: String) -> Result<String, String> {
        log::debug!("Model prompt: {} chars", user_prompt.len());

        let text = self.runtime
            .generate(
                system_prompt.to_string(),
                user_prompt,
                self.ai_config.max_tokens,
                self.ai_config.temperature,
            )
            .await
            .map_err(|e| e.to_string())?;

        log::debug!("Model response: {} chars", text.len());
        Ok(text)
    }

    pub async fn analyze(&self, files: &[ClassifiedFile], title: &str) -> ModelOutcome<ImpactAnalysis> {
        let prompt = prompt_generator::generate_impact_prompt(
            title,
            files,
            self.analysis_config.max_files,
            self.analysis_config.diff_char_limit,
        );

        let outcome = match self.call(IMPACT_ANALYSIS_SYSTEM_PROMPT, prompt).await {
            Ok(text) => parse_impact_analysis(&text),
            Err(reason) => ModelOutcome::Unavailable(reason),
        };

        match &outcome {
            ModelOutcome::Success(_) => log::info!("✅ AI impact analysis completed"),
            ModelOutcome::Unavailable(reason) => log::warn!("⚠️ AI impact analysis unavailable: {}", reason),
        }
        outcome
    }

    pub async fn generate_scenarios(&self, analysis: &ImpactAnalysis, files: &[ClassifiedFile], title: &str) -> ModelOutcome<Vec<TestScenario>> {
        let prompt = prompt_generator::generate_scenario_prompt(title, analysis, files, self.analysis_config.max_files);

        let outcome = match self.call(SCENARIO_GENERATION_SYSTEM_PROMPT, prompt).await {
            Ok(text) => parse_scenarios(&text),
            Err(reason) => ModelOutcome::Unavailable(reason),
        };

        match &outcome {
            ModelOutcome::Success(scenarios) => log::info!("✅ Generated {} AI test scenarios", scenarios.len()),
            ModelOutcome::Unavailable(reason) => log::warn!("⚠️ AI scenario generation unavailable: {}", reason),
        }
        outcome
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    for item in items.into_iter().map(|i| i.trim().to_string()).filter(|i| !i.is_empty()) {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

pub fn parse_impact_analysis(raw: &str) -> ModelOutcome<ImpactAnalysis> {
    let value = match extract_json_value(raw) {
        Some(value @ Value::Object(_)) => value,
        Some(_) => return ModelOutcome::Unavailable("expected a JSON object".to_string()),
        None => return ModelOutcome::Unavailable("no JSON object in model response".to_string()),
    };

    match serde_json::from_value::<ModelImpactAnalysis>(value) {
        Ok(parsed) => ModelOutcome::Success(ImpactAnalysis {
            summary: parsed.summary.trim().to_string(),
            affected_areas: dedup_preserving_order(parsed.affected_areas),
            user_impact: parsed.user_impact.trim().to_string(),
            risk_areas: dedup_preserving_order(parsed.risk_areas),
        }),
        Err(e) => ModelOutcome::Unavailable(format!("impact analysis missing fields: {}", e)),
    }
}

pub fn parse_scenarios(raw: &str) -> ModelOutcome<Vec<TestScenario>> {
    let items = match extract_json_value(raw) {
        Some(Value::Array(items)) => items,
        Some(Value::Object(mut map)) => {
            match SCENARIO_WRAPPER_KEYS.iter().find_map(|key| map.remove(*key)) {
                Some(Value::Array(items)) => items,
                _ => return ModelOutcome::Unavailable("expected a JSON array of scenarios".to_string()),
            }
        }
        Some(_) => return ModelOutcome::Unavailable("expected a JSON array of scenarios".to_string()),
        None => return ModelOutcome::Unavailable("no JSON array in model response".to_string()),
    };

    if items.is_empty() {
        return ModelOutcome::Unavailable("model returned no scenarios".to_string());
    }

    let mut scenarios = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match convert_scenario(item) {
            Ok(scenario) => scenarios.push(scenario),
            Err(reason) => return ModelOutcome::Unavailable(format!("scenario {}: {}", index + 1, reason)),
        }
    }

    ModelOutcome::Success(scenarios)
}

fn convert_scenario(item: Value) -> Result<TestScenario, String> {
    let raw: ModelScenario = serde_json::from_value(item).map_err(|e| e.to_string())?;

    let title = raw.title.trim().to_string();
    if title.is_empty() {
        return Err("empty title".to_string());
    }

    if raw.steps.is_empty() {
        return Err("no steps".to_string());
    }

    let risk_level: RiskTier = raw.risk_level.parse()?;

    Ok(TestScenario {
        title,
        steps: raw
            .steps
            .iter()
            .map(|s| TestStep::new(s.action.trim(), s.expected_result.trim()))
            .collect(),
        risk_level,
        area_tags: Vec::new(),
    })
}
