mod support;

use std::fs;
use std::sync::Arc;
use mr_test_planner::config::config_manager::ConfigManager;
use mr_test_planner::enums::change_type::ChangeType;
use mr_test_planner::enums::risk_tier::RiskTier;
use mr_test_planner::errors::PlanError;
use mr_test_planner::services::component_classifier::ComponentClassifier;
use mr_test_planner::services::heuristic_analyzer::HeuristicAnalyzer;
use mr_test_planner::services::model_providers::ollama::OllamaProvider;
use mr_test_planner::services::source_control::gitlab::GitLabClient;
use mr_test_planner::services::test_plan_builder::TestPlanBuilder;
use mr_test_planner::structs::config::config::Config;
use mr_test_planner::structs::file_change::FileChange;
use mr_test_planner::traits::model_runtime::ModelRuntime;
use support::{mr_url, spawn_fake_gitlab, spawn_fake_ollama, ModelBehavior, MR_TITLE};
use tempfile::TempDir;

fn config_for(ollama_host: &str) -> Config {
    let mut config = Config::default();
    config.ai.host = ollama_host.to_string();
    config.ai.timeout_secs = 5;
    config.gitlab.token_env = "MR_TEST_PLANNER_UNSET_TOKEN".to_string();
    config
}

fn offline_config() -> Config {
    config_for("http://127.0.0.1:9")
}

#[tokio::test]
async fn full_pipeline_with_model_available() {
    let ollama = spawn_fake_ollama(ModelBehavior::Healthy).await;
    let gitlab = spawn_fake_gitlab(false).await;

    let builder = TestPlanBuilder::from_config(&config_for(&format!("http://{}", ollama))).unwrap();
    let plan = builder.build_test_plan(&format!("@{}", mr_url(gitlab, 42))).await.unwrap();

    assert!(plan.ai_assisted);
    assert_eq!(plan.mr_title, MR_TITLE);
    assert_eq!(plan.change_reference.project_path, "group/app");
    assert_eq!(plan.change_reference.change_number, 42);
    assert_eq!(plan.change_reference.instance_root, format!("http://{}", gitlab));

    assert_eq!(plan.impact_analysis.summary, "Login now redirects to the last visited page");
    assert_eq!(plan.impact_analysis.affected_areas, vec!["Login page", "Dashboard"]);

    assert_eq!(plan.scenarios.len(), 3);
    assert_eq!(plan.scenarios[0].risk_level, RiskTier::High);
    assert_eq!(plan.scenarios[0].area_tags, vec!["Login page"]);
    assert_eq!(plan.scenarios[1].area_tags, vec!["Dashboard"]);
    assert_eq!(plan.scenarios[2].risk_level, RiskTier::Low);
}

#[tokio::test]
async fn garbled_scenarios_fall_back_but_keep_model_analysis() {
    let ollama = spawn_fake_ollama(ModelBehavior::GarbledScenarios).await;
    let gitlab = spawn_fake_gitlab(false).await;

    let builder = TestPlanBuilder::from_config(&config_for(&format!("http://{}", ollama))).unwrap();
    let plan = builder.build_test_plan(&mr_url(gitlab, 42)).await.unwrap();

    assert!(plan.ai_assisted);
    assert_eq!(plan.impact_analysis.affected_areas, vec!["Login page", "Dashboard"]);
    assert_eq!(plan.scenarios.len(), 2);
    assert!(plan.scenarios.iter().any(|s| s.has_tag("auth")));
}

#[tokio::test]
async fn offline_model_matches_heuristic_plan() {
    let gitlab = spawn_fake_gitlab(false).await;

    let builder = TestPlanBuilder::from_config(&offline_config()).unwrap();
    let plan = builder.build_test_plan(&mr_url(gitlab, 42)).await.unwrap();

    let classifier = ComponentClassifier::default();
    let files = classifier.classify_all(vec![
        FileChange::new("src/auth/login.py", ChangeType::Modified, "").with_line_delta(3),
        FileChange::new("README.md", ChangeType::Modified, "").with_line_delta(2),
    ]);
    let heuristics = HeuristicAnalyzer::new();

    assert!(!plan.ai_assisted);
    assert_eq!(plan.impact_analysis, heuristics.summarize(&files));
    assert_eq!(plan.scenarios, heuristics.scenarios_for(&files));
    assert_eq!(plan.impact_analysis.affected_areas, vec!["auth"]);
    assert_eq!(plan.impact_analysis.risk_areas, vec!["src/auth/login.py"]);
    assert_eq!(plan.scenarios.iter().filter(|s| s.has_tag("auth")).count(), 1);
}

#[tokio::test]
async fn unknown_merge_request_is_not_found() {
    let gitlab = spawn_fake_gitlab(false).await;

    let builder = TestPlanBuilder::from_config(&offline_config()).unwrap();
    let err = builder.build_test_plan(&mr_url(gitlab, 7)).await.unwrap_err();

    assert!(matches!(err, PlanError::ChangeSetNotFound { change_number: 7, .. }));
}

#[tokio::test]
async fn missing_token_is_access_denied() {
    let gitlab = spawn_fake_gitlab(true).await;

    let builder = TestPlanBuilder::from_config(&offline_config()).unwrap();
    let err = builder.build_test_plan(&mr_url(gitlab, 42)).await.unwrap_err();

    assert!(matches!(err, PlanError::AccessDenied { status_code: 401, .. }));
    assert!(err.is_input_error());
}

#[tokio::test]
async fn private_token_grants_access() {
    let gitlab = spawn_fake_gitlab(true).await;
    let config = offline_config();

    let client = GitLabClient::new(&config.gitlab).unwrap().with_token(Some("secret".to_string()));
    let builder = TestPlanBuilder::new(Arc::new(client), Arc::new(OllamaProvider::new(&config.ai)), &config);
    let plan = builder.build_test_plan(&mr_url(gitlab, 42)).await.unwrap();

    assert_eq!(plan.mr_title, MR_TITLE);
    assert!(!plan.ai_assisted);
}

#[tokio::test]
async fn ollama_status_check_lists_models() {
    let ollama = spawn_fake_ollama(ModelBehavior::Healthy).await;
    let provider = OllamaProvider::new(&config_for(&format!("http://{}", ollama)).ai);

    assert!(provider.ping().await);
    let models = provider.installed_models().await.unwrap();
    assert!(models.iter().any(|m| m == provider.model()));
}

#[tokio::test]
async fn malformed_reference_is_rejected() {
    let builder = TestPlanBuilder::from_config(&offline_config()).unwrap();
    let err = builder.build_test_plan("gitlab merge request 42").await.unwrap_err();

    assert!(matches!(err, PlanError::MalformedReference { .. }));
}

#[test]
fn sample_config_round_trips_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::create_sample_config(&path).unwrap();
    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(ConfigManager::validate_config(&config).is_valid());
}

#[test]
fn partial_config_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai]\nmodel = \"llama3\"\n\n[analysis]\nhigh_risk_lines = 300\n").unwrap();

    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config.ai.model, "llama3");
    assert_eq!(config.ai.host, Config::default().ai.host);
    assert_eq!(config.analysis.high_risk_lines, 300);
    assert_eq!(config.analysis.medium_risk_lines, 50);
}

#[test]
fn broken_config_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai\nmodel = ").unwrap();

    let err = ConfigManager::load_from(&path).unwrap_err();
    assert!(matches!(err, PlanError::Configuration { .. }));
}
