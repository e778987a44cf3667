use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use anyhow::{bail, Context};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::ErrorHandler;
use crate::logger::test_plan_logger::TestPlanLogger;
use crate::services::model_providers::ollama::OllamaProvider;
use crate::services::test_plan_builder::TestPlanBuilder;
use crate::structs::config::config::Config;
use crate::traits::model_runtime::ModelRuntime;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> anyhow::Result<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Plan { url, json, output } => self.plan_command(&url, json, output).await,
            Commands::Status => self.status_command().await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                return Err(e.into());
            }
        };

        let validation = ConfigManager::validate_config(&config);
        if !validation.is_valid() {
            validation.print_summary();
            bail!("invalid configuration");
        }
        for warning in &validation.warnings {
            log::warn!("⚠️ {}", warning);
        }

        Ok(config)
    }

    async fn plan_command(&self, url: &str, json: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let builder = TestPlanBuilder::from_config(&config)?;

        let plan = match builder.build_test_plan(url).await {
            Ok(plan) => plan,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                return Err(e.into());
            }
        };

        let rendered = serde_json::to_string_pretty(&plan).context("failed to serialize test plan")?;

        if json {
            println!("{}", rendered);
        } else {
            TestPlanLogger::print_test_plan(&plan);
        }

        if let Some(path) = output {
            fs::write(&path, &rendered).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("💾 Test plan saved to: {}", path.display());
        }

        Ok(())
    }

    async fn status_command(&self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let provider = OllamaProvider::new(&config.ai);

        log::info!("🔍 Checking model runtime at {}...", config.ai.host);

        if !provider.ping().await {
            println!("❌ Ollama is not reachable at {}", config.ai.host);
            println!("💡 Start it with 'ollama serve'. Test plans will use heuristic analysis until then.");
            return Ok(());
        }
        println!("✅ Ollama is running at {}", config.ai.host);

        match provider.installed_models().await {
            Ok(models) if models.iter().any(|m| m == provider.model()) => {
                println!("✅ Model '{}' is installed", provider.model());
            }
            Ok(_) => {
                println!("⚠️ Model '{}' is not installed", provider.model());
                println!("💡 Run 'ollama pull {}'", provider.model());
            }
            Err(e) => {
                log::warn!("⚠️ Could not list installed models: {}", e);
            }
        }

        Ok(())
    }

    fn init_command(&self) -> anyhow::Result<()> {
        log::info!("🚀 Initializing mr-test-planner configuration...");

        let path = ConfigManager::default_path();
        if path.exists() {
            log::info!("📋 Configuration already exists at: {}", path.display());
            return Ok(());
        }

        match ConfigManager::create_sample_config(&path) {
            Ok(_) => {
                log::info!("📝 Edit {} to point at your Ollama host and model.", path.display());
                log::info!("🔧 Run 'mr-test-planner validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                ErrorHandler::handle_error(&e);
                Err(e.into())
            }
        }
    }

    fn validate_command(&self) -> anyhow::Result<()> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load()?;
        let validation = ConfigManager::validate_config(&config);
        validation.print_summary();

        if !validation.is_valid() {
            bail!("configuration has {} error(s)", validation.errors.len());
        }
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
