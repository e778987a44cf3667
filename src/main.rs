use clap::Parser;
use env_logger::Env;
use mr_test_planner::structs::cli::Cli;
use mr_test_planner::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new().run_command(cli.command).await
}
