use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "mr-test-planner")]
#[clap(about = "Risk-ranked UI test plans for merge requests", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
