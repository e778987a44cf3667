use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build a UI test plan for a merge request URL
    Plan {
        url: String,
        #[clap(long)]
        json: bool,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that the local model runtime is reachable
    Status,
    Init,
    Validate,
}
