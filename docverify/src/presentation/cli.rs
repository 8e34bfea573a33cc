use clap::{Args, Parser, Subcommand};
use docverify_core::{PolicyKind, VerdictLabel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "docverify dashboard (demo)", long_about = None)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct DashboardArgs {
    /// Verdict policy: random, verified, suspicious or scripted
    #[arg(long, default_value = "random")]
    pub policy: PolicyKind,

    /// Labels replayed by the scripted policy, e.g. verified,suspicious
    #[arg(long, value_delimiter = ',')]
    pub script: Vec<VerdictLabel>,

    /// Seed for the random policy (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attach a SHA-256 digest of the file to each result
    #[arg(long)]
    pub digest: bool,

    /// Clear the displayed result when another file is selected
    #[arg(long = "clear-on-select")]
    pub clear_on_select: bool,

    /// Render the dashboard as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard on stdin (select <path>, verify, show, help, quit)
    Session {
        #[command(flatten)]
        dashboard: DashboardArgs,
    },

    /// Select and verify each file in turn, then print the dashboard
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        dashboard: DashboardArgs,
    },
}
