mod application;

mod presentation {
    pub mod cli;
}

use clap::Parser;
use docverify_core::error::Result;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::Cli;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    application::run(cli)
}
