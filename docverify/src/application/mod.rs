pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use docverify_core::error::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Session { dashboard } => {
            let stdin = std::io::stdin();
            handlers::handle_session(dashboard, stdin.lock(), std::io::stdout().lock())
        }
        Commands::Check { files, dashboard } => {
            handlers::handle_check(files, dashboard, std::io::stdout().lock())
        }
    }
}
