//! Entry point for ask, a CLI for sending a prompt to an LLM.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! sets up logging, and dispatches to the appropriate subcommand handler.

mod address;
mod cli;
mod config;
mod constants;
mod error;
mod models;
mod output;
mod provider;
mod secret;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::output::{Renderer, StdoutRenderer};

/// Runs the ask CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches the chosen
/// subcommand via [`cli::run`]. Any error is printed and exits with 1.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    init_logging(cli.verbose);

    match cli::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            StdoutRenderer.render_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `$ASK_LOG` takes a filter directive; otherwise
/// `--verbose` selects `debug` and the default is `warn`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(constants::LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
