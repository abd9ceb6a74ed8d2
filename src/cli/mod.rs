//! Command-line interface definition and dispatch for ask.
//!
//! Uses [`clap`] for argument parsing with derive macros. Anything that is
//! not a known subcommand is taken as `<address> <prompt...>`; the handlers
//! themselves live in the [`commands`] submodule.

mod commands;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::ConfigStore;
use crate::output::StdoutRenderer;
use crate::secret;

const EXAMPLES: &str = r#"Examples:
  ask api:claude "generate an index.ts file"
  ask api:gpt-4 "explain quantum computing"
  ask local:deepseek-r1-8b "write a poem"
  ask add api:claude-opus
  ask add local:llama3-8b

Supported API providers:
  - claude (Claude 3/3.5 models)
  - openai (GPT-3.5, GPT-4, GPT-4o)
  - gemini (Gemini Pro, Flash)
  - cohere (Command R/R+)

Local models run through ollama (deepseek-r1-8b, llama3-8b, mistral-7b, ...)."#;

/// Top-level CLI structure for ask.
#[derive(Parser)]
#[command(
    name = "ask",
    about = "CLI tool for interacting with LLMs",
    version,
    override_usage = "ask <api:provider|local:model> \"<prompt>\"\n       ask <COMMAND>",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for the ask CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new API/model (api:provider-model or local:model)
    Add { address: Option<String> },
    /// List configured APIs
    List,
    /// Remove an API
    Remove { address: Option<String> },
    /// List known model aliases
    Models,
    /// Run a prompt against a configured address
    #[command(external_subcommand)]
    Prompt(Vec<String>),
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
///
/// Usage mistakes print a hint and yield [`ExitCode::FAILURE`]; everything
/// else that goes wrong is returned as an error.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    match command {
        Commands::Add { address: None } => usage("ask add <api:provider-model|local:model>"),
        Commands::Add {
            address: Some(address),
        } => {
            let mut store = ConfigStore::open()?;
            commands::add(&mut store, &address, secret::read_secret, &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::List => {
            let store = ConfigStore::open()?;
            commands::list(&store, &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Remove { address: None } => usage("ask remove <api-name>"),
        Commands::Remove {
            address: Some(address),
        } => {
            let mut store = ConfigStore::open()?;
            commands::remove(&mut store, &address, &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Models => {
            commands::models(&mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Prompt(args) => {
            let Some((address, words)) = args.split_first() else {
                return usage("ask <api:provider|local:model> \"<prompt>\"");
            };
            if words.is_empty() {
                return usage("ask <api:provider|local:model> \"<prompt>\"");
            }
            let prompt = words.join(" ");
            let store = ConfigStore::open()?;
            commands::run_prompt(&store, address, &prompt, &mut StdoutRenderer).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn usage(line: &str) -> Result<ExitCode> {
    println!("Usage: {line}");
    Ok(ExitCode::FAILURE)
}
