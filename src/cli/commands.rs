//! Handlers for each ask subcommand.
//!
//! Handlers take the store and their I/O as parameters so they can run
//! against a temporary config file and in-memory buffers in tests.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::address::{self, Namespace};
use crate::config::{ConfigStore, ProviderConfig};
use crate::error::AskError;
use crate::models::aliases_for;
use crate::output::Renderer;
use crate::provider::{default_model_for, Provider, ProviderKind};

/// Resolves `address`, asks for a credential if it is remote, and stores
/// the result. Returns the stored record.
pub(crate) fn add<F>(
    store: &mut ConfigStore,
    address: &str,
    read_key: F,
    out: &mut dyn Write,
) -> Result<ProviderConfig>
where
    F: FnOnce(&str) -> Result<String, AskError>,
{
    let resolution = address::resolve(address)?;

    let api_key = match resolution.namespace {
        Namespace::Local => None,
        Namespace::Api => Some(read_key(&format!(
            "Enter API key for {}: ",
            resolution.provider
        ))?),
    };

    let config = ProviderConfig::from_resolution(resolution, api_key);
    store
        .add(address, config.clone())
        .context("Could not save configuration")?;

    match config.kind() {
        Ok(ProviderKind::Local) => writeln!(out, "Added local model: {}", config.model)?,
        _ => writeln!(
            out,
            "Added API: {} (provider: {}, model: {})",
            address.bold(),
            config.provider,
            config.model
        )?,
    }
    Ok(config)
}

/// Prints every configured address with its provider and model.
pub(crate) fn list(store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No APIs configured. Use 'ask add' to add one.")?;
        return Ok(());
    }

    writeln!(out, "{}", "Configured APIs:".bold())?;
    for (address, config) in store.entries() {
        writeln!(
            out,
            "  {} {}",
            address.cyan(),
            format!("(provider: {}, model: {})", config.provider, config.model).dimmed()
        )?;
    }
    Ok(())
}

/// Removes `address`. Returns whether it existed.
pub(crate) fn remove(store: &mut ConfigStore, address: &str, out: &mut dyn Write) -> Result<bool> {
    let removed = store
        .remove(address)
        .context("Could not save configuration")?;
    if removed {
        writeln!(out, "Removed API: {}", address)?;
    } else {
        writeln!(out, "API '{}' not found", address)?;
    }
    Ok(removed)
}

/// Lists the alias table grouped by provider family.
pub(crate) fn models(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Model aliases (use as api:<alias>):")?;
    for kind in ProviderKind::REMOTE {
        writeln!(
            out,
            "\n  {} {}",
            format!("{kind}:").bold(),
            format!("(default: {})", default_model_for(kind.as_str())).dimmed()
        )?;
        for alias in aliases_for(kind) {
            writeln!(out, "    {:<16} {}", alias.alias, alias.model)?;
        }
    }
    writeln!(
        out,
        "\n  {}:\n    any model the local runtime can run, e.g. local:llama3-8b",
        ProviderKind::Local.to_string().bold()
    )?;
    Ok(())
}

/// Sends `prompt` to the model configured at `address`.
pub(crate) async fn run_prompt(
    store: &ConfigStore,
    address: &str,
    prompt: &str,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    let config = store.get(address)?;
    let provider = Provider::from_config(config)?;
    tracing::debug!(address, provider = %provider.kind(), model = %config.model, "dispatching prompt");
    provider.prompt(prompt, renderer).await?;
    Ok(())
}
