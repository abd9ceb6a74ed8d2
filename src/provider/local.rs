//! Local models, served by an external runtime process.
//!
//! The runtime owns the console for the duration of the call: its stdin,
//! stdout and stderr are the terminal's, so output streams straight to the
//! user instead of being captured.

use std::process::Stdio;

use crate::constants::LOCAL_RUNTIME_BIN;
use crate::error::{AskError, Result};

/// Runs `prompt` against `model` with the default runtime.
pub async fn run(model: &str, prompt: &str) -> Result<()> {
    run_with(LOCAL_RUNTIME_BIN, model, prompt).await
}

/// Runs `<bin> run <model> <prompt>` with inherited stdio.
pub(crate) async fn run_with(bin: &str, model: &str, prompt: &str) -> Result<()> {
    let path = which::which(bin).map_err(|_| AskError::LocalRuntimeMissing {
        bin: bin.to_string(),
    })?;
    tracing::debug!(runtime = %path.display(), model, "starting local model");

    let status = tokio::process::Command::new(&path)
        .arg("run")
        .arg(model)
        .arg(prompt)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| AskError::LocalRuntimeFailure {
            model: model.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(AskError::LocalRuntimeFailure {
            model: model.to_string(),
            reason: status.to_string(),
        });
    }
    Ok(())
}
