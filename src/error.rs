//! Error taxonomy for ask.
//!
//! Core modules (address resolution, configuration store, provider
//! adapters) return [`AskError`]; the CLI layer wraps these in
//! [`anyhow`] with extra context.

use std::path::PathBuf;

/// Result type for ask's core operations.
pub type Result<T> = std::result::Result<T, AskError>;

/// Every failure ask can surface to the user.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// The address is not of the form `<namespace>:<token>`.
    #[error("Invalid address '{0}'. Use api:provider-model or local:model")]
    MalformedAddress(String),

    /// No configuration is stored under the address.
    #[error("API '{0}' not configured. Use 'ask add {0}' to add it.")]
    UnknownAddress(String),

    /// The provider string has no adapter.
    #[error("Unknown provider: {0}. Supported: claude, openai, gemini, cohere, local")]
    UnresolvableProvider(String),

    /// Connection-level failure, including timeouts.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{status}\n{body}")]
    Upstream { status: String, body: String },

    /// The response did not have the expected shape.
    #[error("Unexpected response from {provider}: {reason}")]
    Extraction {
        provider: &'static str,
        reason: String,
    },

    /// The local runtime executable is not on `PATH`.
    #[error("{bin} not found. Please install {bin} to use local models.\nVisit: {url}", url = crate::constants::LOCAL_RUNTIME_URL)]
    LocalRuntimeMissing { bin: String },

    /// The local runtime exited unsuccessfully.
    #[error("Error running model {model}: {reason}")]
    LocalRuntimeFailure { model: String, reason: String },

    /// Writing the configuration file failed.
    #[error("Failed to write config to {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a secret from the terminal failed or was cancelled.
    #[error("Error reading API key: {0}")]
    Input(#[source] std::io::Error),
}
