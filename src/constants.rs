//! Centralized constants for ask.
//!
//! All default models, endpoint URLs, file names and timeouts live here
//! so they can be changed in one place.

use std::time::Duration;

/// Per-user directory (under `$HOME`) holding the configuration file.
pub const CONFIG_DIR_NAME: &str = ".ask";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "ASK_CONFIG";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "ASK_LOG";

// --- Address namespaces ---

/// Namespace for remote API providers.
pub const API_NAMESPACE: &str = "api";

/// Namespace for models served by the local runtime.
pub const LOCAL_NAMESPACE: &str = "local";

// --- Provider defaults ---

/// Default Claude model.
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Default Cohere model.
pub const DEFAULT_COHERE_MODEL: &str = "command-r-plus";

/// Anthropic API base URL.
pub const CLAUDE_BASE_URL: &str = "https://api.anthropic.com/v1";

/// OpenAI API base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Gemini API base URL.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Cohere API base URL.
pub const COHERE_BASE_URL: &str = "https://api.cohere.ai/v1";

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Maximum tokens requested from Claude.
pub const MAX_TOKENS: u64 = 4096;

// --- Transport ---

/// Upper bound on every remote call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// --- Local runtime ---

/// Executable that serves local models.
pub const LOCAL_RUNTIME_BIN: &str = "ollama";

/// Where to get the local runtime.
pub const LOCAL_RUNTIME_URL: &str = "https://ollama.ai";
