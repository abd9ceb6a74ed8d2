//! Provider kind enumeration and per-provider defaults.
//!
//! Defines [`ProviderKind`] which identifies which backend serves a
//! configured address, plus [`default_model_for`] and
//! [`default_base_url_for`] which supply what `ask add` stores when the
//! user does not say otherwise.

use std::fmt;

use crate::constants::{
    CLAUDE_BASE_URL, COHERE_BASE_URL, DEFAULT_CLAUDE_MODEL, DEFAULT_COHERE_MODEL,
    DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL, GEMINI_BASE_URL, OPENAI_BASE_URL,
};
use crate::error::{AskError, Result};

/// Identifies which LLM provider serves an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Anthropic (Claude models, Messages API).
    Claude,
    /// OpenAI (GPT models, Chat Completions API).
    OpenAI,
    /// Google Gemini (`generateContent`).
    Gemini,
    /// Cohere (Command models, Chat API).
    Cohere,
    /// A model served by the local runtime.
    Local,
}

impl ProviderKind {
    /// The four remote families, in display order.
    pub const REMOTE: [ProviderKind; 4] = [Self::Claude, Self::OpenAI, Self::Gemini, Self::Cohere];

    /// Parses a stored provider name into a [`ProviderKind`].
    ///
    /// Names match exactly as written to the configuration file. Anything
    /// else, including `Claude`, is an [`AskError::UnresolvableProvider`].
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "claude" => Ok(Self::Claude),
            "openai" => Ok(Self::OpenAI),
            "gemini" => Ok(Self::Gemini),
            "cohere" => Ok(Self::Cohere),
            "local" => Ok(Self::Local),
            _ => Err(AskError::UnresolvableProvider(s.to_string())),
        }
    }

    /// The name written to the configuration file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::OpenAI => "openai",
            Self::Gemini => "gemini",
            Self::Cohere => "cohere",
            Self::Local => "local",
        }
    }

    /// Environment variable consulted when no credential is stored.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::Claude => Some("ANTHROPIC_API_KEY"),
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Gemini => Some("GEMINI_API_KEY"),
            Self::Cohere => Some("COHERE_API_KEY"),
            Self::Local => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the default model identifier for a provider name.
///
/// Takes the raw name because `ask add api:<name>` accepts names that are
/// only validated at dispatch; anything unrecognized yields `""`.
pub fn default_model_for(provider: &str) -> &'static str {
    match ProviderKind::parse(provider) {
        Ok(ProviderKind::Claude) => DEFAULT_CLAUDE_MODEL,
        Ok(ProviderKind::OpenAI) => DEFAULT_OPENAI_MODEL,
        Ok(ProviderKind::Gemini) => DEFAULT_GEMINI_MODEL,
        Ok(ProviderKind::Cohere) => DEFAULT_COHERE_MODEL,
        Ok(ProviderKind::Local) | Err(_) => "",
    }
}

/// Returns the API base URL for a remote provider.
pub fn default_base_url_for(provider: ProviderKind) -> Option<&'static str> {
    match provider {
        ProviderKind::Claude => Some(CLAUDE_BASE_URL),
        ProviderKind::OpenAI => Some(OPENAI_BASE_URL),
        ProviderKind::Gemini => Some(GEMINI_BASE_URL),
        ProviderKind::Cohere => Some(COHERE_BASE_URL),
        ProviderKind::Local => None,
    }
}
