//! Request/response adapters for the remote providers.
//!
//! Each provider speaks a different JSON dialect. An [`Adapter`] knows how
//! to turn a prompt into that provider's request and how to pull the
//! generated text back out of its response; the transport in between is
//! shared.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::kind::ProviderKind;
use super::{claude, cohere, gemini, openai};
use crate::error::{AskError, Result};

/// A fully built HTTP request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    /// Query parameters, percent-encoded by the transport.
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

/// Where and as whom to send a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// One provider's request builder and response decoder.
pub trait Adapter: Sync {
    /// Provider name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Builds the request that sends `prompt` as a single user message.
    fn build_request(&self, target: &RemoteTarget, prompt: &str) -> HttpRequest;

    /// Extracts the generated text from a successful response body.
    ///
    /// A body that does not match the provider's schema is an
    /// [`AskError::Extraction`].
    fn extract_text(&self, body: &[u8]) -> Result<String>;
}

/// Returns the adapter for a remote provider, `None` for local models.
pub fn adapter_for(kind: ProviderKind) -> Option<&'static dyn Adapter> {
    match kind {
        ProviderKind::Claude => Some(&claude::Claude),
        ProviderKind::OpenAI => Some(&openai::OpenAi),
        ProviderKind::Gemini => Some(&gemini::Gemini),
        ProviderKind::Cohere => Some(&cohere::Cohere),
        ProviderKind::Local => None,
    }
}

/// Decodes `body` into a provider's response schema.
pub(super) fn decode<T: DeserializeOwned>(provider: &'static str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AskError::Extraction {
        provider,
        reason: e.to_string(),
    })
}

/// Error for a response that decoded but held no text where expected.
pub(super) fn missing(provider: &'static str, what: &str) -> AskError {
    AskError::Extraction {
        provider,
        reason: format!("no {what} in response"),
    }
}

#[cfg(test)]
pub(super) fn target(model: &str) -> RemoteTarget {
    RemoteTarget {
        base_url: "https://example.test/v1".into(),
        api_key: "sk-test".into(),
        model: model.into(),
    }
}
