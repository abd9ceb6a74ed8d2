//! Struct definitions for the persisted configuration file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::address::{Namespace, Resolution};
use crate::error::Result;
use crate::provider::{default_base_url_for, ProviderKind};

/// Root of `config.json`.
///
/// Addresses are kept in a [`BTreeMap`] so the file is written in the same
/// order every time.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub apis: BTreeMap<String, ProviderConfig>,
}

/// Everything needed to call the model behind one address.
///
/// Remote providers carry both `api_key` and `base_url`; local models
/// carry neither.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider name (`claude`, `openai`, `gemini`, `cohere`, `local`).
    /// Kept as typed so unknown names survive until dispatch.
    pub provider: String,
    /// API credential. May contain `{env:VAR}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API base URL without a trailing slash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Canonical upstream model identifier.
    #[serde(default)]
    pub model: String,
}

impl ProviderConfig {
    /// A model served by the local runtime.
    pub fn local(model: impl Into<String>) -> Self {
        Self {
            provider: ProviderKind::Local.as_str().to_string(),
            api_key: None,
            base_url: None,
            model: model.into(),
        }
    }

    /// A remote provider with the given credential.
    ///
    /// The endpoint is the provider's public API. Unknown provider names get
    /// no endpoint; they fail when the address is first used.
    pub fn remote(provider: impl Into<String>, model: impl Into<String>, api_key: String) -> Self {
        let provider = provider.into();
        let base_url = ProviderKind::parse(&provider)
            .ok()
            .and_then(default_base_url_for)
            .map(String::from);
        Self {
            provider,
            api_key: Some(api_key),
            base_url,
            model: model.into(),
        }
    }

    /// Builds the record for a resolved address.
    ///
    /// `api_key` is ignored for local addresses.
    pub fn from_resolution(resolution: Resolution, api_key: Option<String>) -> Self {
        match resolution.namespace {
            Namespace::Local => Self::local(resolution.model),
            Namespace::Api => Self::remote(
                resolution.provider,
                resolution.model,
                api_key.unwrap_or_default(),
            ),
        }
    }

    /// Parses the stored provider name.
    pub fn kind(&self) -> Result<ProviderKind> {
        ProviderKind::parse(&self.provider)
    }
}
