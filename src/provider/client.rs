//! The configured provider behind an address.
//!
//! Contains the [`Provider`] struct which picks the adapter (or the local
//! runtime) for a stored [`ProviderConfig`] and runs a single prompt
//! through it, keeping provider-specific details out of the CLI layer.

use super::adapter::{adapter_for, Adapter, RemoteTarget};
use super::kind::{default_base_url_for, ProviderKind};
use super::local;
use super::transport::HttpClient;
use crate::config::ProviderConfig;
use crate::error::{AskError, Result};
use crate::output::Renderer;

/// Internal enum separating network adapters from the local runtime.
enum Backend {
    Remote {
        adapter: &'static dyn Adapter,
        target: RemoteTarget,
        http: HttpClient,
    },
    Local {
        model: String,
    },
}

/// A provider ready to answer one prompt.
pub struct Provider {
    kind: ProviderKind,
    backend: Backend,
}

impl Provider {
    /// Creates a [`Provider`] from a stored configuration record.
    ///
    /// Resolves the credential (stored value, `{env:VAR}` placeholders,
    /// provider environment variable) and the endpoint. A missing
    /// credential is sent as empty and left for the provider to reject.
    ///
    /// # Errors
    ///
    /// Returns [`AskError::UnresolvableProvider`] when the stored provider
    /// name has no adapter.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let kind = config.kind()?;
        let Some(adapter) = adapter_for(kind) else {
            return Ok(Self {
                kind,
                backend: Backend::Local {
                    model: config.model.clone(),
                },
            });
        };

        let base_url = config
            .resolved_base_url()
            .or_else(|| default_base_url_for(kind).map(String::from))
            .ok_or_else(|| AskError::UnresolvableProvider(config.provider.clone()))?;
        let api_key = config.resolved_api_key(kind).unwrap_or_else(|| {
            tracing::warn!(provider = %kind, "no API key configured");
            String::new()
        });

        Ok(Self {
            kind,
            backend: Backend::Remote {
                adapter,
                target: RemoteTarget {
                    base_url,
                    api_key,
                    model: config.model.clone(),
                },
                http: HttpClient::new()?,
            },
        })
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Sends `prompt` and renders the reply.
    ///
    /// Remote replies are extracted and handed to `renderer`; local models
    /// write to the terminal themselves.
    pub async fn prompt(&self, prompt: &str, renderer: &mut dyn Renderer) -> Result<()> {
        match &self.backend {
            Backend::Remote {
                adapter,
                target,
                http,
            } => {
                let request = adapter.build_request(target, prompt);
                let body = http.post_json(&request).await?;
                let text = adapter.extract_text(&body)?;
                renderer.render_text(&text);
                Ok(())
            }
            Backend::Local { model } => local::run(model, prompt).await,
        }
    }
}
