//! Address parsing and resolution.
//!
//! An address is what the user types to pick a model: `api:claude-opus`,
//! `api:openai`, `api:gpt-4o-2024-08-06`, `local:llama3-8b`. Resolution
//! turns it into a provider name and canonical model identifier:
//!
//!   local:<model>             provider local, model verbatim
//!   api:<alias>               alias table lookup
//!   api:<provider>-<suffix>   provider is the part before the first `-`,
//!                             model is the whole token
//!   api:<provider>            provider's default model
//!
//! Provider names from the last two forms are not validated here; an
//! unknown one is stored as typed and rejected when the address is used.

use crate::constants::{API_NAMESPACE, LOCAL_NAMESPACE};
use crate::error::{AskError, Result};
use crate::models::lookup_alias;
use crate::provider::{default_model_for, ProviderKind};

/// The part of an address before the colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Api,
    Local,
}

/// A parsed `<namespace>:<token>` address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address<'a> {
    pub namespace: Namespace,
    pub token: &'a str,
}

impl<'a> Address<'a> {
    /// Splits `spec` on its first `:`.
    ///
    /// Both sides must be non-empty and the namespace must be `api` or
    /// `local`. The token may itself contain colons (`local:llama3:70b`).
    pub fn parse(spec: &'a str) -> Result<Self> {
        let malformed = || AskError::MalformedAddress(spec.to_string());
        let (namespace, token) = spec.split_once(':').ok_or_else(malformed)?;
        if token.is_empty() {
            return Err(malformed());
        }
        let namespace = match namespace {
            API_NAMESPACE => Namespace::Api,
            LOCAL_NAMESPACE => Namespace::Local,
            _ => return Err(malformed()),
        };
        Ok(Self { namespace, token })
    }
}

/// What an address resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub namespace: Namespace,
    /// Provider name as it will be stored. Unvalidated for `api:` addresses
    /// that are not aliases.
    pub provider: String,
    /// Canonical model identifier; empty for an unknown bare provider.
    pub model: String,
}

/// Resolves an address string to its provider and canonical model.
pub fn resolve(spec: &str) -> Result<Resolution> {
    let address = Address::parse(spec)?;
    let token = address.token;

    let (provider, model) = match address.namespace {
        Namespace::Local => (ProviderKind::Local.as_str().to_string(), token.to_string()),
        Namespace::Api => {
            if let Some(alias) = lookup_alias(token) {
                (alias.provider.as_str().to_string(), alias.model.to_string())
            } else if let Some((provider, _)) = token.split_once('-') {
                (provider.to_string(), token.to_string())
            } else {
                (token.to_string(), default_model_for(token).to_string())
            }
        }
    };

    tracing::debug!(address = spec, %provider, %model, "resolved address");

    Ok(Resolution {
        namespace: address.namespace,
        provider,
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MODEL_ALIASES;

    #[test]
    fn test_every_alias_resolves_to_its_table_entry() {
        for a in MODEL_ALIASES {
            let r = resolve(&format!("api:{}", a.alias)).unwrap();
            assert_eq!(r.namespace, Namespace::Api);
            assert_eq!(r.model, a.model, "alias {}", a.alias);
            assert_eq!(r.provider, a.provider.as_str(), "alias {}", a.alias);
        }
    }

    #[test]
    fn test_local_is_verbatim() {
        // `claude-opus` is an alias, but not in the local namespace.
        let r = resolve("local:claude-opus").unwrap();
        assert_eq!(r.namespace, Namespace::Local);
        assert_eq!(r.provider, "local");
        assert_eq!(r.model, "claude-opus");

        let r = resolve("local:deepseek-r1-8b").unwrap();
        assert_eq!(r.model, "deepseek-r1-8b");
    }

    #[test]
    fn test_local_token_keeps_inner_colons() {
        let r = resolve("local:llama3:70b").unwrap();
        assert_eq!(r.model, "llama3:70b");
    }

    #[test]
    fn test_provider_model_split() {
        let r = resolve("api:gpt-4o-2024-08-06").unwrap();
        assert_eq!(r.provider, "gpt");
        assert_eq!(r.model, "gpt-4o-2024-08-06");

        let r = resolve("api:openai-o1").unwrap();
        assert_eq!(r.provider, "openai");
        assert_eq!(r.model, "openai-o1");
    }

    #[test]
    fn test_bare_provider_uses_default_model() {
        let r = resolve("api:openai").unwrap();
        assert_eq!(r.provider, "openai");
        assert_eq!(r.model, "gpt-4-turbo-preview");
    }

    #[test]
    fn test_unknown_bare_provider_has_empty_model() {
        let r = resolve("api:mistral").unwrap();
        assert_eq!(r.provider, "mistral");
        assert_eq!(r.model, "");
    }

    #[test]
    fn test_provider_names_are_case_sensitive() {
        let r = resolve("api:Claude").unwrap();
        assert_eq!(r.provider, "Claude");
        assert_eq!(r.model, "");
    }

    #[test]
    fn test_malformed_addresses() {
        for spec in ["bogus", "api:", ":claude", "cloud:claude", ""] {
            let err = resolve(spec).unwrap_err();
            assert!(
                matches!(err, AskError::MalformedAddress(ref s) if s == spec),
                "{spec:?} gave {err:?}"
            );
        }
    }
}
