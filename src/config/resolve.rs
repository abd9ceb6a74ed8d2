//! Environment variable substitution and credential resolution.

use super::types::ProviderConfig;
use crate::provider::ProviderKind;

impl ProviderConfig {
    /// Returns the credential to send.
    ///
    /// `{env:VAR}` placeholders in the stored key are substituted. When the
    /// result is empty the provider's conventional variable (e.g.
    /// `ANTHROPIC_API_KEY`) is used instead.
    pub fn resolved_api_key(&self, kind: ProviderKind) -> Option<String> {
        let stored = self.api_key.as_deref().map(resolve_str).unwrap_or_default();
        if !stored.is_empty() {
            return Some(stored);
        }
        kind.api_key_env()
            .and_then(|var| std::env::var(var).ok())
            .filter(|val| !val.is_empty())
    }

    /// Returns the stored base URL with placeholders substituted and any
    /// trailing `/` removed.
    pub fn resolved_base_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|url| resolve_str(url).trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
    }
}

/// Replace `{env:VAR}` with the environment variable value.
fn resolve_str(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(start) = result[from..].find("{env:").map(|i| from + i) {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 5..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        from = start + value.len();
    }
    result
}
