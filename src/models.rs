//! Alias table for ask.
//!
//! Maps short model names (`claude-opus`, `gpt-4o`) to the upstream model
//! identifier and the provider family that serves it. This is the single
//! source of truth for both address resolution and `ask models`.

use crate::provider::ProviderKind;

/// A short model name and what it expands to.
pub struct ModelAlias {
    /// The token typed after `api:` (e.g. "claude-opus").
    pub alias: &'static str,
    /// Canonical upstream model identifier.
    pub model: &'static str,
    /// Provider family serving the model.
    pub provider: ProviderKind,
}

const fn alias(alias: &'static str, model: &'static str, provider: ProviderKind) -> ModelAlias {
    ModelAlias {
        alias,
        model,
        provider,
    }
}

/// Known aliases, grouped by provider.
pub const MODEL_ALIASES: &[ModelAlias] = &[
    // Claude
    alias("claude", "claude-3-5-sonnet-20241022", ProviderKind::Claude),
    alias("claude-3", "claude-3-5-sonnet-20241022", ProviderKind::Claude),
    alias("claude-3.5", "claude-3-5-sonnet-20241022", ProviderKind::Claude),
    alias("claude-opus", "claude-3-opus-20240229", ProviderKind::Claude),
    alias("claude-sonnet", "claude-3-5-sonnet-20241022", ProviderKind::Claude),
    alias("claude-haiku", "claude-3-haiku-20240307", ProviderKind::Claude),
    // OpenAI
    alias("gpt-4", "gpt-4-turbo-preview", ProviderKind::OpenAI),
    alias("gpt-4-turbo", "gpt-4-turbo-preview", ProviderKind::OpenAI),
    alias("gpt-3.5", "gpt-3.5-turbo", ProviderKind::OpenAI),
    alias("gpt-4o", "gpt-4o", ProviderKind::OpenAI),
    alias("gpt-4o-mini", "gpt-4o-mini", ProviderKind::OpenAI),
    // Gemini
    alias("gemini", "gemini-1.5-pro", ProviderKind::Gemini),
    alias("gemini-pro", "gemini-1.5-pro", ProviderKind::Gemini),
    alias("gemini-flash", "gemini-1.5-flash", ProviderKind::Gemini),
    // Cohere
    alias("cohere", "command-r-plus", ProviderKind::Cohere),
    alias("command", "command-r-plus", ProviderKind::Cohere),
    alias("command-light", "command-r", ProviderKind::Cohere),
];

/// Looks up an alias by its exact token.
pub fn lookup_alias(token: &str) -> Option<&'static ModelAlias> {
    MODEL_ALIASES.iter().find(|a| a.alias == token)
}

/// Iterates the aliases belonging to one provider family.
pub fn aliases_for(provider: ProviderKind) -> impl Iterator<Item = &'static ModelAlias> {
    MODEL_ALIASES.iter().filter(move |a| a.provider == provider)
}
