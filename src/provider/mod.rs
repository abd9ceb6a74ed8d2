//! LLM provider abstraction for ask.
//!
//! One adapter per remote API family (Claude, OpenAI, Gemini, Cohere)
//! plus the local runtime, all selected by [`ProviderKind`] and driven
//! through [`Provider`].

mod adapter;
mod claude;
mod client;
mod cohere;
mod gemini;
mod kind;
mod local;
mod openai;
mod transport;

pub use client::Provider;
pub use kind::{default_base_url_for, default_model_for, ProviderKind};
