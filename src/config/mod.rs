//! Configuration store for ask.
//!
//! Ask keeps one JSON file (`~/.ask/config.json`) mapping each address the
//! user has added to the provider, credential, endpoint and model it
//! resolved to. The file is read once at startup and rewritten in full on
//! every change.

mod paths;
mod resolve;
mod store;
mod types;

pub use store::ConfigStore;
pub use types::ProviderConfig;
