//! Cohere Chat API (v1).

use serde::Deserialize;
use serde_json::json;

use super::adapter::{decode, Adapter, HttpRequest, RemoteTarget};
use crate::error::Result;

pub struct Cohere;

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

impl Adapter for Cohere {
    fn name(&self) -> &'static str {
        "cohere"
    }

    fn build_request(&self, target: &RemoteTarget, prompt: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/chat", target.base_url),
            query: Vec::new(),
            headers: vec![("authorization", format!("Bearer {}", target.api_key))],
            body: json!({
                "model": target.model,
                "message": prompt,
            }),
        }
    }

    fn extract_text(&self, body: &[u8]) -> Result<String> {
        let response: ChatResponse = decode(self.name(), body)?;
        Ok(response.text)
    }
}
