//! Google Gemini `generateContent` API.
//!
//! Unlike the other providers the credential travels in the query string.

use serde::Deserialize;
use serde_json::json;

use super::adapter::{decode, missing, Adapter, HttpRequest, RemoteTarget};
use crate::error::Result;

pub struct Gemini;

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl Adapter for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn build_request(&self, target: &RemoteTarget, prompt: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/models/{}:generateContent", target.base_url, target.model),
            query: vec![("key", target.api_key.clone())],
            headers: Vec::new(),
            body: json!({
                "contents": [{"parts": [{"text": prompt}]}],
            }),
        }
    }

    fn extract_text(&self, body: &[u8]) -> Result<String> {
        let response: GenerateResponse = decode(self.name(), body)?;
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| missing(self.name(), "candidates[0].content.parts[0].text"))
    }
}
