//! Anthropic Messages API.

use serde::Deserialize;
use serde_json::json;

use super::adapter::{decode, missing, Adapter, HttpRequest, RemoteTarget};
use crate::constants::{ANTHROPIC_API_VERSION, MAX_TOKENS};
use crate::error::Result;

pub struct Claude;

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl Adapter for Claude {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn build_request(&self, target: &RemoteTarget, prompt: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/messages", target.base_url),
            query: Vec::new(),
            headers: vec![
                ("x-api-key", target.api_key.clone()),
                ("anthropic-version", ANTHROPIC_API_VERSION.to_string()),
            ],
            body: json!({
                "model": target.model,
                "messages": [{"role": "user", "content": prompt}],
                "max_tokens": MAX_TOKENS,
            }),
        }
    }

    fn extract_text(&self, body: &[u8]) -> Result<String> {
        let response: MessagesResponse = decode(self.name(), body)?;
        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| missing(self.name(), "content[0].text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::adapter::target;

    #[test]
    fn test_request() {
        let req = Claude.build_request(&target("claude-3-5-sonnet-20241022"), "hi");
        assert_eq!(req.url, "https://example.test/v1/messages");
        assert!(req.headers.contains(&("x-api-key", "sk-test".to_string())));
        assert!(req.headers.contains(&("anthropic-version", "2023-06-01".to_string())));
        assert_eq!(
            req.body,
            json!({
                "model": "claude-3-5-sonnet-20241022",
                "messages": [{"role": "user", "content": "hi"}],
                "max_tokens": 4096
            })
        );
    }

    #[test]
    fn test_extract() {
        let text = Claude
            .extract_text(br#"{"content":[{"text":"hello"}]}"#)
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_extract_empty_content() {
        assert!(Claude.extract_text(br#"{"content":[]}"#).is_err());
        assert!(Claude.extract_text(br#"{"content":[{"type":"tool_use"}]}"#).is_err());
        assert!(Claude.extract_text(br#"{"content":[{"text":42}]}"#).is_err());
    }
}
