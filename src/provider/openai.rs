//! OpenAI Chat Completions API.

use serde::Deserialize;
use serde_json::json;

use super::adapter::{decode, missing, Adapter, HttpRequest, RemoteTarget};
use crate::error::Result;

pub struct OpenAi;

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl Adapter for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn build_request(&self, target: &RemoteTarget, prompt: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/chat/completions", target.base_url),
            query: Vec::new(),
            headers: vec![("authorization", format!("Bearer {}", target.api_key))],
            body: json!({
                "model": target.model,
                "messages": [{"role": "user", "content": prompt}],
            }),
        }
    }

    fn extract_text(&self, body: &[u8]) -> Result<String> {
        let response: CompletionResponse = decode(self.name(), body)?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| missing(self.name(), "choices[0].message.content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::adapter::target;

    #[test]
    fn test_request() {
        let req = OpenAi.build_request(&target("gpt-4o"), "hi");
        assert_eq!(req.url, "https://example.test/v1/chat/completions");
        assert_eq!(req.headers, vec![("authorization", "Bearer sk-test".to_string())]);
        assert_eq!(
            req.body,
            json!({"model": "gpt-4o", "messages": [{"role": "user", "content": "hi"}]})
        );
    }

    #[test]
    fn test_extract() {
        let body = br#"{"choices":[{"index":0,"message":{"role":"assistant","content":"hello"}}]}"#;
        assert_eq!(OpenAi.extract_text(body).unwrap(), "hello");
    }

    #[test]
    fn test_extract_null_content() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(OpenAi.extract_text(body).is_err());
        assert!(OpenAi.extract_text(br#"{"choices":[]}"#).is_err());
    }
}
