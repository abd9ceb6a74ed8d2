//! HTTP transport shared by all remote adapters.

use std::time::Duration;

use crate::constants::REQUEST_TIMEOUT;
use crate::error::{AskError, Result};

use super::adapter::HttpRequest;

/// A `reqwest` client with ask's uniform timeout.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Builds a client whose every call is bounded by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }

    /// POSTs `request` and returns the response body.
    ///
    /// A non-success status becomes [`AskError::Upstream`] carrying the
    /// status line and the raw body.
    pub async fn post_json(&self, request: &HttpRequest) -> Result<Vec<u8>> {
        tracing::debug!(url = %request.url, "sending request");

        let mut builder = self
            .inner
            .post(&request.url)
            .query(&request.query)
            .json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(AskError::Upstream {
                status: status.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(server: &MockServer, route: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}{route}", server.uri()),
            query: Vec::new(),
            headers: vec![("x-api-key", "sk-test".to_string())],
            body: json!({"model": "m"}),
        }
    }

    #[tokio::test]
    async fn test_post_sends_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", "sk-test"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"model": "m"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let body = HttpClient::new()
            .unwrap()
            .post_json(&request(&server, "/messages"))
            .await
            .unwrap();
        assert_eq!(body, b"{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_unauthorized_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid x-api-key\"}"),
            )
            .mount(&server)
            .await;

        let err = HttpClient::new()
            .unwrap()
            .post_json(&request(&server, "/messages"))
            .await
            .unwrap_err();
        match err {
            AskError::Upstream { status, body } => {
                assert_eq!(status, "401 Unauthorized");
                assert_eq!(body, "{\"error\":\"invalid x-api-key\"}");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind and drop a listener so the port is closed.
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let req = HttpRequest {
            url: format!("{uri}/chat"),
            query: Vec::new(),
            headers: Vec::new(),
            body: json!({}),
        };
        let err = HttpClient::new().unwrap().post_json(&req).await.unwrap_err();
        assert!(matches!(err, AskError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_query_values_are_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/m:generateContent"))
            .and(query_param("key", "a&b#c+d"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut req = request(&server, "/models/m:generateContent");
        req.query = vec![("key", "a&b#c+d".to_string())];
        HttpClient::new().unwrap().post_json(&req).await.unwrap();
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let err = HttpClient::with_timeout(Duration::from_millis(200))
            .unwrap()
            .post_json(&request(&server, "/chat"))
            .await
            .unwrap_err();
        match err {
            AskError::Transport(e) => assert!(e.is_timeout(), "{e:?}"),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
