//! HTTP transport for the insight API.
//!
//! Owns the reqwest client, the default auth headers, and the status-code
//! classification policy. Everything above this layer works with typed
//! errors and `serde_json::Value` bodies; no reqwest error ever escapes.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::options::TransportConfig;

const API_KEY_HEADER: &str = "x-api-key";
const PROVIDER_KEY_HEADER: &str = "x-provider-key";

/// Low-level client for the insight API.
///
/// Constructed once from a [`TransportConfig`]; all mutation happens at
/// construction (default headers, TLS policy, timeout), so a `Transport` can
/// be shared read-only across tasks.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl Transport {
    /// Build a transport from configuration. Both keys become default
    /// headers on every request.
    pub fn new(config: TransportConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(config.api_key.expose_secret())
                .map_err(|_| ClientError::validation("API key is not a valid header value", None))?,
        );
        headers.insert(
            PROVIDER_KEY_HEADER,
            HeaderValue::from_str(config.provider_key.expose_secret()).map_err(|_| {
                ClientError::validation("provider key is not a valid header value", None)
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // The timeout is applied per synchronous request, not on the client:
        // streaming connections are held open indefinitely.
        let http = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_certificates)
            .build()
            .map_err(|e| ClientError::api(e.to_string(), None))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn with_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET an endpoint with query parameters. Structured parameters must be
    /// passed pre-serialized as JSON strings; the transport does not
    /// structure-encode query values.
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let request = self.with_timeout(self.http.get(&url).query(query));
        let response = request.send().await?;
        Self::json_body(response).await
    }

    /// POST a JSON body to an endpoint.
    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ClientError> {
        let url = self.url(endpoint);
        debug!(%url, "POST");
        let request = self.with_timeout(self.http.post(&url).json(body));
        let response = request.send().await?;
        Self::json_body(response).await
    }

    /// Open a long-lived streaming POST. The status line is classified here;
    /// the open response is handed to the streaming normalizer, which is
    /// where mid-stream failures become typed errors. The configured timeout
    /// is not applied: the connection is held until the server closes it.
    pub async fn stream(&self, endpoint: &str, body: &Value) -> Result<Response, ClientError> {
        let url = self.url(endpoint);
        debug!(%url, "POST (streaming)");
        let response = self.http.post(&url).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Classify a non-2xx status into the error taxonomy, reading the body
    /// as the error message.
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        debug!(%status, "response status");
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_string());
        warn!(%status, body, "API request failed");

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ClientError::authentication(body, Some(code))
            }
            StatusCode::TOO_MANY_REQUESTS => ClientError::rate_limit(body, Some(code)),
            _ => ClientError::api(body, Some(code)),
        })
    }

    async fn json_body(response: Response) -> Result<Value, ClientError> {
        let response = Self::check_status(response).await?;
        let status = response.status().as_u16();
        response
            .json()
            .await
            .map_err(|e| ClientError::api(format!("invalid JSON response: {e}"), Some(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transport(base_url: String) -> Transport {
        Transport::new(TransportConfig::new(base_url, "test-key", "provider-key")).unwrap()
    }

    #[test]
    fn invalid_header_value_is_rejected_at_construction() {
        let config = TransportConfig::new("https://api.test".to_string(), "bad\nkey", "ok");
        let err = Transport::new(config).unwrap_err();
        assert!(matches!(err, ClientError::Validation { .. }));
    }

    #[tokio::test]
    async fn get_sends_auth_headers_and_parses_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header(API_KEY_HEADER, "test-key")
            .match_header(PROVIDER_KEY_HEADER, "provider-key")
            .with_status(200)
            .with_body("{\"ok\": true}")
            .create_async()
            .await;

        let body = transport(server.url()).get("/ping", &[]).await.unwrap();
        assert_eq!(body, json!({"ok": true}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn forbidden_maps_to_authentication_error_with_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let err = transport(server.url()).get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Authentication { .. }));
        assert!(err.message().contains("forbidden"));
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn unauthorized_post_maps_to_authentication_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/strategy")
            .with_status(401)
            .with_body("bad key")
            .create_async()
            .await;

        let err = transport(server.url())
            .post("/strategy", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Authentication { .. }));
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limit() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(429)
            .with_body("slow down")
            .create_async()
            .await;

        let err = transport(server.url()).get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::RateLimit { .. }));
        assert_eq!(err.message(), "slow down");
    }

    #[tokio::test]
    async fn server_error_maps_to_generic_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let err = transport(server.url()).get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn malformed_success_body_maps_to_generic_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = transport(server.url()).get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
        assert!(err.message().contains("invalid JSON response"));
    }

    #[tokio::test]
    async fn timeout_applies_to_synchronous_calls() {
        use std::io::Write;

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/slow")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(400));
                w.write_all(b"{}")
            })
            .create_async()
            .await;

        let config = TransportConfig::new(server.url(), "test-key", "provider-key")
            .with_timeout(Duration::from_millis(100));
        let err = Transport::new(config)
            .unwrap()
            .get("/slow", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
    }

    #[tokio::test]
    async fn stream_outlives_configured_timeout() {
        use std::io::Write;

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/stream")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(400));
                w.write_all(b"{\"type\":\"complete\",\"content\":{}}\n")
            })
            .create_async()
            .await;

        let config = TransportConfig::new(server.url(), "test-key", "provider-key")
            .with_timeout(Duration::from_millis(100));
        let response = Transport::new(config)
            .unwrap()
            .stream("/stream", &json!({}))
            .await
            .unwrap();
        let body = response.text().await.unwrap();
        assert!(body.contains("complete"));
    }

    #[tokio::test]
    async fn network_failure_maps_to_generic_api_error() {
        // Unroutable port: connection refused.
        let t = transport("http://127.0.0.1:1".to_string());
        let err = t.get("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
    }
}
