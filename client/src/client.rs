use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::{ApiError, Result};
use crate::response::ApiResponse;

/// HTTP client for the Meridian REST API.
///
/// Entity endpoints are reached through accessor methods (`items()`,
/// `purchase_orders()`, ...), each returning a borrowing service value
/// whose methods map 1:1 to backend endpoints.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub(crate) async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.get(self.url(path)).bearer_auth(&self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute("GET", path, request).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.api_key)
            .json(body);
        self.execute("POST", path, request).await
    }

    /// POST without a body, for RPC-style actions such as `approve`.
    pub(crate) async fn post_action<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).bearer_auth(&self.api_key);
        self.execute("POST", path, request).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .put(self.url(path))
            .bearer_auth(&self.api_key)
            .json(body);
        self.execute("PUT", path, request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self.http.delete(self.url(path)).bearer_auth(&self.api_key);
        self.roundtrip::<serde_json::Value>("DELETE", path, request)
            .await?;
        Ok(())
    }

    async fn execute<T>(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let envelope = self.roundtrip(method, path, request).await?;
        envelope.data.ok_or_else(|| {
            ApiError::Decode(format!("{} {}: response contained no data", method, path))
        })
    }

    async fn roundtrip<T>(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(method, path, "sending API request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(method, path, status = status.as_u16(), "API request failed");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body)
            .map_err(|err| ApiError::Decode(format!("{} {}: {}", method, path, err)))?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(method, path, "API reported failure");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(envelope)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pulls the server-reported message out of an error body, falling back to
/// the raw text for non-envelope bodies.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(body) {
        Ok(envelope) => envelope.error.unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Percent-encodes one path segment; record keys may contain `/` or spaces.
pub(crate) fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("A-100"), "A-100");
        assert_eq!(encode_path_segment("A/B"), "A%2FB");
        assert_eq!(encode_path_segment("A B"), "A%20B");
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"success": false, "error": "record not found"}"#;
        assert_eq!(error_message(body), "record not found");
    }

    #[test]
    fn test_error_message_raw_fallback() {
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            ApiClient::new(ClientConfig::new("https://erp.example.com/api/v1/", "key")).unwrap();
        assert_eq!(client.url("/items"), "https://erp.example.com/api/v1/items");
    }
}
