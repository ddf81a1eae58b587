//! Webhook client
//!
//! One POST per call. Non-2xx responses are not treated as transport
//! failures; whether the body matters is up to each caller.

use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::Result;

/// Resolve an endpoint URL against the webhook base.
///
/// The base already ends in a slash, so a leading slash on the path is
/// stripped before concatenation to avoid a double slash. An empty path
/// yields the base verbatim.
pub fn webhook_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base}{path}")
}

#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    base: String,
}

impl WebhookClient {
    /// Create a client over the given webhook prefix.
    ///
    /// The base must be an absolute URL; a missing trailing slash is added
    /// so endpoint resolution never produces a double slash.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        Self::build(base.into(), None)
    }

    /// Like [`WebhookClient::new`], with a per-request timeout. Requests are
    /// still single-attempt; a timeout is surfaced as a transport failure.
    pub fn with_timeout(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::build(base.into(), Some(timeout))
    }

    fn build(mut base: String, timeout: Option<Duration>) -> Result<Self> {
        // Validate early so a bad base fails at construction, not per call
        Url::parse(&base)?;
        if !base.ends_with('/') {
            base.push('/');
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base })
    }

    /// Full URL of an endpoint under this client's base.
    pub fn endpoint(&self, path: &str) -> String {
        webhook_url(&self.base, path)
    }

    /// POST a JSON body. Errors only on transport failure (connect, timeout);
    /// an HTTP error status still resolves to `Ok`.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST webhook");

        let response = self.http.post(&url).json(body).send().await?;
        Ok(response)
    }

    /// POST a JSON body and decode the response body as JSON. A body that is
    /// not valid JSON counts as a transport-level failure.
    pub async fn post_value<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let response = self.post(path, body).await?;
        let value = response.json().await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/webhook/";

    #[test]
    fn test_webhook_url_empty_path() {
        assert_eq!(webhook_url(BASE, ""), BASE);
    }

    #[test]
    fn test_webhook_url_leading_slash() {
        // Leading slash or not, same endpoint, no double slash
        assert_eq!(
            webhook_url(BASE, "/login"),
            "https://example.com/webhook/login"
        );
        assert_eq!(webhook_url(BASE, "login"), webhook_url(BASE, "/login"));
    }

    #[test]
    fn test_client_normalizes_base() {
        let client = WebhookClient::new("https://example.com/webhook").unwrap();
        assert_eq!(
            client.endpoint("login"),
            "https://example.com/webhook/login"
        );
    }

    #[test]
    fn test_client_rejects_relative_base() {
        assert!(WebhookClient::new("webhook/").is_err());
    }

    #[tokio::test]
    async fn test_post_transport_failure() {
        // Nothing listens on port 1; the single attempt fails fast
        let client = WebhookClient::new("http://127.0.0.1:1/webhook/").unwrap();
        let result = client.post(crate::PATH_LOGIN, &serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
