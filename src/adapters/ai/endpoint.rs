//! Connection settings and request plumbing shared by the HTTP model clients.

use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::ports::AIError;

/// Where and how to reach a hosted model.
#[derive(Debug, Clone)]
pub struct ModelEndpoint {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ModelEndpoint {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: model.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Client honouring `timeout`. If the builder fails (TLS backend
    /// initialisation) a default client without a request timeout is used
    /// and the loss is logged.
    pub(crate) fn client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = self.timeout.as_secs(),
                    "could not build model HTTP client, requests will not time out"
                );
                Client::new()
            })
    }
}

/// Sends a prepared request and decodes the JSON body of a success reply.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    timeout: Duration,
) -> Result<T, AIError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            AIError::TimedOut(timeout.as_secs())
        } else {
            AIError::Unreachable(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AIError::from_status(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AIError::BadReply(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let endpoint = ModelEndpoint::new("k", "m", "http://localhost:9000/v1/");
        assert_eq!(endpoint.url("/chat/completions"), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn debug_output_hides_key() {
        let endpoint = ModelEndpoint::new("sk-very-secret", "m", "http://x");
        assert!(!format!("{:?}", endpoint).contains("sk-very-secret"));
        assert_eq!(endpoint.api_key(), "sk-very-secret");
    }

    #[tokio::test]
    async fn client_applies_configured_timeout() {
        // Accepts the connection and never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let endpoint = ModelEndpoint::new("k", "m", format!("http://{addr}"))
            .with_timeout(Duration::from_millis(200));
        let request = endpoint.client().get(endpoint.url("hang"));
        let result: Result<serde_json::Value, AIError> =
            send_json(request, endpoint.timeout).await;

        assert_eq!(result, Err(AIError::TimedOut(0)));
        silent.abort();
    }

    #[test]
    fn timeout_defaults_to_a_minute() {
        let endpoint = ModelEndpoint::new("k", "m", "http://x");
        assert_eq!(endpoint.timeout, Duration::from_secs(60));
        let endpoint = endpoint.with_timeout(Duration::from_secs(5));
        assert_eq!(endpoint.timeout, Duration::from_secs(5));
    }
}
