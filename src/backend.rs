use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::HeaderMap;
use serde_json::Value;

use crate::config::BackendConfig;

/// Failures a backend call can surface. Parse failures stay distinguishable
/// from transport failures so callers can report them separately.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("{0}")]
    Transport(String),
    #[error("Could not parse response")]
    InvalidBody,
}

/// Narrow seam over the proxied database. The session cookie travels inside
/// the forwarded header map; implementations must not attach credentials of
/// their own.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// GET `path` and parse the body as JSON.
    async fn get_json(&self, path: &str, headers: &HeaderMap) -> Result<Value, BackendError>;

    /// HEAD `path`, returning only the response status code.
    async fn head(&self, path: &str, headers: &HeaderMap) -> Result<u16, BackendError>;
}

/// Default implementation speaking plain HTTP via reqwest.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Forward the caller's headers as-is, minus the ones the transport
    /// derives from the target itself.
    fn forward_headers(headers: &HeaderMap) -> HeaderMap {
        let mut forwarded = headers.clone();
        forwarded.remove(HOST);
        forwarded.remove(CONTENT_LENGTH);
        forwarded
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn get_json(&self, path: &str, headers: &HeaderMap) -> Result<Value, BackendError> {
        let response = self
            .client
            .get(self.url(path))
            .headers(Self::forward_headers(headers))
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        // The status line is not inspected here: an error body from the
        // database is still JSON and the caller decides what its fields mean.
        response
            .json::<Value>()
            .await
            .map_err(|_| BackendError::InvalidBody)
    }

    async fn head(&self, path: &str, headers: &HeaderMap) -> Result<u16, BackendError> {
        let response = self
            .client
            .head(self.url(path))
            .headers(Self::forward_headers(headers))
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        Ok(response.status().as_u16())
    }
}
