//! Shared HTTP transport for the JSON address providers.
//!
//! `HttpEndpoint` wraps a `reqwest::Client` with pre-built headers, a base
//! URL and a per-request timeout. Each provider owns one and only supplies
//! the path and its wire shape.

use crate::LookupError;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL plus transport settings for one provider.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: Client,
    headers: HeaderMap,
    base_url: String,
    timeout: Duration,
}

impl HttpEndpoint {
    /// Create an endpoint rooted at `base_url`. A trailing slash is dropped
    /// so paths can always start with `/`.
    pub fn new(client: Client, base_url: &str, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout,
        }
    }

    /// `GET {base_url}{path}` and decode the body as `T`.
    ///
    /// The per-request timeout covers the whole exchange, body included.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = self.url(path);
        tracing::trace!("request: GET {url}");
        let response = self
            .client
            .request(Method::GET, &url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        response.json::<T>().await.map_err(LookupError::Decode)
    }

    /// Join `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
