//! BrasilAPI provider.

use crate::{Address, Lookup, LookupError, http::HttpEndpoint};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public BrasilAPI host.
pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

/// The BrasilAPI `cep/v1` endpoint.
#[derive(Debug, Clone)]
pub struct BrasilApi {
    http: HttpEndpoint,
}

impl BrasilApi {
    /// Create a provider against the public host.
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self::custom(client, DEFAULT_BASE_URL, timeout)
    }

    /// Create a provider against a custom host.
    pub fn custom(client: Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            http: HttpEndpoint::new(client, base_url, timeout),
        }
    }

    /// Get the underlying endpoint.
    pub fn endpoint(&self) -> &HttpEndpoint {
        &self.http
    }
}

/// Wire shape of a BrasilAPI answer.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Response {
    #[serde(deserialize_with = "super::nullable")]
    cep: String,
    #[serde(deserialize_with = "super::nullable")]
    street: String,
    #[serde(deserialize_with = "super::nullable")]
    neighborhood: String,
    #[serde(deserialize_with = "super::nullable")]
    city: String,
    #[serde(deserialize_with = "super::nullable")]
    state: String,
}

impl From<Response> for Address {
    fn from(r: Response) -> Self {
        Self {
            code: r.cep,
            street: r.street,
            neighborhood: r.neighborhood,
            city: r.city,
            region: r.state,
        }
    }
}

impl Lookup for BrasilApi {
    fn name(&self) -> &'static str {
        "BrasilAPI"
    }

    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        let body: Response = self.http.get_json(&format!("/api/cep/v1/{code}")).await?;
        Address::from(body).ensure_shape()
    }
}
