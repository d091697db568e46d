//! ViaCEP provider.

use crate::{Address, Lookup, LookupError, http::HttpEndpoint};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public ViaCEP host. Served over plain HTTP.
pub const DEFAULT_BASE_URL: &str = "http://viacep.com.br";

/// The ViaCEP `ws/{cep}/json` endpoint.
#[derive(Debug, Clone)]
pub struct ViaCep {
    http: HttpEndpoint,
}

impl ViaCep {
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

/// Wire shape of a ViaCEP answer. Unknown answers come back as
/// `{"erro": true}`, which decodes to an empty `cep`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Response {
    #[serde(deserialize_with = "super::nullable")]
    cep: String,
    #[serde(deserialize_with = "super::nullable")]
    logradouro: String,
    #[serde(deserialize_with = "super::nullable")]
    bairro: String,
    #[serde(deserialize_with = "super::nullable")]
    localidade: String,
    #[serde(deserialize_with = "super::nullable")]
    uf: String,
}

impl From<Response> for Address {
    fn from(r: Response) -> Self {
        Self {
            code: r.cep,
            street: r.logradouro,
            neighborhood: r.bairro,
            city: r.localidade,
            region: r.uf,
        }
    }
}

impl Lookup for ViaCep {
    fn name(&self) -> &'static str {
        "ViaCEP"
    }

    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        let body: Response = self.http.get_json(&format!("/ws/{code}/json/")).await?;
        Address::from(body).ensure_shape()
    }
}
