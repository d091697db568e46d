//! Address providers.
//!
//! `Lookup` is the capability the race coordinator is generic over.
//! `Provider` is the enum dispatch over the concrete backends, built from a
//! [`ProviderConfig`] by [`build_provider`].

use crate::{Address, LookupError, ProviderConfig, ProviderKind, http::HttpEndpoint};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub use {brasilapi::BrasilApi, viacep::ViaCep};

mod brasilapi;
mod viacep;

/// A single address service.
///
/// Constructors are inherent methods on each provider; only the lookup
/// itself is called polymorphically.
pub trait Lookup: Clone + Send + Sync + 'static {
    /// Display name stamped onto every result. Never empty.
    fn name(&self) -> &'static str;

    /// Look up `code` and normalize the answer.
    ///
    /// The code is forwarded as-is; validation is the service's business.
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Address, LookupError>> + Send;
}

/// Unified provider enum.
#[derive(Debug, Clone)]
pub enum Provider {
    /// BrasilAPI `cep/v1`.
    BrasilApi(BrasilApi),
    /// ViaCEP `ws/{cep}/json`.
    ViaCep(ViaCep),
}

impl Provider {
    /// Which backend this is.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::BrasilApi(_) => ProviderKind::BrasilApi,
            Self::ViaCep(_) => ProviderKind::ViaCep,
        }
    }

    /// The HTTP endpoint this provider talks to.
    pub fn endpoint(&self) -> &HttpEndpoint {
        match self {
            Self::BrasilApi(p) => p.endpoint(),
            Self::ViaCep(p) => p.endpoint(),
        }
    }
}

/// Construct a `Provider` from config and a shared HTTP client.
pub fn build_provider(
    config: &ProviderConfig,
    client: reqwest::Client,
    timeout: Duration,
) -> Provider {
    let base_url = config.base_url.as_deref();
    match config.provider {
        ProviderKind::BrasilApi => match base_url {
            Some(url) => Provider::BrasilApi(BrasilApi::custom(client, url, timeout)),
            None => Provider::BrasilApi(BrasilApi::new(client, timeout)),
        },
        ProviderKind::ViaCep => match base_url {
            Some(url) => Provider::ViaCep(ViaCep::custom(client, url, timeout)),
            None => Provider::ViaCep(ViaCep::new(client, timeout)),
        },
    }
}

impl Lookup for Provider {
    fn name(&self) -> &'static str {
        match self {
            Self::BrasilApi(p) => p.name(),
            Self::ViaCep(p) => p.name(),
        }
    }

    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        match self {
            Self::BrasilApi(p) => p.lookup(code).await,
            Self::ViaCep(p) => p.lookup(code).await,
        }
    }
}

/// Wire strings may be `null`; treat that the same as a missing key.
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
