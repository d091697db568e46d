//! `Registry` holds the configured provider set and race budget.

use crate::{Config, Lookup, LookupResult, Provider, RaceError, build_provider, race};
use anyhow::Result;
use std::time::Duration;

/// The providers taking part in a race, plus the race budget.
///
/// Built fresh per invocation; nothing is cached between lookups.
#[derive(Debug, Clone)]
pub struct Registry {
    providers: Vec<Provider>,
    race_timeout: Duration,
}

impl Registry {
    /// Build every enabled provider from config, sharing one HTTP client.
    ///
    /// Returns an error if the config fails validation or the client cannot
    /// be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder().build()?;
        let providers = config
            .enabled()
            .map(|p| build_provider(p, client.clone(), config.provider_timeout()))
            .collect();

        Ok(Self::new(providers, config.race_timeout()))
    }

    /// Create a registry from already-built providers.
    pub fn new(providers: Vec<Provider>, race_timeout: Duration) -> Self {
        Self {
            providers,
            race_timeout,
        }
    }

    /// Race `code` across every provider.
    pub async fn lookup(&self, code: &str) -> Result<LookupResult, RaceError> {
        race(&self.providers, code, self.race_timeout).await
    }

    /// Registered providers, in race order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Display names of the registered providers.
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(Lookup::name).collect()
    }

    /// The race budget.
    pub fn race_timeout(&self) -> Duration {
        self.race_timeout
    }
}
