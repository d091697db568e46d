//! Lookup configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) races
//! both public providers with one-second budgets.

use anyhow::{Result, bail};
use serde::Deserialize;
use std::{fmt, path::Path, str::FromStr, time::Duration};

/// Default per-provider and race budget, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Top-level lookup configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounds one provider's HTTP exchange.
    pub provider_timeout_ms: u64,
    /// Bounds the whole race.
    pub race_timeout_ms: u64,
    /// Providers to race (`[[providers]]` array), in registration order.
    pub providers: Vec<ProviderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_timeout_ms: DEFAULT_TIMEOUT_MS,
            race_timeout_ms: DEFAULT_TIMEOUT_MS,
            providers: vec![
                ProviderConfig::new(ProviderKind::BrasilApi),
                ProviderConfig::new(ProviderKind::ViaCep),
            ],
        }
    }
}

impl Config {
    /// Parse a TOML string into a `Config`.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Per-provider request budget.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    /// Overall race budget.
    pub fn race_timeout(&self) -> Duration {
        Duration::from_millis(self.race_timeout_ms)
    }

    /// Providers that take part in the race.
    pub fn enabled(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.iter().filter(|p| p.enabled)
    }

    /// Disable every provider whose kind is not in `kinds`. An empty slice
    /// leaves the set untouched.
    pub fn restrict(&mut self, kinds: &[ProviderKind]) {
        if kinds.is_empty() {
            return;
        }
        for provider in &mut self.providers {
            if !kinds.contains(&provider.provider) {
                provider.enabled = false;
            }
        }
    }

    /// Check the config can drive a race.
    pub fn validate(&self) -> Result<()> {
        if self.provider_timeout_ms == 0 {
            bail!("provider_timeout_ms must be greater than zero");
        }
        if self.race_timeout_ms == 0 {
            bail!("race_timeout_ms must be greater than zero");
        }
        if self.enabled().next().is_none() {
            bail!("at least one enabled provider is required");
        }
        Ok(())
    }
}

/// One `[[providers]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Which backend to talk to.
    pub provider: ProviderKind,
    /// Optional base URL override for the provider host.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whether this entry takes part in the race.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ProviderConfig {
    /// An enabled entry against the provider's public host.
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            base_url: None,
            enabled: true,
        }
    }
}

/// Supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// brasilapi.com.br
    BrasilApi,
    /// viacep.com.br
    ViaCep,
}

impl ProviderKind {
    /// Config-file spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrasilApi => "brasil_api",
            Self::ViaCep => "via_cep",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    /// Accepts the config spelling, dashes, or the bare service name.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "brasil_api" | "brasilapi" => Ok(Self::BrasilApi),
            "via_cep" | "viacep" => Ok(Self::ViaCep),
            other => bail!("unknown provider '{other}'"),
        }
    }
}

fn default_true() -> bool {
    true
}
