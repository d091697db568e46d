//! CLI argument parsing and the lookup command.

use crate::{config, output};
use anyhow::Result;
use clap::Parser;
use lookup::{ProviderKind, RaceError, Registry};
use std::{path::PathBuf, process::ExitCode};

/// Look up a Brazilian postal code on every provider and print the first
/// answer.
#[derive(Parser, Debug)]
#[command(name = "ceprace", about = "Race a CEP lookup across address providers")]
pub struct Cli {
    /// Postal code to look up (e.g. 01310-100). Forwarded as-is.
    #[arg(long)]
    pub cep: Option<String>,

    /// Config file path. Defaults to `~/.ceprace/config.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overall race budget in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Per-provider request budget in milliseconds.
    #[arg(long)]
    pub provider_timeout_ms: Option<u64>,

    /// Only race these providers (repeatable).
    #[arg(long = "only")]
    pub only: Vec<ProviderKind>,
}

impl Cli {
    /// Run the lookup and report the outcome.
    ///
    /// A missing code and a timed-out race both exit non-zero.
    pub async fn run(self) -> Result<ExitCode> {
        let Some(cep) = self.cep.as_deref().filter(|c| !c.is_empty()) else {
            eprintln!("{}", output::MISSING_CEP);
            return Ok(ExitCode::FAILURE);
        };

        let config = config::resolve(&self)?;
        let registry = Registry::from_config(&config)?;
        for provider in registry.providers() {
            let endpoint = provider.endpoint();
            tracing::debug!(
                provider = %provider.kind(),
                base_url = endpoint.base_url(),
                timeout = ?endpoint.timeout(),
                "registered provider"
            );
        }
        tracing::debug!(
            providers = ?registry.names(),
            race_timeout = ?registry.race_timeout(),
            "looking up {cep}"
        );

        match registry.lookup(cep).await {
            Ok(result) => {
                print!("{}", output::render(&result));
                Ok(ExitCode::SUCCESS)
            }
            Err(RaceError::Timeout(budget)) => {
                tracing::debug!("race timed out after {budget:?}");
                println!("{}", output::TIMEOUT);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
