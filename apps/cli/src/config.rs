//! Config resolution: defaults, then the config file, then flags.

use crate::Cli;
use anyhow::{Context, Result};
use lookup::Config;
use std::path::{Path, PathBuf};

/// Config file name inside the global config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the global configuration directory (`~/.ceprace/`).
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ceprace"))
}

/// Build the effective config for one invocation.
///
/// An explicit `--config` must exist; the global file is optional.
pub fn resolve(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => match global_config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => load(&path)?,
            _ => Config::default(),
        },
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

/// Apply command-line overrides on top of a loaded config.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ms) = cli.timeout_ms {
        config.race_timeout_ms = ms;
    }
    if let Some(ms) = cli.provider_timeout_ms {
        config.provider_timeout_ms = ms;
    }
    config.restrict(&cli.only);
}

fn load(path: &Path) -> Result<Config> {
    let config = Config::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    tracing::debug!("loaded configuration from {}", path.display());
    Ok(config)
}
