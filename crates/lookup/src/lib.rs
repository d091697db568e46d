//! Postal-code lookup: provider adapters, the first-success race, and the
//! registry that wires them together from configuration.
//!
//! Each `Provider` calls one address service and normalizes its wire shape
//! into [`Address`]. [`race`] fans a code out to every provider and keeps
//! the first success, bounded by a race timeout. Losing lookups are
//! detached, never cancelled.

pub mod address;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod race;
pub mod registry;

pub use {
    address::{Address, LookupResult},
    config::{Config, ProviderConfig, ProviderKind},
    error::{LookupError, RaceError},
    provider::{BrasilApi, Lookup, Provider, ViaCep, build_provider},
    race::race,
    registry::Registry,
};
