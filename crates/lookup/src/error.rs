//! Lookup and race errors.

use reqwest::StatusCode;
use std::time::Duration;

/// Why a single provider contributed nothing to a race.
///
/// The race coordinator absorbs these; callers only ever see [`RaceError`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Connection refused, DNS failure, or the per-provider timeout fired.
    #[error("transport: {0}")]
    Transport(#[source] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The body was not valid JSON for the provider's wire shape.
    #[error("decode: {0}")]
    Decode(#[source] reqwest::Error),
    /// The body was JSON but did not describe an address.
    #[error("response does not describe an address")]
    Shape,
    /// The lookup task panicked.
    #[error("lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Outcome of a race that produced no result.
#[derive(Debug, thiserror::Error)]
pub enum RaceError {
    /// No provider succeeded within the race budget. Covers both slow
    /// providers and providers that all failed early.
    #[error("no provider answered within {0:?}")]
    Timeout(Duration),
}
