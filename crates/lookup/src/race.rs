//! First-success race across providers.

use crate::{Lookup, LookupError, LookupResult, RaceError};
use futures_concurrency::future::RaceOk;
use std::time::Duration;

/// Look `code` up on every provider concurrently and keep the first success.
///
/// Each provider runs in its own spawned task. Failed lookups contribute
/// nothing; the race keeps waiting on the others. If every provider fails
/// early the race still waits out `timeout`, so "all failed" and "all too
/// slow" are the same outcome.
///
/// Losers are detached, not aborted: dropping a `JoinHandle` leaves the task
/// running until its own request finishes or times out, and its result is
/// discarded.
pub async fn race<P: Lookup>(
    providers: &[P],
    code: &str,
    timeout: Duration,
) -> Result<LookupResult, RaceError> {
    let contenders: Vec<_> = providers
        .iter()
        .cloned()
        .map(|provider| {
            let code = code.to_owned();
            let task = tokio::spawn(async move {
                let name = provider.name();
                match provider.lookup(&code).await {
                    Ok(address) => Ok(LookupResult {
                        provider: name,
                        address,
                    }),
                    Err(e) => {
                        tracing::debug!(provider = name, "lookup failed: {e}");
                        Err(e)
                    }
                }
            });
            async move {
                match task.await {
                    Ok(outcome) => outcome,
                    Err(e) => Err(LookupError::from(e)),
                }
            }
        })
        .collect();

    let first = async {
        match contenders.race_ok().await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!("every provider failed, waiting out the race");
                std::future::pending().await
            }
        }
    };

    match tokio::time::timeout(timeout, first).await {
        Ok(result) => {
            tracing::debug!(provider = result.provider, "race won");
            Ok(result)
        }
        Err(_) => Err(RaceError::Timeout(timeout)),
    }
}
