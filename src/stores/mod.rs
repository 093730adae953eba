pub mod market;
pub mod store;
pub mod toast;
pub mod trades;

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on every guarded backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What a store operation reports back to its caller. Both kinds are logged
/// at the store boundary and re-signalled; presentation (e.g. an error toast)
/// is the UI layer's decision.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request timed out after 10 seconds")]
    Timeout,
    #[error(transparent)]
    Bridge(#[from] anyhow::Error),
}

/// Races a backend call against [`REQUEST_TIMEOUT`]; the first to settle
/// wins. The call runs on its own task, so when the timer wins it keeps
/// running to completion and its late result is discarded — no cancellation
/// reaches the backend.
pub(crate) async fn race_timeout<T, F>(call: F) -> Result<T, StoreError>
where
    F: Future<Output = anyhow::Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let in_flight = tokio::spawn(call);
    match tokio::time::timeout(REQUEST_TIMEOUT, in_flight).await {
        Ok(Ok(result)) => result.map_err(StoreError::Bridge),
        Ok(Err(join_err)) => Err(StoreError::Bridge(anyhow::anyhow!(
            "backend call aborted: {join_err}"
        ))),
        Err(_) => Err(StoreError::Timeout),
    }
}
