//! Request deadline for browser fetches.

use std::future::Future;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;

use chat_types::{ChatError, Result};

/// Race `fut` against a timer. The losing branch is dropped, which aborts
/// nothing on the JS side but stops us from waiting on it.
pub async fn with_timeout<F, T>(timeout_ms: u32, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let timer = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(fut);
    futures::pin_mut!(timer);

    match future::select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Request timed out after {}ms", timeout_ms);
            Err(ChatError::Timeout(timeout_ms))
        }
    }
}
