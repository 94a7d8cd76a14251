//! Browser implementations of the fetch seams.
//!
//! [`GlooTransport`] sends requests with `gloo-net` and races each one
//! against a timer; [`BrowserSleeper`] waits on a `setTimeout` future.

use std::future::Future;

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::{HttpResponse, HttpTransport, Sleeper};

/// JSON POST over the Fetch API with a per-attempt timeout.
#[derive(Debug, Clone, Copy)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT_MS)
    }
}

impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, FetchError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Headers and body share one deadline
        let exchange = async move {
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = response.status();
            let status_text = response.status_text();
            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok::<_, FetchError>(HttpResponse::new(status, status_text, body))
        };

        with_timeout(exchange, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
    }
}

/// Race `work` against `deadline`, reporting a lost race as a transport error.
async fn with_timeout<T, W, D>(work: W, deadline: D, timeout_ms: u32) -> Result<T, FetchError>
where
    W: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    pin_mut!(work, deadline);
    match select(work, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Transport(format!(
            "request timed out after {}ms",
            timeout_ms
        ))),
    }
}

/// Backoff delays via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
