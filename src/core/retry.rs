//! JSON POST with bounded exponential-backoff retry.
//!
//! The retry loop is written against two seams, [`HttpTransport`] and
//! [`Sleeper`], so it runs unchanged in the browser (see `utils::fetch`)
//! and under test with scripted responses.

use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

use crate::config::retry_defaults;
use crate::core::error::{FetchError, PolicyError};

// =============================================================================
// Seams
// =============================================================================

/// Raw HTTP response as handed back by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Status in 200..=299.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST. Connection-level failures are reported as
/// [`FetchError::Transport`]; any HTTP answer, including errors, is `Ok`.
pub trait HttpTransport {
    fn post_json(
        &self,
        url: &str,
        body: &str,
    ) -> impl Future<Output = Result<HttpResponse, FetchError>>;
}

/// Suspends the calling future for the given number of milliseconds.
pub trait Sleeper {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

// =============================================================================
// Policy
// =============================================================================

/// Which failures are worth another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryOn {
    /// Retry 429, transport failures and every other non-2xx status.
    #[default]
    AllFailures,
    /// Retry only 429 and transport failures; other statuses fail at once.
    ThrottleAndTransport,
}

/// Retry policy for a single logical request. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay_ms: u32,
    backoff_factor: f64,
    retry_on: RetryOn,
}

impl RetryPolicy {
    /// Build a policy, rejecting a zero initial delay or a factor not above 1.
    pub fn new(
        max_retries: u32,
        initial_delay_ms: u32,
        backoff_factor: f64,
    ) -> Result<Self, PolicyError> {
        if initial_delay_ms == 0 {
            return Err(PolicyError::ZeroInitialDelay);
        }
        // NaN fails this comparison too
        if !(backoff_factor > 1.0) {
            return Err(PolicyError::FactorTooSmall(backoff_factor));
        }
        Ok(Self {
            max_retries,
            initial_delay_ms,
            backoff_factor,
            retry_on: RetryOn::default(),
        })
    }

    /// Policy built from `config::retry_defaults`, validated like any other.
    pub fn from_config() -> Result<Self, PolicyError> {
        Ok(Self::new(
            retry_defaults::MAX_RETRIES,
            retry_defaults::INITIAL_DELAY_MS,
            retry_defaults::BACKOFF_FACTOR,
        )?
        .with_retry_on(retry_defaults::RETRY_ON))
    }

    pub fn with_retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Delay before retry number `retry` (0-based): `initial * factor^retry`,
    /// saturating at `u32::MAX`.
    pub fn delay_for_retry(&self, retry: u32) -> u32 {
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let delay = f64::from(self.initial_delay_ms) * self.backoff_factor.powi(exponent);
        if delay >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            delay.round() as u32
        }
    }

    /// Whether `err` is eligible for another attempt under this policy.
    pub fn is_retryable(&self, err: &FetchError) -> bool {
        match err {
            FetchError::RateLimited | FetchError::Transport(_) => true,
            FetchError::Http { .. } => self.retry_on == RetryOn::AllFailures,
            FetchError::JsonParse(_)
            | FetchError::Encode(_)
            | FetchError::RetriesExhausted { .. } => false,
        }
    }
}

// =============================================================================
// Retry loop
// =============================================================================

/// POST `payload` as JSON to `url`, retrying per `policy`.
///
/// A 2xx body is parsed into `R` and returned as-is; a body that is not
/// valid JSON fails immediately. Retryable failures wait
/// `policy.delay_for_retry(n)` before the next attempt. Once retries run
/// out the final error is returned wrapped in
/// [`FetchError::RetriesExhausted`].
pub async fn fetch_with_backoff<P, R, T, S>(
    transport: &T,
    sleeper: &S,
    url: &str,
    payload: &P,
    policy: &RetryPolicy,
) -> Result<R, FetchError>
where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
    T: HttpTransport,
    S: Sleeper,
{
    let body = serde_json::to_string(payload).map_err(|e| FetchError::Encode(e.to_string()))?;

    let mut retry = 0;
    loop {
        let err = match send_once(transport, url, &body).await {
            Ok(text) => {
                if retry > 0 {
                    tracing::debug!(attempts = retry + 1, "request succeeded after retry");
                }
                return serde_json::from_str(&text)
                    .map_err(|e| FetchError::JsonParse(e.to_string()));
            }
            Err(err) => err,
        };

        if !policy.is_retryable(&err) {
            tracing::error!(error = %err, "request failed, not retrying");
            return Err(err);
        }

        if retry >= policy.max_retries() {
            let attempts = retry + 1;
            tracing::error!(attempts, error = %err, "request failed, retries exhausted");
            return Err(FetchError::RetriesExhausted {
                attempts,
                last: Box::new(err),
            });
        }

        let delay_ms = policy.delay_for_retry(retry);
        tracing::warn!(attempt = retry + 1, delay_ms, error = %err, "request failed, retrying");
        sleeper.sleep(delay_ms).await;
        retry += 1;
    }
}

/// One attempt: classify the response into body text or a [`FetchError`].
async fn send_once<T: HttpTransport>(
    transport: &T,
    url: &str,
    body: &str,
) -> Result<String, FetchError> {
    let response = transport.post_json(url, body).await?;
    match response.status {
        _ if response.is_success() => Ok(response.body),
        429 => Err(FetchError::RateLimited),
        status => Err(FetchError::Http {
            status,
            status_text: response.status_text,
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use super::*;

    /// Transport replaying a fixed script of outcomes, recording each request.
    pub struct ScriptedTransport {
        script: RefCell<VecDeque<Result<HttpResponse, FetchError>>>,
        pub requests: RefCell<Vec<(String, String)>>,
    }

    impl ScriptedTransport {
        pub fn new(script: Vec<Result<HttpResponse, FetchError>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl HttpTransport for ScriptedTransport {
        async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, FetchError> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), body.to_string()));
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".into())))
        }
    }

    /// Sleeper that returns immediately and remembers every requested delay.
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub delays: RefCell<Vec<u32>>,
        pub total: Cell<u64>,
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, ms: u32) {
            self.delays.borrow_mut().push(ms);
            self.total.set(self.total.get() + u64::from(ms));
        }
    }

    pub fn ok(body: &str) -> Result<HttpResponse, FetchError> {
        Ok(HttpResponse::new(200, "OK", body))
    }

    pub fn status(code: u16, text: &str) -> Result<HttpResponse, FetchError> {
        Ok(HttpResponse::new(code, text, ""))
    }

    pub fn offline() -> Result<HttpResponse, FetchError> {
        Err(FetchError::Transport("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::testing::*;
    use super::*;

    const URL: &str = "https://api.example.test/generate";

    fn policy(max_retries: u32, initial: u32) -> RetryPolicy {
        RetryPolicy::new(max_retries, initial, 2.0).unwrap()
    }

    #[test]
    fn test_policy_from_config() {
        let p = RetryPolicy::from_config().unwrap();
        assert_eq!(p, RetryPolicy::new(3, 1000, 2.0).unwrap());
        assert_eq!(p.max_retries(), 3);
        let delays: Vec<u32> = (0..3).map(|r| p.delay_for_retry(r)).collect();
        assert_eq!(delays, vec![1000, 2000, 4000]);
    }

    #[test]
    fn test_policy_validation() {
        assert_eq!(
            RetryPolicy::new(3, 0, 2.0),
            Err(PolicyError::ZeroInitialDelay)
        );
        assert_eq!(
            RetryPolicy::new(3, 100, 1.0),
            Err(PolicyError::FactorTooSmall(1.0))
        );
        assert!(RetryPolicy::new(3, 100, f64::NAN).is_err());
        assert!(RetryPolicy::new(0, 1, 1.5).is_ok());
    }

    #[test]
    fn test_delay_doubles() {
        let p = policy(5, 50);
        let delays: Vec<u32> = (0..4).map(|r| p.delay_for_retry(r)).collect();
        assert_eq!(delays, vec![50, 100, 200, 400]);
    }

    #[test]
    fn test_delay_saturates() {
        let p = policy(100, 1000);
        assert_eq!(p.delay_for_retry(64), u32::MAX);
    }

    #[tokio::test]
    async fn test_first_try_success_returns_body() {
        let transport = ScriptedTransport::new(vec![ok(r#"{"ok":true,"n":[1,2]}"#)]);
        let sleeper = RecordingSleeper::default();

        let value: Value = fetch_with_backoff(&transport, &sleeper, URL, &json!({"q": 1}), &policy(3, 10))
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": true, "n": [1, 2]}));
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.delays.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_payload_sent_as_json() {
        let transport = ScriptedTransport::new(vec![ok("{}")]);
        let sleeper = RecordingSleeper::default();

        let _: Value = fetch_with_backoff(&transport, &sleeper, URL, &json!({"q": "hi"}), &policy(0, 10))
            .await
            .unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].0, URL);
        assert_eq!(requests[0].1, r#"{"q":"hi"}"#);
    }

    #[tokio::test]
    async fn test_throttled_twice_then_ok() {
        let transport = ScriptedTransport::new(vec![
            status(429, "Too Many Requests"),
            status(429, "Too Many Requests"),
            ok(r#"{"ok":true}"#),
        ]);
        let sleeper = RecordingSleeper::default();

        let value: Value = fetch_with_backoff(&transport, &sleeper, URL, &json!({}), &policy(2, 50))
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": true}));
        assert_eq!(transport.calls(), 3);
        assert_eq!(*sleeper.delays.borrow(), vec![50, 100]);
        assert_eq!(sleeper.total.get(), 150);
    }

    #[tokio::test]
    async fn test_throttled_past_budget_exhausts() {
        let transport = ScriptedTransport::new(vec![
            status(429, "Too Many Requests"),
            status(429, "Too Many Requests"),
            status(429, "Too Many Requests"),
            ok(r#"{"ok":true}"#),
        ]);
        let sleeper = RecordingSleeper::default();

        let err = fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &json!({}), &policy(2, 50))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            FetchError::RetriesExhausted {
                attempts: 3,
                last: Box::new(FetchError::RateLimited),
            }
        );
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_retried() {
        let transport = ScriptedTransport::new(vec![offline(), ok("[1]")]);
        let sleeper = RecordingSleeper::default();

        let value: Value = fetch_with_backoff(&transport, &sleeper, URL, &json!({}), &policy(3, 1000))
            .await
            .unwrap();

        assert_eq!(value, json!([1]));
        assert_eq!(*sleeper.delays.borrow(), vec![1000]);
    }

    #[tokio::test]
    async fn test_server_error_retried_by_default() {
        let transport = ScriptedTransport::new(vec![status(500, "Internal Server Error"), ok("1")]);
        let sleeper = RecordingSleeper::default();

        let value: Value = fetch_with_backoff(&transport, &sleeper, URL, &json!({}), &policy(1, 10))
            .await
            .unwrap();

        assert_eq!(value, json!(1));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_server_error_fails_fast_when_configured() {
        let transport = ScriptedTransport::new(vec![status(403, "Forbidden"), ok("1")]);
        let sleeper = RecordingSleeper::default();
        let p = policy(3, 10).with_retry_on(RetryOn::ThrottleAndTransport);

        let err = fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &json!({}), &p)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            FetchError::Http {
                status: 403,
                status_text: "Forbidden".into(),
            }
        );
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.delays.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_not_retried() {
        let transport = ScriptedTransport::new(vec![ok("<html>"), ok("{}")]);
        let sleeper = RecordingSleeper::default();

        let err = fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &json!({}), &policy(3, 10))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::JsonParse(_)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_unencodable_payload_sends_nothing() {
        let transport = ScriptedTransport::new(vec![ok("{}")]);
        let sleeper = RecordingSleeper::default();
        let payload = std::collections::BTreeMap::from([((1u8, 2u8), "x")]);

        let err = fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &payload, &policy(3, 10))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Encode(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_zero_retries_single_attempt() {
        let transport = ScriptedTransport::new(vec![offline(), ok("{}")]);
        let sleeper = RecordingSleeper::default();

        let err = fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &json!({}), &policy(0, 10))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            FetchError::RetriesExhausted {
                attempts: 1,
                last: Box::new(FetchError::Transport("connection refused".into())),
            }
        );
        assert_eq!(transport.calls(), 1);
    }

    proptest! {
        #[test]
        fn prop_repeated_failures_use_full_budget(
            max_retries in 0u32..6,
            initial in 1u32..500,
            throttled in any::<bool>(),
        ) {
            let failure = if throttled { status(429, "Too Many Requests") } else { offline() };
            let script = (0..=max_retries).map(|_| failure.clone()).collect();
            let transport = ScriptedTransport::new(script);
            let sleeper = RecordingSleeper::default();
            let p = policy(max_retries, initial);

            let result = futures::executor::block_on(
                fetch_with_backoff::<_, Value, _, _>(&transport, &sleeper, URL, &json!({}), &p),
            );

            prop_assert!(result.is_err());
            prop_assert_eq!(transport.calls() as u32, max_retries + 1);
            let expected: Vec<u32> = (0..max_retries).map(|i| initial * 2u32.pow(i)).collect();
            prop_assert_eq!(sleeper.delays.borrow().clone(), expected);
        }
    }
}
