//! Retry middleware with exponential backoff
//!
//! Retries unary calls that fail with a transient gRPC code. The request body
//! is buffered once and replayed for every attempt, so an idempotency key
//! written at encode time is identical across attempts.
//!
//! # Example
//!
//! ```ignore
//! use cloud_client::retry::RetryConfig;
//!
//! let config = RetryConfig::default()
//!     .with_max_attempts(3)
//!     .with_base_delay(Duration::from_millis(100));
//! ```

use std::convert::Infallible;
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use futures::future::BoxFuture;
use http::request::Parts;
use http::HeaderMap;
use http_body::Frame;
use http_body_util::{BodyExt, Full, StreamBody};
use tokio::time::{sleep, timeout_at, Instant};
use tonic::body::Body;
use tonic::{Code, Status};
use tower::{Layer, Service, ServiceExt};
use tracing::{debug, warn};

use crate::credentials::{BoxError, RequestInfo};
use crate::interceptor::{grpc_timeout, set_grpc_timeout};
use crate::metrics;

const GRPC_STATUS_HEADER: &str = "grpc-status";

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of physical attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Relative jitter applied to each delay, between 0.0 and 1.0.
    pub jitter: f64,
    /// Codes that trigger another attempt.
    pub retryable_codes: Vec<Code>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 7,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            jitter: 0.5,
            retryable_codes: vec![Code::Unavailable, Code::ResourceExhausted],
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of attempts. Zero is treated as one.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the base delay for exponential backoff.
    #[must_use]
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Set the maximum delay between attempts.
    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the jitter factor, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = if jitter.is_finite() {
            jitter.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Replace the set of retryable codes.
    #[must_use]
    pub fn with_retryable_codes(mut self, codes: impl IntoIterator<Item = Code>) -> Self {
        self.retryable_codes = codes.into_iter().collect();
        self
    }

    /// Backoff before retry `retry` (1-indexed) without jitter.
    ///
    /// Uses exponential backoff: `base_delay * 2^(retry - 1)`, capped at
    /// `max_delay`.
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay)
    }

    /// Backoff before retry `retry` with jitter applied, never above
    /// `max_delay`.
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let delay = self.backoff(retry);
        if self.jitter <= 0.0 {
            return delay;
        }
        let factor = 1.0 + self.jitter * (rand::random::<f64>() * 2.0 - 1.0);
        Duration::try_from_secs_f64(delay.as_secs_f64() * factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Retry policy that determines whether to retry a call.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy with the given configuration.
    #[must_use]
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// A policy that sends every call exactly once.
    #[must_use]
    pub fn single_attempt() -> Self {
        Self::new(RetryConfig::default().with_max_attempts(1))
    }

    /// Check if a gRPC status code should be retried.
    #[must_use]
    pub fn should_retry_code(&self, code: Code) -> bool {
        self.config.retryable_codes.contains(&code)
    }

    /// Check if another attempt may follow `attempts` completed attempts.
    #[must_use]
    pub fn can_retry(&self, attempts: u32) -> bool {
        attempts < self.config.max_attempts
    }

    /// Get the delay before retry `retry`.
    #[must_use]
    pub fn retry_delay(&self, retry: u32) -> Duration {
        self.config.delay_for_retry(retry)
    }

    /// Get the retry configuration.
    #[must_use]
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

/// Layer retrying transient failures according to a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryLayer {
    policy: RetryPolicy,
}

impl RetryLayer {
    /// Create a layer from a policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }
}

impl<S> Layer<S> for RetryLayer {
    type Service = RetryService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RetryService {
            inner,
            policy: self.policy.clone(),
        }
    }
}

/// Service replaying a buffered unary request until it succeeds, fails
/// permanently, runs out of attempts or would outlive its deadline.
///
/// Each attempt carries a `grpc-timeout` for the time left before the call
/// deadline and is cut off at that deadline.
#[derive(Debug, Clone)]
pub struct RetryService<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S> Service<http::Request<Body>> for RetryService<S>
where
    S: Service<http::Request<Body>, Response = http::Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
{
    type Response = http::Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(call_with_retry(inner, self.policy.clone(), req))
    }
}

async fn call_with_retry<S>(
    mut inner: S,
    policy: RetryPolicy,
    req: http::Request<Body>,
) -> Result<http::Response<Body>, BoxError>
where
    S: Service<http::Request<Body>, Response = http::Response<Body>>,
    S::Error: Into<BoxError>,
{
    let (parts, body) = req.into_parts();
    let method = parts.uri.path().to_string();
    let deadline = parts
        .extensions
        .get::<RequestInfo>()
        .and_then(|info| info.deadline)
        .or_else(|| {
            grpc_timeout(&parts.headers).and_then(|timeout| Instant::now().checked_add(timeout))
        });
    let body = body
        .collect()
        .await
        .map_err(|status| Box::new(status) as BoxError)?
        .to_bytes();

    let mut attempt = 1;
    loop {
        let remaining = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    debug!(method = %method, attempt, "deadline passed before attempt");
                    metrics::record_request(&method, Code::DeadlineExceeded);
                    return Err(deadline_exceeded());
                }
                Some(deadline - now)
            }
            None => None,
        };

        debug!(method = %method, attempt, "sending call");
        let request = rebuild_request(&parts, body.clone(), remaining);
        let result = match deadline {
            Some(deadline) => timeout_at(deadline, send_attempt(&mut inner, request))
                .await
                .unwrap_or_else(|_| Err(deadline_exceeded())),
            None => send_attempt(&mut inner, request).await,
        };

        let more_attempts = policy.can_retry(attempt);
        let (result, code) = classify(result, more_attempts).await;

        if !more_attempts || !policy.should_retry_code(code) {
            metrics::record_request(&method, code);
            return result;
        }

        let delay = policy.retry_delay(attempt);
        let retry_at = Instant::now().checked_add(delay);
        if deadline.is_some_and(|deadline| retry_at.is_none_or(|at| at >= deadline)) {
            debug!(method = %method, attempt, "deadline reached, not retrying");
            metrics::record_request(&method, code);
            return result;
        }

        warn!(
            method = %method,
            attempt,
            max_attempts = policy.config().max_attempts,
            code = ?code,
            delay_ms = delay.as_millis(),
            "retrying after transient error"
        );
        metrics::record_retry(&method);

        drop(result);
        sleep(delay).await;
        attempt += 1;
    }
}

async fn send_attempt<S>(
    inner: &mut S,
    request: http::Request<Body>,
) -> Result<http::Response<Body>, BoxError>
where
    S: Service<http::Request<Body>, Response = http::Response<Body>>,
    S::Error: Into<BoxError>,
{
    inner.ready().await.map_err(Into::<BoxError>::into)?;
    inner.call(request).await.map_err(Into::into)
}

fn deadline_exceeded() -> BoxError {
    Box::new(Status::deadline_exceeded("call deadline exceeded"))
}

/// Rebuild one attempt from the buffered call, with `grpc-timeout` set to
/// `remaining` when the call has a deadline.
fn rebuild_request(
    parts: &Parts,
    body: Bytes,
    remaining: Option<Duration>,
) -> http::Request<Body> {
    let mut req = http::Request::new(Body::new(Full::new(body)));
    *req.method_mut() = parts.method.clone();
    *req.uri_mut() = parts.uri.clone();
    *req.version_mut() = parts.version;
    *req.headers_mut() = parts.headers.clone();
    *req.extensions_mut() = parts.extensions.clone();
    if let Some(remaining) = remaining {
        set_grpc_timeout(req.headers_mut(), remaining);
    }
    req
}

fn status_code(headers: &HeaderMap) -> Option<Code> {
    headers
        .get(GRPC_STATUS_HEADER)
        .map(|value| Code::from_bytes(value.as_bytes()))
}

/// Determine the gRPC code of an attempt.
///
/// A response without a trailers-only status is buffered only when
/// `read_trailers` is set, then handed back with the same frames.
async fn classify(
    result: Result<http::Response<Body>, BoxError>,
    read_trailers: bool,
) -> (Result<http::Response<Body>, BoxError>, Code) {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            let code = match err.downcast_ref::<Status>() {
                Some(status) => status.code(),
                None => Code::Unavailable,
            };
            return (Err(err), code);
        }
    };

    if let Some(code) = status_code(response.headers()) {
        return (Ok(response), code);
    }
    if !read_trailers {
        return (Ok(response), Code::Ok);
    }

    let (parts, body) = response.into_parts();
    let collected = match body.collect().await {
        Ok(collected) => collected,
        Err(status) => {
            let code = status.code();
            return (Err(Box::new(status) as BoxError), code);
        }
    };

    let trailers = collected.trailers().cloned();
    let code = trailers.as_ref().and_then(status_code).unwrap_or(Code::Ok);

    let mut frames: Vec<Result<Frame<Bytes>, Infallible>> =
        vec![Ok(Frame::data(collected.to_bytes()))];
    if let Some(trailers) = trailers {
        frames.push(Ok(Frame::trailers(trailers)));
    }
    let body = Body::new(StreamBody::new(futures::stream::iter(frames)));

    (Ok(http::Response::from_parts(parts, body)), code)
}
