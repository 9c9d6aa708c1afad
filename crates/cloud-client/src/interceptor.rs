//! Per-call interceptors
//!
//! Tower layers applied to every physical attempt of a call, innermost last:
//!
//! 1. [`RequestInfoLayer`] stamps the [`RequestInfo`] transport descriptor.
//! 2. [`VersionLayer`] sets the `temporal-cloud-api-version` header.
//! 3. [`CredentialsLayer`] attaches the bearer token.

use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::BoxFuture;
use http::{HeaderMap, HeaderName, HeaderValue};
use tokio::time::Instant;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};
use tower::{Layer, Service};

use crate::config::ConfigError;
use crate::credentials::{ApiKeyCredentials, AuthInfo, BoxError, CredentialsError, RequestInfo};
use crate::metrics;

/// Header carrying the cloud API version.
pub const API_VERSION_HEADER: &str = "temporal-cloud-api-version";

const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// Parse the `grpc-timeout` header set by `tonic::Request::set_timeout`.
pub(crate) fn grpc_timeout(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(GRPC_TIMEOUT_HEADER)?.to_str().ok()?;
    if value.len() < 2 {
        return None;
    }
    let (digits, unit) = value.split_at(value.len() - 1);
    let amount: u64 = digits.parse().ok()?;
    let timeout = match unit {
        "H" => Duration::from_secs(amount.checked_mul(3600)?),
        "M" => Duration::from_secs(amount.checked_mul(60)?),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    };
    Some(timeout)
}

/// Write `timeout` as a `grpc-timeout` header, in the finest unit that fits
/// the eight digits the header allows. Rounds down.
pub(crate) fn set_grpc_timeout(headers: &mut HeaderMap, timeout: Duration) {
    const MAX_AMOUNT: u128 = 99_999_999;
    const UNITS: [(u128, char); 6] = [
        (1, 'n'),
        (1_000, 'u'),
        (1_000_000, 'm'),
        (1_000_000_000, 'S'),
        (60_000_000_000, 'M'),
        (3_600_000_000_000, 'H'),
    ];

    let nanos = timeout.as_nanos();
    let encoded = UNITS
        .iter()
        .find(|(per_unit, _)| nanos / per_unit <= MAX_AMOUNT)
        .map(|(per_unit, unit)| format!("{}{unit}", nanos / per_unit))
        .unwrap_or_else(|| format!("{MAX_AMOUNT}H"));

    if let Ok(value) = HeaderValue::try_from(encoded) {
        headers.insert(GRPC_TIMEOUT_HEADER, value);
    }
}

// =============================================================================
// Request info
// =============================================================================

/// Layer that describes the transport of each call to the layers below it.
#[derive(Debug, Clone, Copy)]
pub struct RequestInfoLayer {
    auth_info: AuthInfo,
}

impl RequestInfoLayer {
    /// Describe calls as travelling over a transport with `auth_info`.
    pub fn new(auth_info: AuthInfo) -> Self {
        Self { auth_info }
    }
}

impl<S> Layer<S> for RequestInfoLayer {
    type Service = RequestInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestInfoService {
            inner,
            auth_info: self.auth_info,
        }
    }
}

/// Service inserting [`RequestInfo`] into request extensions.
#[derive(Debug, Clone)]
pub struct RequestInfoService<S> {
    inner: S,
    auth_info: AuthInfo,
}

impl<S, B> Service<http::Request<B>> for RequestInfoService<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        let info = RequestInfo {
            method: req.uri().path().to_string(),
            auth_info: self.auth_info,
            deadline: grpc_timeout(req.headers())
                .and_then(|timeout| Instant::now().checked_add(timeout)),
        };
        req.extensions_mut().insert(info);
        self.inner.call(req)
    }
}

// =============================================================================
// API version
// =============================================================================

/// Tags calls with the cloud API version.
#[derive(Debug, Clone)]
pub struct VersionInterceptor {
    header: HeaderValue,
    metadata: MetadataValue<Ascii>,
}

impl VersionInterceptor {
    /// Create an interceptor for `version`.
    pub fn new(version: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidApiVersion(version.to_string());
        let header = HeaderValue::from_str(version).map_err(|_| invalid())?;
        let metadata = MetadataValue::try_from(version).map_err(|_| invalid())?;
        Ok(Self { header, metadata })
    }

    /// The version sent with each call.
    pub fn version(&self) -> &str {
        self.metadata.to_str().unwrap_or_default()
    }

    /// Set the version header, replacing any previous value.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            self.header.clone(),
        );
    }
}

impl Interceptor for VersionInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(API_VERSION_HEADER, self.metadata.clone());
        Ok(request)
    }
}

/// Layer applying a [`VersionInterceptor`] to every attempt.
#[derive(Debug, Clone)]
pub struct VersionLayer {
    interceptor: VersionInterceptor,
}

impl VersionLayer {
    /// Create a layer from an interceptor.
    pub fn new(interceptor: VersionInterceptor) -> Self {
        Self { interceptor }
    }
}

impl<S> Layer<S> for VersionLayer {
    type Service = VersionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        VersionService {
            inner,
            interceptor: self.interceptor.clone(),
        }
    }
}

/// Service setting the API version header.
#[derive(Debug, Clone)]
pub struct VersionService<S> {
    inner: S,
    interceptor: VersionInterceptor,
}

impl<S, B> Service<http::Request<B>> for VersionService<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        self.interceptor.apply(req.headers_mut());
        self.inner.call(req)
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// Layer attaching [`ApiKeyCredentials`] to every attempt.
///
/// Without credentials the layer passes calls through untouched.
#[derive(Debug, Clone)]
pub struct CredentialsLayer {
    credentials: Option<ApiKeyCredentials>,
}

impl CredentialsLayer {
    /// Create a layer from credentials.
    pub fn new(credentials: ApiKeyCredentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// Create a layer that attaches nothing.
    pub fn anonymous() -> Self {
        Self { credentials: None }
    }

    /// Create a layer from optional credentials.
    pub fn optional(credentials: Option<ApiKeyCredentials>) -> Self {
        Self { credentials }
    }
}

impl<S> Layer<S> for CredentialsLayer {
    type Service = CredentialsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CredentialsService {
            inner,
            credentials: self.credentials.clone(),
        }
    }
}

/// Service fetching the API key and setting the `authorization` header.
///
/// Failures are returned as a boxed [`Status`], which tonic surfaces to the
/// caller with its code intact.
#[derive(Debug, Clone)]
pub struct CredentialsService<S> {
    inner: S,
    credentials: Option<ApiKeyCredentials>,
}

impl<S, B> Service<http::Request<B>> for CredentialsService<S>
where
    S: Service<http::Request<B>> + Clone + Send + 'static,
    S::Future: Send,
    S::Response: Send + 'static,
    S::Error: Into<BoxError>,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        // Take the service that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let credentials = self.credentials.clone();

        Box::pin(async move {
            let Some(credentials) = credentials else {
                return inner.call(req).await.map_err(Into::into);
            };

            let metadata = match req.extensions().get::<RequestInfo>() {
                Some(info) => credentials.get_request_metadata(info).await,
                None => Err(CredentialsError::MissingRequestInfo),
            };

            let metadata = match metadata {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!(
                        method = %req.uri().path(),
                        error = %err,
                        "refusing to send call without credentials"
                    );
                    metrics::record_credential_failure(err.reason());
                    return Err(Box::new(Status::from(err)) as BoxError);
                }
            };

            for (name, value) in &metadata {
                req.headers_mut().insert(name.clone(), value.clone());
            }

            inner.call(req).await.map_err(Into::into)
        })
    }
}
