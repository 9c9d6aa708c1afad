//! Connection setup
//!
//! Resolves [`ClientOptions`] into an immutable [`ResolvedOptions`] and wraps
//! a transport in the per-call layer stack:
//!
//! ```text
//! Connection -> RequestInfo -> Retry -> Version -> Credentials -> transport
//! ```
//!
//! The idempotency key is written earlier, when the request is encoded by
//! [`CloudCodec`](crate::codec::CloudCodec), so retries replay it unchanged.
//!
//! TLS is used for `https://` endpoints. A bare `host:port` endpoint gets
//! `https://`, or `http://` when insecure transport is allowed. Any other
//! scheme is rejected unless insecure transport is allowed.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture};
use http::{HeaderValue, Uri};
use tonic::body::Body;
use tonic::transport::{Certificate, ClientTlsConfig, Endpoint, Identity};
use tonic::Status;
use tower::util::BoxCloneSyncService;
use tower::{Service, ServiceBuilder};

use crate::config::{ClientOptions, ConfigError, TlsConfig};
use crate::credentials::{
    ApiKeyCredentials, ApiKeyReader, AuthInfo, BoxError, SecurityLevel, StaticApiKey,
};
use crate::interceptor::{CredentialsLayer, RequestInfoLayer, VersionInterceptor, VersionLayer};
use crate::retry::{RetryLayer, RetryPolicy};
use crate::ClientError;

/// Type-erased transport below the [`Connection`].
pub type BoxTransport = BoxCloneSyncService<http::Request<Body>, http::Response<Body>, BoxError>;

/// Extract domain name from an endpoint URL for TLS SNI.
fn extract_domain(url: &str) -> Option<String> {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let domain = without_scheme
        .split(':')
        .next()
        .and_then(|s| s.split('/').next())
        .map(String::from);

    domain.filter(|d| !d.is_empty())
}

/// Add a scheme to a bare `host:port` endpoint.
fn normalize_endpoint(endpoint: &str, allow_insecure: bool) -> String {
    if endpoint.contains("://") {
        endpoint.to_string()
    } else if allow_insecure {
        format!("http://{endpoint}")
    } else {
        format!("https://{endpoint}")
    }
}

/// Options after validation and defaulting.
#[derive(Clone)]
pub struct ResolvedOptions {
    endpoint: String,
    security_level: SecurityLevel,
    tls: Option<ClientTlsConfig>,
    version: VersionInterceptor,
    credentials: Option<ApiKeyCredentials>,
    retry: RetryPolicy,
}

impl fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("endpoint", &self.endpoint)
            .field("security_level", &self.security_level)
            .field("tls", &self.tls.is_some())
            .field("version", &self.version.version())
            .field("credentials", &self.credentials)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ResolvedOptions {
    /// Validate `options` and fill in defaults. Performs no I/O.
    pub fn resolve(options: &ClientOptions) -> Result<Self, ClientError> {
        options.validate()?;

        let endpoint = normalize_endpoint(options.endpoint(), options.allow_insecure());
        let uri: Uri = endpoint
            .parse()
            .map_err(|e| ClientError::dial(&endpoint, format!("invalid endpoint: {e}")))?;
        if uri.authority().is_none() {
            return Err(ClientError::dial(&endpoint, "endpoint has no host"));
        }

        let security_level = SecurityLevel::for_scheme(uri.scheme_str());
        if security_level == SecurityLevel::NoSecurity && !options.allow_insecure() {
            return Err(ConfigError::PlaintextEndpoint(endpoint).into());
        }
        let tls = match security_level {
            SecurityLevel::PrivacyAndIntegrity => {
                Some(build_tls_config(&endpoint, options.tls_config()))
            }
            _ => None,
        };

        let version = VersionInterceptor::new(options.api_version())?;

        let reader: Option<Arc<dyn ApiKeyReader>> = match options.api_key() {
            Some(key) => {
                HeaderValue::try_from(format!("Bearer {key}"))
                    .map_err(|_| ConfigError::InvalidApiKey)?;
                Some(Arc::new(StaticApiKey::new(key)) as Arc<dyn ApiKeyReader>)
            }
            None => options.api_key_reader().cloned(),
        };
        let credentials = reader.map(|reader| {
            let credentials = ApiKeyCredentials::new(reader);
            if options.allow_insecure() {
                credentials.allow_insecure()
            } else {
                credentials
            }
        });

        let retry = if options.disable_retry() {
            RetryPolicy::single_attempt()
        } else {
            RetryPolicy::new(options.retry_config().clone())
        };

        Ok(Self {
            endpoint,
            security_level,
            tls,
            version,
            credentials,
            retry,
        })
    }

    /// Endpoint URL, always with a scheme.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Transport security level calls will report.
    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    /// Whether the channel is built with TLS.
    pub fn tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// API version sent with every call.
    pub fn api_version(&self) -> &str {
        self.version.version()
    }

    /// Whether calls carry an `authorization` header.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Policy applied to every call.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Build the tonic endpoint. Caller endpoint options are applied last.
    pub fn endpoint_for(&self, options: &ClientOptions) -> Result<Endpoint, ClientError> {
        let mut endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| ClientError::dial(&self.endpoint, format!("invalid endpoint: {e}")))?;

        if let Some(timeout) = options.connect_timeout() {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = options.request_timeout() {
            endpoint = endpoint.timeout(timeout);
        }
        if let Some(tls) = &self.tls {
            endpoint = endpoint.tls_config(tls.clone()).map_err(|e| {
                ClientError::dial(&self.endpoint, format!("TLS configuration error: {e}"))
            })?;
        }

        for option in options.endpoint_options() {
            endpoint = option(endpoint);
        }

        Ok(endpoint)
    }
}

/// Build TLS configuration for `endpoint`.
fn build_tls_config(endpoint: &str, custom: Option<&TlsConfig>) -> ClientTlsConfig {
    let mut tls_config = ClientTlsConfig::new().with_enabled_roots();

    if let Some(domain) = extract_domain(endpoint) {
        tls_config = tls_config.domain_name(domain);
    }

    if let Some(custom) = custom {
        if let Some(server_name) = &custom.server_name {
            tls_config = tls_config.domain_name(server_name);
        }
        if let Some(ca_pem) = &custom.ca_cert_pem {
            tls_config = tls_config.ca_certificate(Certificate::from_pem(ca_pem));
        }
        if let (Some(cert_pem), Some(key_pem)) = (&custom.client_cert_pem, &custom.client_key_pem) {
            tls_config = tls_config.identity(Identity::from_pem(cert_pem, key_pem));
        }
    }

    tls_config
}

/// Wrap `transport` in the per-call layer stack described by `resolved`.
pub fn layered<T>(resolved: &ResolvedOptions, transport: T) -> BoxTransport
where
    T: Service<http::Request<Body>, Response = http::Response<Body>>
        + Clone
        + Send
        + Sync
        + 'static,
    T::Future: Send + 'static,
    T::Error: Into<BoxError>,
{
    let auth_info = AuthInfo {
        security_level: resolved.security_level,
    };

    let stack = ServiceBuilder::new()
        .layer(RequestInfoLayer::new(auth_info))
        .layer(RetryLayer::new(resolved.retry.clone()))
        .layer(VersionLayer::new(resolved.version.clone()))
        .layer(CredentialsLayer::optional(resolved.credentials.clone()))
        .service(transport);

    BoxCloneSyncService::new(stack)
}

/// Shared handle to the layered transport.
///
/// Clones share the closed flag; once [`Connection::close`] is called every
/// new call fails with `Cancelled`.
#[derive(Clone)]
pub struct Connection {
    inner: BoxTransport,
    closed: Arc<AtomicBool>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Wrap a layered transport in an open connection.
    pub fn new(inner: BoxTransport) -> Self {
        Self {
            inner,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Mark the connection closed. Returns false if it already was.
    pub fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }

    /// Whether [`Connection::close`] has been called on any clone.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Service<http::Request<Body>> for Connection {
    type Response = http::Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if self.is_closed() {
            return Poll::Ready(Ok(()));
        }
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        if self.is_closed() {
            let status = Status::cancelled("connection is closed");
            return Box::pin(future::ready(Err(Box::new(status) as BoxError)));
        }
        self.inner.call(req)
    }
}
