//! API key credentials
//!
//! Per-call bearer token attachment. The API key is fetched from an
//! [`ApiKeyReader`] for every outgoing attempt and is only ever sent over a
//! transport that provides privacy and integrity, unless insecure transport
//! was explicitly allowed.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use thiserror::Error;
use tokio::time::Instant;
use tonic::Status;

/// Boxed error returned by credential providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const BEARER: &str = "Bearer";

/// Confidentiality and integrity guarantees of a transport.
///
/// Levels are ordered; a higher level satisfies any lower requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    /// Plaintext connection.
    NoSecurity,
    /// Integrity protected but not encrypted.
    IntegrityOnly,
    /// Encrypted and integrity protected (TLS).
    PrivacyAndIntegrity,
}

impl SecurityLevel {
    /// Security level provided by a connection with the given URI scheme.
    pub fn for_scheme(scheme: Option<&str>) -> Self {
        match scheme {
            Some("https") => Self::PrivacyAndIntegrity,
            _ => Self::NoSecurity,
        }
    }
}

/// Security descriptor of the connection carrying a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthInfo {
    /// Protection offered by the transport.
    pub security_level: SecurityLevel,
}

/// Per-call descriptor made available to credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// Full gRPC method path, e.g. `/pkg.Service/Method`.
    pub method: String,
    /// Transport security of the call.
    pub auth_info: AuthInfo,
    /// Deadline of the call, if the caller set a timeout.
    pub deadline: Option<Instant>,
}

impl RequestInfo {
    /// Ensure the transport provides at least `required` protection.
    pub fn check_security_level(&self, required: SecurityLevel) -> Result<(), CredentialsError> {
        let actual = self.auth_info.security_level;
        if actual < required {
            return Err(CredentialsError::InsufficientTransportSecurity { required, actual });
        }
        Ok(())
    }
}

/// Source of API keys.
///
/// Called on every outgoing request, possibly concurrently. Implementations
/// must be stateless or synchronize internally; no caching is assumed.
#[async_trait]
pub trait ApiKeyReader: Send + Sync {
    /// Get the API key to use for the call described by `request`.
    async fn get_api_key(&self, request: &RequestInfo) -> Result<String, BoxError>;
}

/// A fixed API key.
#[derive(Clone)]
pub struct StaticApiKey(String);

impl StaticApiKey {
    /// Wrap a fixed API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(api_key.into())
    }
}

impl fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticApiKey").field(&"[REDACTED]").finish()
    }
}

#[async_trait]
impl ApiKeyReader for StaticApiKey {
    async fn get_api_key(&self, _request: &RequestInfo) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

/// API key reader backed by an async closure.
pub struct ApiKeyFn<F>(F);

/// Build an [`ApiKeyReader`] from an async closure.
///
/// ```ignore
/// let reader = api_key_fn(|| async { Ok(std::env::var("TEMPORAL_API_KEY")?) });
/// ```
pub fn api_key_fn<F, Fut>(f: F) -> ApiKeyFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
{
    ApiKeyFn(f)
}

#[async_trait]
impl<F, Fut> ApiKeyReader for ApiKeyFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
{
    async fn get_api_key(&self, _request: &RequestInfo) -> Result<String, BoxError> {
        (self.0)().await
    }
}

/// Errors attaching per-call credentials.
///
/// All of them fail the call without sending it.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// The call carries no transport descriptor.
    #[error("failed to retrieve request info from call")]
    MissingRequestInfo,

    /// The transport is too weak to carry a bearer token.
    #[error("the connection's transport security level is too low for API keys: requires {required:?}, got {actual:?}")]
    InsufficientTransportSecurity {
        /// Level needed to send the token.
        required: SecurityLevel,
        /// Level the transport offers.
        actual: SecurityLevel,
    },

    /// The API key reader failed.
    #[error("failed to get API key: {0}")]
    CredentialUnavailable(#[source] BoxError),

    /// The call deadline passed while fetching the API key.
    #[error("deadline exceeded while fetching API key")]
    DeadlineExceeded,
}

impl CredentialsError {
    /// Short label for metrics.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingRequestInfo => "missing_request_info",
            Self::InsufficientTransportSecurity { .. } => "insufficient_transport_security",
            Self::CredentialUnavailable(_) => "credential_unavailable",
            Self::DeadlineExceeded => "deadline_exceeded",
        }
    }
}

impl From<CredentialsError> for Status {
    fn from(err: CredentialsError) -> Self {
        let message = format!("per-call credentials failed: {err}");
        match err {
            CredentialsError::DeadlineExceeded => Status::deadline_exceeded(message),
            _ => Status::unauthenticated(message),
        }
    }
}

/// Bearer-token credentials attached to every call.
#[derive(Clone)]
pub struct ApiKeyCredentials {
    reader: Arc<dyn ApiKeyReader>,
    allow_insecure_transport: bool,
}

impl ApiKeyCredentials {
    /// Create credentials reading keys from `reader`.
    pub fn new(reader: Arc<dyn ApiKeyReader>) -> Self {
        Self {
            reader,
            allow_insecure_transport: false,
        }
    }

    /// Allow sending the key over a transport without privacy and integrity.
    #[must_use]
    pub fn allow_insecure(mut self) -> Self {
        self.allow_insecure_transport = true;
        self
    }

    /// Whether these credentials may only be sent over a secure transport.
    #[must_use]
    pub fn require_transport_security(&self) -> bool {
        !self.allow_insecure_transport
    }

    /// Build the metadata to attach to the call described by `request`.
    pub async fn get_request_metadata(
        &self,
        request: &RequestInfo,
    ) -> Result<HeaderMap, CredentialsError> {
        if self.require_transport_security() {
            request.check_security_level(SecurityLevel::PrivacyAndIntegrity)?;
        }

        let fetch = self.reader.get_api_key(request);
        let api_key = match request.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, fetch)
                .await
                .map_err(|_| CredentialsError::DeadlineExceeded)?,
            None => fetch.await,
        }
        .map_err(CredentialsError::CredentialUnavailable)?;

        let mut value = HeaderValue::try_from(format!("{BEARER} {api_key}"))
            .map_err(|e| CredentialsError::CredentialUnavailable(Box::new(e)))?;
        value.set_sensitive(true);

        let mut metadata = HeaderMap::with_capacity(1);
        metadata.insert(AUTHORIZATION, value);
        Ok(metadata)
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("allow_insecure_transport", &self.allow_insecure_transport)
            .finish_non_exhaustive()
    }
}
