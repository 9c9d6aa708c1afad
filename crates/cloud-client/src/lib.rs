//! Cloud Client - SDK for the Temporal Cloud operations API
//!
//! Builds a gRPC connection to the cloud ops API and attaches, to every
//! call, the API key as a bearer token, the API version header and an
//! idempotency key for mutating requests. Transient failures are retried
//! with exponential backoff.
//!
//! # Example
//!
//! ```ignore
//! use cloud_client::{ClientOptions, CloudClient};
//!
//! let client = CloudClient::new(ClientOptions::from_env()?)?;
//! let mut service = client.cloud_service();
//! ```

pub mod api;
pub mod channel;
pub mod client;
pub mod codec;
pub mod config;
pub mod credentials;
pub mod error;
pub mod idempotency;
pub mod interceptor;
pub mod metrics;
pub mod retry;

pub use channel::{Connection, ResolvedOptions};
pub use client::CloudClient;
pub use config::{ClientOptions, ClientOptionsBuilder, ConfigError, Defaults, TlsConfig};
pub use credentials::{
    api_key_fn, ApiKeyCredentials, ApiKeyReader, AuthInfo, CredentialsError, RequestInfo,
    SecurityLevel, StaticApiKey,
};
pub use error::ClientError;
pub use idempotency::{IdempotencyKeyInterceptor, IdempotentRequest};
pub use interceptor::{VersionInterceptor, API_VERSION_HEADER};
pub use retry::{RetryConfig, RetryPolicy};
