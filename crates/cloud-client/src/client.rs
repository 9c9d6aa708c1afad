//! Cloud ops API client
//!
//! # Example
//!
//! ```ignore
//! use cloud_client::{ClientOptions, CloudClient};
//! use cloud_client::api::cloudservice::v1::GetNamespacesRequest;
//!
//! let options = ClientOptions::builder().api_key(api_key).build();
//! let client = CloudClient::new(options)?;
//!
//! let namespaces = client
//!     .cloud_service()
//!     .get_namespaces(GetNamespacesRequest::default())
//!     .await?;
//!
//! client.close();
//! ```

use std::fmt;
use std::sync::Arc;

use tonic::body::Body;
use tower::Service;
use tracing::instrument;

use crate::api::cloudservice::v1::cloud_service_client::CloudServiceClient;
use crate::channel::{layered, Connection, ResolvedOptions};
use crate::config::ClientOptions;
use crate::credentials::BoxError;
use crate::ClientError;

/// Client for the cloud operations API.
///
/// Cheap to clone; clones share one connection.
#[derive(Clone)]
pub struct CloudClient {
    resolved: Arc<ResolvedOptions>,
    connection: Connection,
}

impl fmt::Debug for CloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudClient")
            .field("resolved", &self.resolved)
            .field("connection", &self.connection)
            .finish()
    }
}

impl CloudClient {
    /// Create a client from options.
    ///
    /// Validates the options and creates a lazy channel; no connection is
    /// made until the first call. Must be called within a Tokio runtime.
    #[instrument(skip(options), level = "info")]
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let resolved = ResolvedOptions::resolve(&options)?;
        let channel = resolved.endpoint_for(&options)?.connect_lazy();

        tracing::info!(
            endpoint = %resolved.endpoint(),
            tls_enabled = resolved.tls_enabled(),
            api_version = %resolved.api_version(),
            "CloudClient initialized with lazy connection"
        );

        Ok(Self::from_parts(resolved, channel))
    }

    /// Create a client that sends calls through `transport` instead of a
    /// tonic channel.
    ///
    /// The options are resolved the same way as in [`CloudClient::new`] and
    /// the same layers are applied; endpoint-specific settings are ignored.
    pub fn with_transport<T>(options: ClientOptions, transport: T) -> Result<Self, ClientError>
    where
        T: Service<http::Request<Body>, Response = http::Response<Body>>
            + Clone
            + Send
            + Sync
            + 'static,
        T::Future: Send + 'static,
        T::Error: Into<BoxError>,
    {
        let resolved = ResolvedOptions::resolve(&options)?;
        Ok(Self::from_parts(resolved, transport))
    }

    fn from_parts<T>(resolved: ResolvedOptions, transport: T) -> Self
    where
        T: Service<http::Request<Body>, Response = http::Response<Body>>
            + Clone
            + Send
            + Sync
            + 'static,
        T::Future: Send + 'static,
        T::Error: Into<BoxError>,
    {
        let connection = Connection::new(layered(&resolved, transport));
        Self {
            resolved: Arc::new(resolved),
            connection,
        }
    }

    /// Typed stub for the cloud service.
    #[must_use]
    pub fn cloud_service(&self) -> CloudServiceClient<Connection> {
        CloudServiceClient::new(self.connection.clone())
    }

    /// The layered connection, for building other stubs over it.
    #[must_use]
    pub fn connection(&self) -> Connection {
        self.connection.clone()
    }

    /// Resolved endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.resolved.endpoint()
    }

    /// API version sent with every call.
    #[must_use]
    pub fn api_version(&self) -> &str {
        self.resolved.api_version()
    }

    /// Close the client. Calls started afterwards fail with `Cancelled`.
    ///
    /// Safe to call more than once.
    pub fn close(&self) {
        if self.connection.close() {
            tracing::info!(endpoint = %self.resolved.endpoint(), "CloudClient closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.connection.is_closed()
    }
}
