//! Client errors
//!
//! Construction failures and a typed view of call-time [`Status`] codes.

use thiserror::Error;
use tonic::Status;

use crate::config::ConfigError;

/// Client errors for cloud ops operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid option combination.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The endpoint or its transport settings could not be set up.
    #[error("failed to set up connection to {endpoint}: {message}")]
    Dial {
        /// Endpoint being dialed
        endpoint: String,
        /// Error message
        message: String,
    },

    /// Deadline exceeded.
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Authentication required - API key missing, rejected or not sendable.
    #[error("authentication required: {0}")]
    Unauthenticated(String),

    /// Permission denied - insufficient permissions.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid argument - request validation failed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Resource exhausted - rate limit exceeded or quota depleted.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Precondition failed - request cannot be processed in current state.
    #[error("precondition failed: {0}")]
    FailedPrecondition(String),

    /// Aborted - operation was aborted (concurrency conflict).
    #[error("aborted: {0}")]
    Aborted(String),

    /// Out of range - request value out of acceptable range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Unimplemented - operation not supported.
    #[error("unimplemented: {0}")]
    Unimplemented(String),

    /// Internal error - server-side error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Service unavailable - server is temporarily unavailable.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Data loss - unrecoverable data loss or corruption.
    #[error("data loss: {0}")]
    DataLoss(String),

    /// Cancelled - call was cancelled or the client was closed.
    #[error("cancelled: {0}")]
    Cancelled(String),

    /// Unknown error.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ClientError {
    /// Returns true if the default retry policy would retry this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::ResourceExhausted(_))
    }

    /// Returns the gRPC status code this error corresponds to.
    #[must_use]
    pub fn grpc_code(&self) -> Option<tonic::Code> {
        match self {
            Self::Config(err) => err.grpc_code(),
            Self::Dial { .. } => None,
            Self::DeadlineExceeded(_) => Some(tonic::Code::DeadlineExceeded),
            Self::Unauthenticated(_) => Some(tonic::Code::Unauthenticated),
            Self::PermissionDenied(_) => Some(tonic::Code::PermissionDenied),
            Self::NotFound(_) => Some(tonic::Code::NotFound),
            Self::InvalidArgument(_) => Some(tonic::Code::InvalidArgument),
            Self::AlreadyExists(_) => Some(tonic::Code::AlreadyExists),
            Self::ResourceExhausted(_) => Some(tonic::Code::ResourceExhausted),
            Self::FailedPrecondition(_) => Some(tonic::Code::FailedPrecondition),
            Self::Aborted(_) => Some(tonic::Code::Aborted),
            Self::OutOfRange(_) => Some(tonic::Code::OutOfRange),
            Self::Unimplemented(_) => Some(tonic::Code::Unimplemented),
            Self::Internal(_) => Some(tonic::Code::Internal),
            Self::Unavailable(_) => Some(tonic::Code::Unavailable),
            Self::DataLoss(_) => Some(tonic::Code::DataLoss),
            Self::Cancelled(_) => Some(tonic::Code::Cancelled),
            Self::Unknown(_) => Some(tonic::Code::Unknown),
        }
    }

    /// Create a dial error.
    pub fn dial(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Dial {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }
}

impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();

        match status.code() {
            tonic::Code::Ok => Self::Unknown("unexpected OK status".to_string()),
            tonic::Code::Cancelled => Self::Cancelled(message),
            tonic::Code::Unknown => Self::Unknown(message),
            tonic::Code::InvalidArgument => Self::InvalidArgument(message),
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded(message),
            tonic::Code::NotFound => Self::NotFound(message),
            tonic::Code::AlreadyExists => Self::AlreadyExists(message),
            tonic::Code::PermissionDenied => Self::PermissionDenied(message),
            tonic::Code::ResourceExhausted => Self::ResourceExhausted(message),
            tonic::Code::FailedPrecondition => Self::FailedPrecondition(message),
            tonic::Code::Aborted => Self::Aborted(message),
            tonic::Code::OutOfRange => Self::OutOfRange(message),
            tonic::Code::Unimplemented => Self::Unimplemented(message),
            tonic::Code::Internal => Self::Internal(message),
            tonic::Code::Unavailable => Self::Unavailable(message),
            tonic::Code::DataLoss => Self::DataLoss(message),
            tonic::Code::Unauthenticated => Self::Unauthenticated(message),
        }
    }
}
