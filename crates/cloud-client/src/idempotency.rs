//! Idempotency keys for mutating requests.
//!
//! Mutating cloud operations carry an `async_operation_id`. The server
//! deduplicates on it, so a retried create/update/delete is only applied once
//! as long as every attempt sends the same id.
//!
//! Message types opt in through [`IdempotentRequest`]. The
//! [`IdempotencyKeyInterceptor`] fills the field when it is empty and leaves
//! caller-supplied ids untouched. It runs from the request encoder
//! ([`crate::codec::CloudCodec`]), once per logical call and before the retry
//! layer replays the encoded message, so all physical attempts share one key.

use std::fmt;
use std::sync::Arc;

use crate::api::cloudservice::v1::{
    CreateNamespaceRequest, CreateUserRequest, DeleteNamespaceRequest, DeleteUserRequest,
    GetAsyncOperationRequest, GetNamespaceRequest, GetNamespacesRequest, GetUsersRequest,
    UpdateNamespaceRequest,
};

/// Capability of a request message to carry an idempotency key.
///
/// The default implementation reports that the message has no such field.
pub trait IdempotentRequest {
    /// Mutable access to the idempotency key field, if the message declares one.
    fn idempotency_key_mut(&mut self) -> Option<&mut String> {
        None
    }
}

macro_rules! idempotent_requests {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IdempotentRequest for $ty {
                fn idempotency_key_mut(&mut self) -> Option<&mut String> {
                    Some(&mut self.async_operation_id)
                }
            }
        )*
    };
}

macro_rules! plain_requests {
    ($($ty:ty),* $(,)?) => {
        $(impl IdempotentRequest for $ty {})*
    };
}

idempotent_requests!(
    CreateNamespaceRequest,
    UpdateNamespaceRequest,
    DeleteNamespaceRequest,
    CreateUserRequest,
    DeleteUserRequest,
);

// `GetAsyncOperationRequest::async_operation_id` names the operation to look
// up. It is a query parameter, not an idempotency key.
plain_requests!(
    GetNamespacesRequest,
    GetNamespaceRequest,
    GetUsersRequest,
    GetAsyncOperationRequest,
);

type KeyGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Fills empty idempotency keys on outgoing requests.
#[derive(Clone)]
pub struct IdempotencyKeyInterceptor {
    generate: KeyGenerator,
}

impl IdempotencyKeyInterceptor {
    /// Create an interceptor that generates UUID v4 keys.
    pub fn new() -> Self {
        Self::with_generator(|| uuid::Uuid::new_v4().to_string())
    }

    /// Create an interceptor with a custom key generator.
    pub fn with_generator<F>(generate: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            generate: Arc::new(generate),
        }
    }

    /// Set the idempotency key on `request` if it has an empty one.
    ///
    /// Returns `true` when a key was generated. Requests without the field and
    /// requests with a caller-supplied key are left unchanged.
    pub fn intercept<M: IdempotentRequest>(&self, request: &mut M) -> bool {
        match request.idempotency_key_mut() {
            Some(key) if key.is_empty() => {
                *key = (self.generate)();
                tracing::trace!(idempotency_key = %key, "generated async operation id");
                true
            }
            _ => false,
        }
    }
}

impl Default for IdempotencyKeyInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdempotencyKeyInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdempotencyKeyInterceptor")
            .finish_non_exhaustive()
    }
}
