//! Client metrics for observability.
//!
//! # Metrics
//!
//! - `cloud_client_requests_total` - Counter of logical calls by method and final gRPC code
//! - `cloud_client_retries_total` - Counter of retry attempts by method
//! - `cloud_client_credential_failures_total` - Counter of calls refused before sending, by reason
//!
//! Metrics are recorded whenever a `metrics` recorder is installed by the
//! application and are no-ops otherwise.
//!
//! ```ignore
//! use metrics_exporter_prometheus::PrometheusBuilder;
//!
//! PrometheusBuilder::new().install().unwrap();
//! cloud_client::metrics::describe_metrics();
//! ```

use metrics::counter;
use tonic::Code;

/// Metric name for total logical calls.
pub const REQUESTS_TOTAL: &str = "cloud_client_requests_total";

/// Metric name for retry counter.
pub const RETRIES_TOTAL: &str = "cloud_client_retries_total";

/// Metric name for calls refused by the credentials layer.
pub const CREDENTIAL_FAILURES_TOTAL: &str = "cloud_client_credential_failures_total";

/// Lower-case label for a gRPC code.
#[must_use]
pub fn code_label(code: Code) -> &'static str {
    match code {
        Code::Ok => "ok",
        Code::Cancelled => "cancelled",
        Code::Unknown => "unknown",
        Code::InvalidArgument => "invalid_argument",
        Code::DeadlineExceeded => "deadline_exceeded",
        Code::NotFound => "not_found",
        Code::AlreadyExists => "already_exists",
        Code::PermissionDenied => "permission_denied",
        Code::ResourceExhausted => "resource_exhausted",
        Code::FailedPrecondition => "failed_precondition",
        Code::Aborted => "aborted",
        Code::OutOfRange => "out_of_range",
        Code::Unimplemented => "unimplemented",
        Code::Internal => "internal",
        Code::Unavailable => "unavailable",
        Code::DataLoss => "data_loss",
        Code::Unauthenticated => "unauthenticated",
    }
}

/// Record the final outcome of a logical call.
///
/// # Arguments
///
/// * `method` - The gRPC method path
/// * `code` - The final gRPC code seen by the caller
pub fn record_request(method: &str, code: Code) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "code" => code_label(code)
    )
    .increment(1);
}

/// Record a retry attempt.
pub fn record_retry(method: &str) {
    counter!(RETRIES_TOTAL, "method" => method.to_string()).increment(1);
}

/// Record a call refused because credentials could not be attached.
pub fn record_credential_failure(reason: &'static str) {
    counter!(CREDENTIAL_FAILURES_TOTAL, "reason" => reason).increment(1);
}

/// Describe all metrics for registration with a recorder.
pub fn describe_metrics() {
    use metrics::{describe_counter, Unit};

    describe_counter!(
        REQUESTS_TOTAL,
        Unit::Count,
        "Total number of cloud ops API calls by final gRPC code"
    );

    describe_counter!(
        RETRIES_TOTAL,
        Unit::Count,
        "Total number of retry attempts by the cloud ops client"
    );

    describe_counter!(
        CREDENTIAL_FAILURES_TOTAL,
        Unit::Count,
        "Total number of calls refused because credentials could not be attached"
    );
}
