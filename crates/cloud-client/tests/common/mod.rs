//! Common test utilities for cloud-client integration tests

pub mod mock_cloud;

#[allow(unused_imports)]
pub use mock_cloud::{MockCloudService, RecordedCall};

use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; filter with `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
