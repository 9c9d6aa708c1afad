//! Integration tests for cloud-client.
//!
//! Calls go through the real stub, codec and layer stack into an in-process
//! mock transport, so these tests observe exactly what would be put on the
//! wire for every physical attempt.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cloud_client::api::cloudservice::v1::{
    CreateNamespaceRequest, CreateUserRequest, DeleteUserRequest, GetAsyncOperationRequest,
    GetNamespacesRequest,
};
use cloud_client::api::identity::v1::UserSpec;
use cloud_client::api::namespace::v1::NamespaceSpec;
use cloud_client::credentials::BoxError;
use cloud_client::{
    api_key_fn, ClientError, ClientOptions, CloudClient, ConfigError, RetryConfig, StaticApiKey,
    API_VERSION_HEADER,
};
use common::MockCloudService;
use tonic::Code;

fn client_with(options: ClientOptions, mock: &MockCloudService) -> CloudClient {
    common::init_tracing();
    CloudClient::with_transport(options, mock.clone()).unwrap()
}

fn api_key_options() -> ClientOptions {
    ClientOptions::builder().api_key("k1").build()
}

fn create_namespace(async_operation_id: &str) -> CreateNamespaceRequest {
    CreateNamespaceRequest {
        spec: Some(NamespaceSpec {
            name: "payments".to_string(),
            regions: vec!["aws-us-east-1".to_string()],
            retention_days: 30,
        }),
        async_operation_id: async_operation_id.to_string(),
    }
}

// =============================================================================
// Construction
// =============================================================================

#[tokio::test]
async fn test_default_endpoint_client_constructs_and_closes() {
    let client = CloudClient::new(api_key_options()).unwrap();

    assert_eq!(client.endpoint(), "https://saas-api.tmprl.cloud:443");
    client.close();
    assert!(client.is_closed());
}

#[tokio::test]
async fn test_conflicting_credentials_rejected_before_network() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key("k1")
        .api_key_reader(StaticApiKey::new("k2"))
        .build();

    let err = CloudClient::with_transport(options, mock.clone()).unwrap_err();

    assert!(matches!(
        err,
        ClientError::Config(ConfigError::ConflictingCredentials)
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credentials_is_unauthenticated() {
    let err = CloudClient::new(ClientOptions::builder().build()).unwrap_err();

    assert_eq!(err.grpc_code(), Some(Code::Unauthenticated));
}

#[tokio::test]
async fn test_invalid_endpoint_is_dial_error() {
    let options = ClientOptions::builder()
        .api_key("k1")
        .endpoint("https://not a host")
        .build();

    let err = CloudClient::new(options).unwrap_err();
    assert!(matches!(err, ClientError::Dial { .. }));
}

// =============================================================================
// Credentials and version metadata
// =============================================================================

#[tokio::test]
async fn test_call_carries_bearer_token_and_version() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);

    client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].path,
        "/temporal.api.cloud.cloudservice.v1.CloudService/GetNamespaces"
    );
    assert_eq!(calls[0].header("authorization"), Some("Bearer k1"));
    assert_eq!(calls[0].header(API_VERSION_HEADER), Some("v0.3.0"));
    assert_eq!(calls[0].header_count(API_VERSION_HEADER), 1);
}

#[tokio::test]
async fn test_caller_version_header_is_replaced() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key("k1")
        .api_version("v0.4.0")
        .build();
    let client = client_with(options, &mock);

    let mut request = tonic::Request::new(GetNamespacesRequest::default());
    request
        .metadata_mut()
        .insert(API_VERSION_HEADER, "v0.0.1".parse().unwrap());
    client.cloud_service().get_namespaces(request).await.unwrap();

    let call = &mock.calls()[0];
    assert_eq!(call.header(API_VERSION_HEADER), Some("v0.4.0"));
    assert_eq!(call.header_count(API_VERSION_HEADER), 1);
}

#[tokio::test]
async fn test_plaintext_endpoint_refuses_to_send_key() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key("k1")
        .endpoint("http://localhost:7233")
        .build();

    let err = CloudClient::with_transport(options, mock.clone()).unwrap_err();

    assert!(matches!(
        err,
        ClientError::Config(ConfigError::PlaintextEndpoint(_))
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_anonymous_plaintext_endpoint_requires_insecure() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .allow_anonymous(true)
        .endpoint("http://saas-api.tmprl.cloud:443")
        .build();

    let err = CloudClient::with_transport(options, mock.clone()).unwrap_err();

    assert!(matches!(
        err,
        ClientError::Config(ConfigError::PlaintextEndpoint(_))
    ));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_insecure_allowed_sends_key_over_plaintext() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key("k1")
        .endpoint("localhost:7233")
        .allow_insecure(true)
        .build();
    let client = client_with(options, &mock);

    assert_eq!(client.endpoint(), "http://localhost:7233");
    client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap();

    assert_eq!(mock.calls()[0].header("authorization"), Some("Bearer k1"));
}

#[tokio::test]
async fn test_anonymous_client_sends_no_authorization() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder().allow_anonymous(true).build();
    let client = client_with(options, &mock);

    client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap();

    let call = &mock.calls()[0];
    assert_eq!(call.header("authorization"), None);
    assert_eq!(call.header(API_VERSION_HEADER), Some("v0.3.0"));
}

#[tokio::test]
async fn test_reader_failure_fails_call_without_sending() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key_reader(api_key_fn(|| async {
            Err::<String, BoxError>("secret store unavailable".into())
        }))
        .build();
    let client = client_with(options, &mock);

    let status = client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unauthenticated);
    assert!(status.message().contains("secret store unavailable"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_slow_reader_hits_call_deadline() {
    let mock = MockCloudService::new();
    let options = ClientOptions::builder()
        .api_key_reader(api_key_fn(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, BoxError>("late".to_string())
        }))
        .build();
    let client = client_with(options, &mock);

    let mut request = tonic::Request::new(GetNamespacesRequest::default());
    request.set_timeout(Duration::from_secs(1));
    let status = client
        .cloud_service()
        .get_namespaces(request)
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::DeadlineExceeded);
    assert_eq!(mock.call_count(), 0);
}

// =============================================================================
// Idempotency keys
// =============================================================================

#[tokio::test]
async fn test_mutating_call_gets_generated_key() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);

    client
        .cloud_service()
        .create_namespace(create_namespace(""))
        .await
        .unwrap();

    let sent: CreateNamespaceRequest = mock.calls()[0].message();
    assert!(!sent.async_operation_id.is_empty());
    assert!(uuid::Uuid::parse_str(&sent.async_operation_id).is_ok());
    assert_eq!(sent.spec, create_namespace("").spec);
}

#[tokio::test]
async fn test_each_logical_call_gets_its_own_key() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);
    let mut service = client.cloud_service();

    service.create_namespace(create_namespace("")).await.unwrap();
    service.create_namespace(create_namespace("")).await.unwrap();

    let calls = mock.calls();
    let first: CreateNamespaceRequest = calls[0].message();
    let second: CreateNamespaceRequest = calls[1].message();
    assert_ne!(first.async_operation_id, second.async_operation_id);
}

#[tokio::test]
async fn test_caller_key_is_kept() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);

    client
        .cloud_service()
        .delete_user(DeleteUserRequest {
            user_id: "user-1".to_string(),
            resource_version: "7".to_string(),
            async_operation_id: "my-op-id".to_string(),
        })
        .await
        .unwrap();

    let sent: DeleteUserRequest = mock.calls()[0].message();
    assert_eq!(sent.async_operation_id, "my-op-id");
}

#[tokio::test]
async fn test_lookup_request_is_not_modified() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);

    let mut service = client.cloud_service();
    service
        .get_async_operation(GetAsyncOperationRequest::default())
        .await
        .unwrap();
    service
        .get_namespaces(GetNamespacesRequest {
            page_size: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    let calls = mock.calls();
    let lookup: GetAsyncOperationRequest = calls[0].message();
    assert_eq!(lookup.async_operation_id, "");
    let list: GetNamespacesRequest = calls[1].message();
    assert_eq!(list.page_size, 10);
}

// =============================================================================
// Retries
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_always_unavailable_makes_seven_attempts() {
    let mock = MockCloudService::always(Code::Unavailable);
    let client = client_with(api_key_options(), &mock);

    let status = client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(mock.call_count(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_preset_key_identical_across_retries() {
    let mock = MockCloudService::with_script([Code::Unavailable, Code::ResourceExhausted]);
    let client = client_with(api_key_options(), &mock);

    client
        .cloud_service()
        .create_user(CreateUserRequest {
            spec: Some(UserSpec {
                email: "ops@example.com".to_string(),
            }),
            async_operation_id: "my-op-id".to_string(),
        })
        .await
        .unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    for call in &calls {
        let sent: CreateUserRequest = call.message();
        assert_eq!(sent.async_operation_id, "my-op-id");
        assert_eq!(call.header("authorization"), Some("Bearer k1"));
        assert_eq!(call.header(API_VERSION_HEADER), Some("v0.3.0"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_generated_key_identical_across_retries() {
    let mock = MockCloudService::with_script([Code::Unavailable, Code::Unavailable]);
    let client = client_with(api_key_options(), &mock);

    client
        .cloud_service()
        .create_namespace(create_namespace(""))
        .await
        .unwrap();

    let keys: Vec<String> = mock
        .calls()
        .iter()
        .map(|call| call.message::<CreateNamespaceRequest>().async_operation_id)
        .collect();
    assert_eq!(keys.len(), 3);
    assert!(!keys[0].is_empty());
    assert!(keys.iter().all(|key| key == &keys[0]));
}

#[tokio::test(start_paused = true)]
async fn test_reader_consulted_on_every_attempt() {
    let mock = MockCloudService::with_script([Code::Unavailable, Code::Unavailable]);
    let counter = Arc::new(AtomicUsize::new(0));
    let reader_counter = counter.clone();
    let options = ClientOptions::builder()
        .api_key_reader(api_key_fn(move || {
            let n = reader_counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, BoxError>(format!("key-{n}")) }
        }))
        .build();
    let client = client_with(options, &mock);

    client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 3);
    let tokens: Vec<_> = mock
        .calls()
        .iter()
        .map(|call| call.header("authorization").unwrap().to_string())
        .collect();
    assert_eq!(tokens, vec!["Bearer key-0", "Bearer key-1", "Bearer key-2"]);
}

#[tokio::test(start_paused = true)]
async fn test_non_retryable_code_returned_immediately() {
    let mock = MockCloudService::with_script([Code::NotFound]);
    let client = client_with(api_key_options(), &mock);

    let status = client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 1);
    let err = ClientError::from(status);
    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(!err.is_retryable());
}

#[tokio::test(start_paused = true)]
async fn test_disable_retry_sends_once() {
    let mock = MockCloudService::always(Code::Unavailable);
    let options = ClientOptions::builder()
        .api_key("k1")
        .disable_retry(true)
        .build();
    let client = client_with(options, &mock);

    let status = client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_retry_config() {
    let mock = MockCloudService::always(Code::Aborted);
    let options = ClientOptions::builder()
        .api_key("k1")
        .retry_config(
            RetryConfig::default()
                .with_max_attempts(3)
                .with_retryable_codes([Code::Aborted]),
        )
        .build();
    let client = client_with(options, &mock);

    let status = client
        .cloud_service()
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Aborted);
    assert_eq!(mock.call_count(), 3);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_calls_after_close_are_cancelled() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);
    let mut service = client.cloud_service();

    service
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap();
    client.close();
    client.close();

    let status = service
        .get_namespaces(GetNamespacesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Cancelled);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let mock = MockCloudService::new();
    let client = client_with(api_key_options(), &mock);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .cloud_service()
                    .create_namespace(create_namespace(""))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut keys: Vec<String> = mock
        .calls()
        .iter()
        .map(|call| call.message::<CreateNamespaceRequest>().async_operation_id)
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 8);
}
