// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetNamespacesRequest {
    /// The requested size of the page to retrieve - optional.
    /// Cannot exceed 1000. Defaults to 100.
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    /// The page token if this is continuing from another response - optional.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Filter namespaces by their name - optional.
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetNamespacesResponse {
    /// The list of namespaces in ascending name order.
    #[prost(message, repeated, tag = "1")]
    pub namespaces: ::prost::alloc::vec::Vec<super::super::namespace::v1::Namespace>,
    /// The next page's token.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetNamespaceRequest {
    /// The namespace to get.
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetNamespaceResponse {
    /// The namespace.
    #[prost(message, optional, tag = "1")]
    pub namespace: ::core::option::Option<super::super::namespace::v1::Namespace>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateNamespaceRequest {
    /// The namespace specification.
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<super::super::namespace::v1::NamespaceSpec>,
    /// The id to use for this async operation - optional.
    #[prost(string, tag = "3")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateNamespaceResponse {
    /// The namespace that was created.
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    /// The async operation.
    #[prost(message, optional, tag = "2")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateNamespaceRequest {
    /// The namespace to update.
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    /// The new namespace specification.
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<super::super::namespace::v1::NamespaceSpec>,
    /// The version of the namespace specification for which this update is intended for.
    /// The latest version can be found in the namespace status.
    #[prost(string, tag = "3")]
    pub resource_version: ::prost::alloc::string::String,
    /// The id to use for this async operation - optional.
    #[prost(string, tag = "4")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateNamespaceResponse {
    /// The async operation.
    #[prost(message, optional, tag = "1")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteNamespaceRequest {
    /// The namespace to delete.
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    /// The version of the namespace for which this delete is intended for.
    /// The latest version can be found in the namespace status.
    #[prost(string, tag = "2")]
    pub resource_version: ::prost::alloc::string::String,
    /// The id to use for this async operation - optional.
    #[prost(string, tag = "3")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteNamespaceResponse {
    /// The async operation.
    #[prost(message, optional, tag = "1")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetUsersRequest {
    /// The requested size of the page to retrieve - optional.
    /// Cannot exceed 1000. Defaults to 100.
    #[prost(int32, tag = "1")]
    pub page_size: i32,
    /// The page token if this is continuing from another response - optional.
    #[prost(string, tag = "2")]
    pub page_token: ::prost::alloc::string::String,
    /// Filter users by email address - optional.
    #[prost(string, tag = "3")]
    pub email: ::prost::alloc::string::String,
    /// Filter users by the namespace they have access to - optional.
    #[prost(string, tag = "4")]
    pub namespace: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetUsersResponse {
    /// The list of users in ascending ids order
    #[prost(message, repeated, tag = "1")]
    pub users: ::prost::alloc::vec::Vec<super::super::identity::v1::User>,
    /// The next page's token
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateUserRequest {
    /// The spec for the user to invite.
    #[prost(message, optional, tag = "1")]
    pub spec: ::core::option::Option<super::super::identity::v1::UserSpec>,
    /// The id to use for this async operation - optional.
    #[prost(string, tag = "2")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateUserResponse {
    /// The id of the user that was invited
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    /// The async operation
    #[prost(message, optional, tag = "2")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteUserRequest {
    /// The id of the user to delete.
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    /// The version of the user for which this delete is intended for.
    /// The latest version can be found in the GetUser operation response.
    #[prost(string, tag = "2")]
    pub resource_version: ::prost::alloc::string::String,
    /// The id to use for this async operation - optional.
    #[prost(string, tag = "3")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteUserResponse {
    /// The async operation
    #[prost(message, optional, tag = "1")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetAsyncOperationRequest {
    /// The id of the async operation to get.
    #[prost(string, tag = "1")]
    pub async_operation_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetAsyncOperationResponse {
    /// The async operation.
    #[prost(message, optional, tag = "1")]
    pub async_operation: ::core::option::Option<super::super::operation::v1::AsyncOperation>,
}
