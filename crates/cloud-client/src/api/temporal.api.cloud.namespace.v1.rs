// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct NamespaceSpec {
    /// The name to use for the namespace.
    /// This will create a namespace that's available at '<name>.<account>.tmprl.cloud:7233'.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The ids of the regions where the namespace should be available.
    #[prost(string, repeated, tag = "2")]
    pub regions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// The number of days the workflows data will be retained for.
    #[prost(int32, tag = "3")]
    pub retention_days: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Namespace {
    /// The namespace identifier.
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    /// The current version of the namespace specification.
    /// The next update operation will have to include this version.
    #[prost(string, tag = "2")]
    pub resource_version: ::prost::alloc::string::String,
    /// The namespace specification.
    #[prost(message, optional, tag = "3")]
    pub spec: ::core::option::Option<NamespaceSpec>,
    /// The id of the async operation that is creating/updating/deleting the namespace, if any.
    #[prost(string, tag = "5")]
    pub async_operation_id: ::prost::alloc::string::String,
    /// The current state of the namespace.
    #[prost(enumeration = "super::super::resource::v1::ResourceState", tag = "13")]
    pub state: i32,
}
