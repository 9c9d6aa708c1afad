// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UserSpec {
    /// The email address associated to the user.
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct User {
    /// The id of the user.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// The current version of the user specification.
    /// The next update operation will have to include this version.
    #[prost(string, tag = "2")]
    pub resource_version: ::prost::alloc::string::String,
    /// The user specification.
    #[prost(message, optional, tag = "3")]
    pub spec: ::core::option::Option<UserSpec>,
    /// The id of the async operation that is creating/updating/deleting the user, if any.
    #[prost(string, tag = "5")]
    pub async_operation_id: ::prost::alloc::string::String,
    /// The current state of the user.
    #[prost(enumeration = "super::super::resource::v1::ResourceState", tag = "9")]
    pub state: i32,
}
