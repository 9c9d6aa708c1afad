// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct AsyncOperation {
    /// The operation id.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// The type of operation being performed.
    #[prost(string, tag = "4")]
    pub operation_type: ::prost::alloc::string::String,
    /// The failure reason if the operation is in the failed state.
    #[prost(string, tag = "6")]
    pub failure_reason: ::prost::alloc::string::String,
    /// The current state of this operation.
    #[prost(enumeration = "async_operation::State", tag = "9")]
    pub state: i32,
}
/// Nested message and enum types in `AsyncOperation`.
pub mod async_operation {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Unspecified = 0,
        /// The operation is pending.
        Pending = 1,
        /// The operation is in progress.
        InProgress = 2,
        /// The operation failed, check failure_reason for more details.
        Failed = 3,
        /// The operation was cancelled.
        Cancelled = 4,
        /// The operation was fulfilled.
        Fulfilled = 5,
        /// The operation was rejected.
        Rejected = 6,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "STATE_UNSPECIFIED",
                Self::Pending => "STATE_PENDING",
                Self::InProgress => "STATE_IN_PROGRESS",
                Self::Failed => "STATE_FAILED",
                Self::Cancelled => "STATE_CANCELLED",
                Self::Fulfilled => "STATE_FULFILLED",
                Self::Rejected => "STATE_REJECTED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "STATE_UNSPECIFIED" => Some(Self::Unspecified),
                "STATE_PENDING" => Some(Self::Pending),
                "STATE_IN_PROGRESS" => Some(Self::InProgress),
                "STATE_FAILED" => Some(Self::Failed),
                "STATE_CANCELLED" => Some(Self::Cancelled),
                "STATE_FULFILLED" => Some(Self::Fulfilled),
                "STATE_REJECTED" => Some(Self::Rejected),
                _ => None,
            }
        }
    }
}
