// @generated
// This file is @generated by prost-build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResourceState {
    Unspecified = 0,
    /// The resource is being activated.
    Activating = 1,
    /// The resource failed to activate. This is an error state. Reach out to support for remediation.
    ActivationFailed = 2,
    /// The resource is active and ready to use.
    Active = 3,
    /// The resource is being updated.
    Updating = 4,
    /// The resource failed to update. This is an error state. Reach out to support for remediation.
    UpdateFailed = 5,
    /// The resource is being deleted.
    Deleting = 6,
    /// The resource failed to delete. This is an error state. Reach out to support for remediation.
    DeleteFailed = 7,
    /// The resource has been deleted.
    Deleted = 8,
    /// The resource is suspended and not available for use. Reach out to support for remediation.
    Suspended = 9,
    /// The resource has expired and is no longer available for use.
    Expired = 10,
}
impl ResourceState {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "RESOURCE_STATE_UNSPECIFIED",
            Self::Activating => "RESOURCE_STATE_ACTIVATING",
            Self::ActivationFailed => "RESOURCE_STATE_ACTIVATION_FAILED",
            Self::Active => "RESOURCE_STATE_ACTIVE",
            Self::Updating => "RESOURCE_STATE_UPDATING",
            Self::UpdateFailed => "RESOURCE_STATE_UPDATE_FAILED",
            Self::Deleting => "RESOURCE_STATE_DELETING",
            Self::DeleteFailed => "RESOURCE_STATE_DELETE_FAILED",
            Self::Deleted => "RESOURCE_STATE_DELETED",
            Self::Suspended => "RESOURCE_STATE_SUSPENDED",
            Self::Expired => "RESOURCE_STATE_EXPIRED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "RESOURCE_STATE_UNSPECIFIED" => Some(Self::Unspecified),
            "RESOURCE_STATE_ACTIVATING" => Some(Self::Activating),
            "RESOURCE_STATE_ACTIVATION_FAILED" => Some(Self::ActivationFailed),
            "RESOURCE_STATE_ACTIVE" => Some(Self::Active),
            "RESOURCE_STATE_UPDATING" => Some(Self::Updating),
            "RESOURCE_STATE_UPDATE_FAILED" => Some(Self::UpdateFailed),
            "RESOURCE_STATE_DELETING" => Some(Self::Deleting),
            "RESOURCE_STATE_DELETE_FAILED" => Some(Self::DeleteFailed),
            "RESOURCE_STATE_DELETED" => Some(Self::Deleted),
            "RESOURCE_STATE_SUSPENDED" => Some(Self::Suspended),
            "RESOURCE_STATE_EXPIRED" => Some(Self::Expired),
            _ => None,
        }
    }
}
