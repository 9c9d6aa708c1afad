// @generated
//! Temporal Cloud operations API.
//!
//! Checked-in output of the protobuf generator for the subset of
//! `temporal.api.cloud` used by this SDK. The service stub encodes requests
//! through [`crate::codec::CloudCodec`].
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::large_enum_variant)]

pub mod resource {
    pub mod v1 {
        include!("temporal.api.cloud.resource.v1.rs");
    }
}

pub mod operation {
    pub mod v1 {
        include!("temporal.api.cloud.operation.v1.rs");
    }
}

pub mod namespace {
    pub mod v1 {
        include!("temporal.api.cloud.namespace.v1.rs");
    }
}

pub mod identity {
    pub mod v1 {
        include!("temporal.api.cloud.identity.v1.rs");
    }
}

pub mod cloudservice {
    pub mod v1 {
        include!("temporal.api.cloud.cloudservice.v1.rs");
        include!("temporal.api.cloud.cloudservice.v1.tonic.rs");
    }
}
