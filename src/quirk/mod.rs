//! Device quirks: vendor cluster extensions, endpoint layout and entity
//! exposures, composed into one immutable [`DeviceDescriptor`].
//!
//! - `extension`: standard cluster + vendor attribute delta
//! - `endpoints`: which cluster lives at which endpoint
//! - `exposure`: user-facing controls and their presentation metadata
//! - `builder`: the declarative builder tying the three together

pub mod builder;
pub mod descriptor;
pub mod endpoints;
pub mod exposure;
pub mod extension;

pub use builder::QuirkBuilder;
pub use descriptor::{DeviceDescriptor, DeviceIdentity, RemovedCluster};
pub use endpoints::{BindingOrigin, EndpointBinding, EndpointTable};
pub use exposure::{
    Control, ControlKind, DeviceClass, EntityCategory, ExposureDeclaration, NumberRange,
    Presentation, ReportingConfig, StateClass, Unit, derive_unique_id,
};
pub use extension::{ClusterExtension, ClusterRef, define_extension};
