//! Zigbee device quirks library.
//!
//! Layers vendor-specific attributes onto standard ZCL clusters and declares
//! which attributes a host platform should expose as entities, per device
//! vendor/model.

pub mod config;
pub mod devices;
pub mod error;
pub mod quirk;
pub mod registry;
pub mod zcl;

pub use error::{QuirkError, Result};
pub use registry::DeviceRegistry;
