//! Zigbee Cluster Library definitions.
//!
//! This module is the standard cluster catalog that device quirks build on:
//! wire types, access modes and the attribute sets of the standard clusters
//! this crate knows about.

pub mod clusters;
mod types;

pub use types::{Access, AttributeDef, ClusterDef, WireType};
