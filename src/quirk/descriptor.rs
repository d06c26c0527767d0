//! Frozen device descriptor.
//!
//! The closure of one vendor/model identity, its endpoint bindings and its
//! entity exposures. Built once by [`QuirkBuilder::finalize`] and never
//! mutated afterwards.
//!
//! [`QuirkBuilder::finalize`]: super::QuirkBuilder::finalize

use super::endpoints::EndpointBinding;
use super::exposure::ExposureDeclaration;
use super::extension::ClusterRef;
use serde::Serialize;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Vendor + model pair as reported by the device during discovery.
///
/// Both strings are matched exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DeviceIdentity {
    pub vendor: String,
    pub model: String,
}

impl DeviceIdentity {
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.vendor, self.model)
    }
}

/// A cluster the quirk removed from an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovedCluster {
    pub endpoint_id: u8,
    pub cluster_id: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDescriptor {
    identity: DeviceIdentity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    also_applies_to: Vec<DeviceIdentity>,
    bindings: Vec<EndpointBinding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    removed: Vec<RemovedCluster>,
    exposures: Vec<ExposureDeclaration>,
}

impl DeviceDescriptor {
    pub(crate) fn new(
        identity: DeviceIdentity,
        also_applies_to: Vec<DeviceIdentity>,
        bindings: Vec<EndpointBinding>,
        removed: Vec<RemovedCluster>,
        exposures: Vec<ExposureDeclaration>,
    ) -> Self {
        Self {
            identity,
            also_applies_to,
            bindings,
            removed,
            exposures,
        }
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn vendor(&self) -> &str {
        &self.identity.vendor
    }

    pub fn model(&self) -> &str {
        &self.identity.model
    }

    /// Primary identity followed by any additional ones.
    pub fn identities(&self) -> impl Iterator<Item = &DeviceIdentity> {
        std::iter::once(&self.identity).chain(self.also_applies_to.iter())
    }

    pub fn bindings(&self) -> &[EndpointBinding] {
        &self.bindings
    }

    pub fn removed(&self) -> &[RemovedCluster] {
        &self.removed
    }

    pub fn exposures(&self) -> &[ExposureDeclaration] {
        &self.exposures
    }

    /// The cluster the host should use at a slot, if the quirk defines one.
    ///
    /// `None` means the quirk leaves that slot to the platform's own view.
    pub fn cluster_at(&self, endpoint_id: u8, cluster_id: u16) -> Option<&ClusterRef> {
        self.bindings
            .iter()
            .find(|b| b.endpoint_id == endpoint_id && b.cluster_id() == cluster_id)
            .map(|b| &b.cluster)
    }

    pub fn clusters_on(&self, endpoint_id: u8) -> impl Iterator<Item = &ClusterRef> {
        self.bindings
            .iter()
            .filter(move |b| b.endpoint_id == endpoint_id)
            .map(|b| &b.cluster)
    }

    pub fn is_removed(&self, endpoint_id: u8, cluster_id: u16) -> bool {
        self.removed
            .iter()
            .any(|r| r.endpoint_id == endpoint_id && r.cluster_id == cluster_id)
    }

    pub fn exposure(&self, unique_id: &str) -> Option<&ExposureDeclaration> {
        self.exposures.iter().find(|e| e.unique_id == unique_id)
    }

    pub fn exposures_on(&self, endpoint_id: u8) -> impl Iterator<Item = &ExposureDeclaration> {
        self.exposures
            .iter()
            .filter(move |e| e.endpoint_id == endpoint_id)
    }

    /// Compute a hash of this descriptor's structure.
    ///
    /// Covers identities, cluster layout and the exposed entities (kind,
    /// attribute id and unique id). Hosts can compare it across runs to
    /// detect that a device definition changed and cached entities are stale.
    pub fn schema_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for identity in self.identities() {
            identity.hash(&mut hasher);
        }
        self.bindings.len().hash(&mut hasher);
        for binding in &self.bindings {
            binding.endpoint_id.hash(&mut hasher);
            binding.cluster_id().hash(&mut hasher);
            for attr in binding.cluster.attributes() {
                attr.hash(&mut hasher);
            }
        }
        self.exposures.len().hash(&mut hasher);
        for exposure in &self.exposures {
            exposure.unique_id.hash(&mut hasher);
            exposure.kind().hash(&mut hasher);
            exposure.attribute.id.hash(&mut hasher);
        }
        hasher.finish()
    }
}
