//! Endpoint binding table.
//!
//! Records which cluster (standard or extended) lives at which endpoint of one
//! concrete device. Lookups are by exact (endpoint, cluster id) key.

use super::extension::{ClusterExtension, ClusterRef};
use crate::error::{QuirkError, Result};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// How a binding got into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingOrigin {
    /// What the platform sees on the device without any quirk applied.
    Assumed,
    /// Added by the quirk.
    Bound,
    /// Added by the quirk, overriding an assumed cluster at the same slot.
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointBinding {
    pub endpoint_id: u8,
    pub cluster: ClusterRef,
    pub origin: BindingOrigin,
}

impl EndpointBinding {
    pub fn cluster_id(&self) -> u16 {
        self.cluster.id()
    }
}

/// Cluster layout of one device, keyed by (endpoint, cluster id).
#[derive(Debug, Clone, Default)]
pub struct EndpointTable {
    bindings: BTreeMap<(u8, u16), EndpointBinding>,
    removed: BTreeSet<(u8, u16)>,
}

impl EndpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cluster the platform would assume from the device signature.
    ///
    /// Assumed bindings are the only ones [`replace`](Self::replace) may override.
    pub fn assume(
        &mut self,
        cluster: impl Into<ClusterRef>,
        endpoint_id: u8,
    ) -> Result<&EndpointBinding> {
        self.insert(cluster.into(), endpoint_id, BindingOrigin::Assumed)
    }

    /// Bind a cluster at an endpoint.
    ///
    /// Fails with [`QuirkError::DuplicateBinding`] if that cluster id is
    /// already bound there, whatever its origin.
    pub fn bind(
        &mut self,
        cluster: impl Into<ClusterRef>,
        endpoint_id: u8,
    ) -> Result<&EndpointBinding> {
        self.insert(cluster.into(), endpoint_id, BindingOrigin::Bound)
    }

    /// Put an extended cluster at an endpoint, overriding the standard cluster
    /// the platform would otherwise assume in that slot.
    ///
    /// A slot already set by `bind` or `replace` is a duplicate.
    pub fn replace(
        &mut self,
        extension: impl Into<Arc<ClusterExtension>>,
        endpoint_id: u8,
    ) -> Result<&EndpointBinding> {
        let cluster = ClusterRef::Extended(extension.into());
        let key = (endpoint_id, cluster.id());

        match self.bindings.get(&key).map(|b| b.origin) {
            Some(BindingOrigin::Assumed) => {
                debug!(
                    "Replacing assumed cluster 0x{:04X} at endpoint {} with extension",
                    key.1, endpoint_id
                );
                self.bindings.remove(&key);
            }
            Some(_) => {
                return Err(QuirkError::DuplicateBinding {
                    cluster_id: key.1,
                    endpoint: endpoint_id,
                });
            }
            None => {}
        }

        self.insert(cluster, endpoint_id, BindingOrigin::Replaced)
    }

    /// Drop a cluster the device advertises but does not really implement.
    ///
    /// The slot stays empty afterwards: lookups do not fall back to the
    /// standard catalog for it.
    pub fn remove(&mut self, cluster_id: u16, endpoint_id: u8) -> Option<EndpointBinding> {
        debug!(
            "Removing cluster 0x{:04X} from endpoint {}",
            cluster_id, endpoint_id
        );
        self.removed.insert((endpoint_id, cluster_id));
        self.bindings.remove(&(endpoint_id, cluster_id))
    }

    pub fn get(&self, endpoint_id: u8, cluster_id: u16) -> Option<&EndpointBinding> {
        self.bindings.get(&(endpoint_id, cluster_id))
    }

    pub fn is_removed(&self, endpoint_id: u8, cluster_id: u16) -> bool {
        self.removed.contains(&(endpoint_id, cluster_id))
    }

    /// All bindings at one endpoint, ordered by cluster id.
    pub fn clusters_on(&self, endpoint_id: u8) -> impl Iterator<Item = &EndpointBinding> {
        self.bindings
            .range((endpoint_id, u16::MIN)..=(endpoint_id, u16::MAX))
            .map(|(_, b)| b)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointBinding> {
        self.bindings.values()
    }

    pub fn removed(&self) -> impl Iterator<Item = (u8, u16)> + '_ {
        self.removed.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn insert(
        &mut self,
        cluster: ClusterRef,
        endpoint_id: u8,
        origin: BindingOrigin,
    ) -> Result<&EndpointBinding> {
        let key = (endpoint_id, cluster.id());
        if self.bindings.contains_key(&key) {
            return Err(QuirkError::DuplicateBinding {
                cluster_id: key.1,
                endpoint: endpoint_id,
            });
        }

        debug!(
            "Binding cluster {} (0x{:04X}) at endpoint {} ({:?})",
            cluster.name(),
            key.1,
            endpoint_id,
            origin
        );
        self.removed.remove(&key);
        Ok(self.bindings.entry(key).or_insert(EndpointBinding {
            endpoint_id,
            cluster,
            origin,
        }))
    }
}
