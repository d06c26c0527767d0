//! Device descriptor registry.
//!
//! Owned by whatever performs device discovery. All descriptors are expected
//! to be registered during startup, before the first lookup; the lock also
//! makes late (hot-reload) registration safe. Registered descriptors are
//! shared as immutable `Arc` snapshots.

use crate::error::{QuirkError, Result};
use crate::quirk::{DeviceDescriptor, DeviceIdentity};
use log::info;
use parking_lot::RwLock as SyncRwLock;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: SyncRwLock<HashMap<DeviceIdentity, Arc<DeviceDescriptor>>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under every identity it applies to.
    ///
    /// Fails with [`QuirkError::DuplicateDevice`] if any of those identities is
    /// already taken; nothing is inserted in that case.
    pub fn register(&self, descriptor: DeviceDescriptor) -> Result<Arc<DeviceDescriptor>> {
        let descriptor = Arc::new(descriptor);
        let mut devices = self.devices.write();

        if let Some(taken) = descriptor.identities().find(|id| devices.contains_key(*id)) {
            return Err(QuirkError::DuplicateDevice {
                vendor: taken.vendor.clone(),
                model: taken.model.clone(),
            });
        }

        for identity in descriptor.identities() {
            devices.insert(identity.clone(), descriptor.clone());
        }

        info!(
            "Registered quirk for {} ({} bindings, {} entities)",
            descriptor.identity(),
            descriptor.bindings().len(),
            descriptor.exposures().len()
        );
        Ok(descriptor)
    }

    /// Look up the descriptor for a discovered device.
    pub fn get(&self, vendor: &str, model: &str) -> Option<Arc<DeviceDescriptor>> {
        self.devices
            .read()
            .get(&DeviceIdentity::new(vendor, model))
            .cloned()
    }

    pub fn contains(&self, vendor: &str, model: &str) -> bool {
        self.devices
            .read()
            .contains_key(&DeviceIdentity::new(vendor, model))
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Distinct descriptors, ordered by primary identity.
    pub fn descriptors(&self) -> Vec<Arc<DeviceDescriptor>> {
        let devices = self.devices.read();
        let mut out: Vec<Arc<DeviceDescriptor>> = devices
            .iter()
            .filter(|(id, d)| *id == d.identity())
            .map(|(_, d)| d.clone())
            .collect();
        out.sort_by(|a, b| a.identity().cmp(b.identity()));
        out
    }

    /// Combined schema hash of all registered descriptors.
    pub fn schema_hash(&self) -> u64 {
        let descriptors = self.descriptors();
        let mut hasher = DefaultHasher::new();
        descriptors.len().hash(&mut hasher);
        for descriptor in &descriptors {
            descriptor.schema_hash().hash(&mut hasher);
        }
        hasher.finish()
    }
}
