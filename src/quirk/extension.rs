//! Vendor cluster extensions.
//!
//! An extension is a standard cluster plus a delta of vendor attributes. The
//! base attribute set is kept untouched; lookups see base attributes first,
//! then the vendor ones in declaration order.

use crate::error::{QuirkError, Result};
use crate::zcl::{AttributeDef, ClusterDef};
use log::debug;
use serde::Serialize;
use std::sync::Arc;

/// A standard cluster with vendor attributes layered on top.
///
/// Keeps the base cluster's id: the device still announces the standard
/// cluster, it just implements more attributes than the standard defines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterExtension {
    base: &'static ClusterDef,
    added: Vec<AttributeDef>,
}

impl ClusterExtension {
    /// Protocol cluster id (same as the base cluster).
    pub fn id(&self) -> u16 {
        self.base.id
    }

    pub fn name(&self) -> &'static str {
        self.base.name
    }

    pub fn base(&self) -> &'static ClusterDef {
        self.base
    }

    /// Vendor attributes only, in declaration order.
    pub fn added(&self) -> &[AttributeDef] {
        &self.added
    }

    /// All attributes: base set first, then vendor attributes.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDef> + '_ {
        self.base.attributes.iter().chain(self.added.iter())
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes().find(|a| a.name == name)
    }

    pub fn attribute_by_id(&self, id: u16) -> Option<&AttributeDef> {
        self.attributes().find(|a| a.id == id)
    }
}

/// Layer `new_attributes` onto `base`.
///
/// Fails with [`QuirkError::Conflict`] if a new attribute reuses an id or a
/// name already present on the base cluster or earlier in the delta.
pub fn define_extension(
    base: &'static ClusterDef,
    new_attributes: impl IntoIterator<Item = AttributeDef>,
) -> Result<ClusterExtension> {
    let mut added: Vec<AttributeDef> = Vec::new();

    for attr in new_attributes {
        let clash = base
            .attributes
            .iter()
            .chain(added.iter())
            .any(|existing| existing.id == attr.id || existing.name == attr.name);
        if clash {
            return Err(QuirkError::Conflict {
                cluster: base.name.to_string(),
                attribute: attr.name.to_string(),
                id: attr.id,
            });
        }
        debug!(
            "Extending cluster {} (0x{:04X}) with {} (0x{:04X}, {}, {})",
            base.name, base.id, attr.name, attr.id, attr.wire_type, attr.access
        );
        added.push(attr);
    }

    Ok(ClusterExtension { base, added })
}

/// The cluster a device exposes at some endpoint: either the vanilla
/// catalog definition or a vendor extension of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cluster", rename_all = "snake_case")]
pub enum ClusterRef {
    Standard(&'static ClusterDef),
    Extended(Arc<ClusterExtension>),
}

impl ClusterRef {
    pub fn id(&self) -> u16 {
        match self {
            Self::Standard(def) => def.id,
            Self::Extended(ext) => ext.id(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard(def) => def.name,
            Self::Extended(ext) => ext.name(),
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        match self {
            Self::Standard(def) => def.attribute(name),
            Self::Extended(ext) => ext.attribute(name),
        }
    }

    pub fn attribute_by_id(&self, id: u16) -> Option<&AttributeDef> {
        match self {
            Self::Standard(def) => def.attribute_by_id(id),
            Self::Extended(ext) => ext.attribute_by_id(id),
        }
    }

    pub fn attributes(&self) -> Box<dyn Iterator<Item = &AttributeDef> + '_> {
        match self {
            Self::Standard(def) => Box::new(def.attributes.iter()),
            Self::Extended(ext) => Box::new(ext.attributes()),
        }
    }
}

impl From<&'static ClusterDef> for ClusterRef {
    fn from(def: &'static ClusterDef) -> Self {
        Self::Standard(def)
    }
}

impl From<ClusterExtension> for ClusterRef {
    fn from(ext: ClusterExtension) -> Self {
        Self::Extended(Arc::new(ext))
    }
}

impl From<Arc<ClusterExtension>> for ClusterRef {
    fn from(ext: Arc<ClusterExtension>) -> Self {
        Self::Extended(ext)
    }
}
