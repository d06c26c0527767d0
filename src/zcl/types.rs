//! Core ZCL metadata types shared by standard clusters and vendor extensions.

use serde::Serialize;
use strum::Display;

/// Primitive scalar type of an attribute on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WireType {
    Bool,
    Uint8,
    Uint16,
    Uint24,
    Uint32,
    Int8,
    Int16,
    Int32,
    Enum8,
    Enum16,
    Bitmap8,
    Single,
    CharString,
    UtcTime,
}

impl WireType {
    /// Inclusive value domain for numeric types, `None` for non-numeric ones.
    pub fn numeric_range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Uint8 => Some((0.0, u8::MAX as f64)),
            Self::Uint16 => Some((0.0, u16::MAX as f64)),
            Self::Uint24 => Some((0.0, 16_777_215.0)),
            Self::Uint32 => Some((0.0, u32::MAX as f64)),
            Self::Int8 => Some((i8::MIN as f64, i8::MAX as f64)),
            Self::Int16 => Some((i16::MIN as f64, i16::MAX as f64)),
            Self::Int32 => Some((i32::MIN as f64, i32::MAX as f64)),
            Self::Single => Some((f32::MIN as f64, f32::MAX as f64)),
            Self::Bool
            | Self::Enum8
            | Self::Enum16
            | Self::Bitmap8
            | Self::CharString
            | Self::UtcTime => None,
        }
    }

    /// Integer types hold whole numbers only.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Uint8
                | Self::Uint16
                | Self::Uint24
                | Self::Uint32
                | Self::Int8
                | Self::Int16
                | Self::Int32
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric_range().is_some()
    }

    /// Whether every value in `[min, max]` fits this type.
    pub fn can_represent(&self, min: f64, max: f64) -> bool {
        match self.numeric_range() {
            Some((lo, hi)) => min >= lo && max <= hi,
            None => false,
        }
    }
}

/// Who may touch an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Access {
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    Read,
    #[serde(rename = "rw")]
    #[strum(serialize = "rw")]
    ReadWrite,
}

impl Access {
    pub fn is_writable(&self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}

/// A single attribute of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeDef {
    pub id: u16,
    pub name: &'static str,
    pub wire_type: WireType,
    pub access: Access,
}

impl AttributeDef {
    pub const fn new(id: u16, name: &'static str, wire_type: WireType, access: Access) -> Self {
        Self {
            id,
            name,
            wire_type,
            access,
        }
    }

    pub const fn read(id: u16, name: &'static str, wire_type: WireType) -> Self {
        Self::new(id, name, wire_type, Access::Read)
    }

    pub const fn read_write(id: u16, name: &'static str, wire_type: WireType) -> Self {
        Self::new(id, name, wire_type, Access::ReadWrite)
    }
}

/// A standard cluster definition from the catalog.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ClusterDef {
    pub id: u16,
    pub name: &'static str,
    pub attributes: &'static [AttributeDef],
}

impl ClusterDef {
    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attribute_by_id(&self, id: u16) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.id == id)
    }
}
