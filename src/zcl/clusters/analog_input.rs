//! AnalogInput cluster (0x000C).
//!
//! Generic analog value. Devices often use it for readings that have no
//! dedicated measurement cluster (VOC index, for example).

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for AnalogInput
pub const CLUSTER_ID: u16 = 0x000C;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum AnalogInputAttribute {
    /// Free-text description of the input
    Description = 0x001C,
    /// Upper bound of present_value
    MaxPresentValue = 0x0041,
    /// Lower bound of present_value
    MinPresentValue = 0x0045,
    /// Input is not tracking the physical sensor
    OutOfService = 0x0051,
    /// Current value, single precision
    PresentValue = 0x0055,
    /// Reliability enum of present_value
    Reliability = 0x0067,
    /// Smallest detectable change of present_value
    Resolution = 0x006A,
    /// In-alarm / fault / overridden / out-of-service bits
    StatusFlags = 0x006F,
    /// BACnet engineering unit of present_value
    EngineeringUnits = 0x0075,
    /// Application type and index
    ApplicationType = 0x0100,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "analog_input",
    attributes: &[
        AttributeDef::read_write(
            AnalogInputAttribute::Description as u16,
            "description",
            WireType::CharString,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::MaxPresentValue as u16,
            "max_present_value",
            WireType::Single,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::MinPresentValue as u16,
            "min_present_value",
            WireType::Single,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::OutOfService as u16,
            "out_of_service",
            WireType::Bool,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::PresentValue as u16,
            "present_value",
            WireType::Single,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::Reliability as u16,
            "reliability",
            WireType::Enum8,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::Resolution as u16,
            "resolution",
            WireType::Single,
        ),
        AttributeDef::read(
            AnalogInputAttribute::StatusFlags as u16,
            "status_flags",
            WireType::Bitmap8,
        ),
        AttributeDef::read_write(
            AnalogInputAttribute::EngineeringUnits as u16,
            "engineering_units",
            WireType::Enum16,
        ),
        AttributeDef::read(
            AnalogInputAttribute::ApplicationType as u16,
            "application_type",
            WireType::Uint32,
        ),
    ],
};
