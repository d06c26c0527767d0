//! IlluminanceMeasurement cluster (0x0400).
//!
//! MeasuredValue is 10000 * log10(lux) + 1.

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for IlluminanceMeasurement
pub const CLUSTER_ID: u16 = 0x0400;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum IlluminanceAttribute {
    /// 10000 * log10(lux) + 1
    MeasuredValue = 0x0000,
    /// Lowest measurable value
    MinMeasuredValue = 0x0001,
    /// Highest measurable value
    MaxMeasuredValue = 0x0002,
    /// Measurement tolerance
    Tolerance = 0x0003,
    /// Photodiode, CMOS, ...
    LightSensorType = 0x0004,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "illuminance",
    attributes: &[
        AttributeDef::read(
            IlluminanceAttribute::MeasuredValue as u16,
            "measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            IlluminanceAttribute::MinMeasuredValue as u16,
            "min_measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            IlluminanceAttribute::MaxMeasuredValue as u16,
            "max_measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            IlluminanceAttribute::Tolerance as u16,
            "tolerance",
            WireType::Uint16,
        ),
        AttributeDef::read(
            IlluminanceAttribute::LightSensorType as u16,
            "light_sensor_type",
            WireType::Enum8,
        ),
    ],
};
