//! TemperatureMeasurement cluster (0x0402).
//!
//! Temperature is reported in centi-degrees Celsius as a signed 16-bit value.

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for TemperatureMeasurement
pub const CLUSTER_ID: u16 = 0x0402;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum TemperatureAttribute {
    /// Measured temperature in centi-degrees Celsius
    MeasuredValue = 0x0000,
    /// Lowest measurable temperature
    MinMeasuredValue = 0x0001,
    /// Highest measurable temperature
    MaxMeasuredValue = 0x0002,
    /// Measurement tolerance
    Tolerance = 0x0003,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "temperature",
    attributes: &[
        AttributeDef::read(
            TemperatureAttribute::MeasuredValue as u16,
            "measured_value",
            WireType::Int16,
        ),
        AttributeDef::read(
            TemperatureAttribute::MinMeasuredValue as u16,
            "min_measured_value",
            WireType::Int16,
        ),
        AttributeDef::read(
            TemperatureAttribute::MaxMeasuredValue as u16,
            "max_measured_value",
            WireType::Int16,
        ),
        AttributeDef::read(
            TemperatureAttribute::Tolerance as u16,
            "tolerance",
            WireType::Uint16,
        ),
    ],
};
