//! RelativeHumidityMeasurement cluster (0x0405).
//!
//! Humidity is reported in centi-percent (value * 100).
//! For example: 55.5% is reported as 5550.

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for RelativeHumidityMeasurement
pub const CLUSTER_ID: u16 = 0x0405;

/// Attribute IDs for the RelativeHumidityMeasurement cluster
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum RelativeHumidityAttribute {
    /// Measured humidity in centi-percent
    MeasuredValue = 0x0000,
    /// Lowest measurable humidity
    MinMeasuredValue = 0x0001,
    /// Highest measurable humidity
    MaxMeasuredValue = 0x0002,
    /// Measurement tolerance
    Tolerance = 0x0003,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "relative_humidity",
    attributes: &[
        AttributeDef::read(
            RelativeHumidityAttribute::MeasuredValue as u16,
            "measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            RelativeHumidityAttribute::MinMeasuredValue as u16,
            "min_measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            RelativeHumidityAttribute::MaxMeasuredValue as u16,
            "max_measured_value",
            WireType::Uint16,
        ),
        AttributeDef::read(
            RelativeHumidityAttribute::Tolerance as u16,
            "tolerance",
            WireType::Uint16,
        ),
    ],
};
