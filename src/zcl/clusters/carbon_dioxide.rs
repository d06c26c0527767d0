//! CarbonDioxideConcentration cluster (0x040D).
//!
//! Concentration is reported as a fraction (ppm * 1e-6) in single precision.

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for CarbonDioxideConcentration
pub const CLUSTER_ID: u16 = 0x040D;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum CarbonDioxideAttribute {
    /// CO2 concentration as a fraction (1.0 = 100%)
    MeasuredValue = 0x0000,
    /// Lowest measurable concentration
    MinMeasuredValue = 0x0001,
    /// Highest measurable concentration
    MaxMeasuredValue = 0x0002,
    /// Measurement tolerance
    Tolerance = 0x0003,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "carbon_dioxide_concentration",
    attributes: &[
        AttributeDef::read(
            CarbonDioxideAttribute::MeasuredValue as u16,
            "measured_value",
            WireType::Single,
        ),
        AttributeDef::read(
            CarbonDioxideAttribute::MinMeasuredValue as u16,
            "min_measured_value",
            WireType::Single,
        ),
        AttributeDef::read(
            CarbonDioxideAttribute::MaxMeasuredValue as u16,
            "max_measured_value",
            WireType::Single,
        ),
        AttributeDef::read(
            CarbonDioxideAttribute::Tolerance as u16,
            "tolerance",
            WireType::Single,
        ),
    ],
};
