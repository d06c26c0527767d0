//! Basic cluster (0x0000).
//!
//! Carries the manufacturer name and model identifier that device
//! discovery matches quirks against.

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for Basic
pub const CLUSTER_ID: u16 = 0x0000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum BasicAttribute {
    /// ZCL revision the device implements
    ZclVersion = 0x0000,
    /// Application firmware version
    AppVersion = 0x0001,
    /// Network stack version
    StackVersion = 0x0002,
    /// Hardware revision
    HwVersion = 0x0003,
    /// Manufacturer name string
    Manufacturer = 0x0004,
    /// Model identifier string
    Model = 0x0005,
    /// Manufacturing date code
    DateCode = 0x0006,
    /// Primary power source enum
    PowerSource = 0x0007,
    /// User-set location text
    LocationDescription = 0x0010,
    /// Physical environment enum
    PhysicalEnv = 0x0011,
    /// Device enabled flag
    DeviceEnabled = 0x0012,
    /// Firmware build identifier
    SwBuildId = 0x4000,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "basic",
    attributes: &[
        AttributeDef::read(BasicAttribute::ZclVersion as u16, "zcl_version", WireType::Uint8),
        AttributeDef::read(BasicAttribute::AppVersion as u16, "app_version", WireType::Uint8),
        AttributeDef::read(
            BasicAttribute::StackVersion as u16,
            "stack_version",
            WireType::Uint8,
        ),
        AttributeDef::read(BasicAttribute::HwVersion as u16, "hw_version", WireType::Uint8),
        AttributeDef::read(
            BasicAttribute::Manufacturer as u16,
            "manufacturer",
            WireType::CharString,
        ),
        AttributeDef::read(BasicAttribute::Model as u16, "model", WireType::CharString),
        AttributeDef::read(
            BasicAttribute::DateCode as u16,
            "date_code",
            WireType::CharString,
        ),
        AttributeDef::read(
            BasicAttribute::PowerSource as u16,
            "power_source",
            WireType::Enum8,
        ),
        AttributeDef::read_write(
            BasicAttribute::LocationDescription as u16,
            "location_desc",
            WireType::CharString,
        ),
        AttributeDef::read_write(
            BasicAttribute::PhysicalEnv as u16,
            "physical_env",
            WireType::Enum8,
        ),
        AttributeDef::read_write(
            BasicAttribute::DeviceEnabled as u16,
            "device_enabled",
            WireType::Bool,
        ),
        AttributeDef::read(
            BasicAttribute::SwBuildId as u16,
            "sw_build_id",
            WireType::CharString,
        ),
    ],
};
