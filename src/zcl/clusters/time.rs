//! Time cluster (0x000A).

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for Time
pub const CLUSTER_ID: u16 = 0x000A;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum TimeAttribute {
    /// Seconds since 2000-01-01 00:00 UTC
    Time = 0x0000,
    /// Master / synchronized / zone-master bits
    TimeStatus = 0x0001,
    /// Offset from UTC in seconds
    TimeZone = 0x0002,
    /// Start of daylight saving time
    DstStart = 0x0003,
    /// End of daylight saving time
    DstEnd = 0x0004,
    /// Daylight saving offset in seconds
    DstShift = 0x0005,
    /// time + time_zone
    StandardTime = 0x0006,
    /// standard_time plus any daylight saving shift
    LocalTime = 0x0007,
    /// When time was last set
    LastSetTime = 0x0008,
    /// Time stays valid until this instant
    ValidUntilTime = 0x0009,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "time",
    attributes: &[
        AttributeDef::read_write(TimeAttribute::Time as u16, "time", WireType::UtcTime),
        AttributeDef::read_write(
            TimeAttribute::TimeStatus as u16,
            "time_status",
            WireType::Bitmap8,
        ),
        AttributeDef::read_write(TimeAttribute::TimeZone as u16, "time_zone", WireType::Int32),
        AttributeDef::read_write(TimeAttribute::DstStart as u16, "dst_start", WireType::Uint32),
        AttributeDef::read_write(TimeAttribute::DstEnd as u16, "dst_end", WireType::Uint32),
        AttributeDef::read_write(TimeAttribute::DstShift as u16, "dst_shift", WireType::Int32),
        AttributeDef::read(
            TimeAttribute::StandardTime as u16,
            "standard_time",
            WireType::Uint32,
        ),
        AttributeDef::read(TimeAttribute::LocalTime as u16, "local_time", WireType::Uint32),
        AttributeDef::read(
            TimeAttribute::LastSetTime as u16,
            "last_set_time",
            WireType::UtcTime,
        ),
        AttributeDef::read_write(
            TimeAttribute::ValidUntilTime as u16,
            "valid_until_time",
            WireType::UtcTime,
        ),
    ],
};
