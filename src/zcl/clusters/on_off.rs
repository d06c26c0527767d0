//! OnOff cluster (0x0006).

use crate::zcl::{AttributeDef, ClusterDef, WireType};
use strum::FromRepr;

/// ZCL Cluster ID for OnOff
pub const CLUSTER_ID: u16 = 0x0006;

#[derive(Clone, Copy, Debug, Eq, PartialEq, FromRepr)]
#[repr(u16)]
pub enum OnOffAttribute {
    /// Current on/off state
    OnOff = 0x0000,
    /// Global scene flag
    GlobalSceneControl = 0x4000,
    /// Tenths of a second before turning off
    OnTime = 0x4001,
    /// Tenths of a second to ignore on commands after off
    OffWaitTime = 0x4002,
    /// State applied after power loss
    StartUpOnOff = 0x4003,
}

pub const CLUSTER: ClusterDef = ClusterDef {
    id: CLUSTER_ID,
    name: "on_off",
    attributes: &[
        AttributeDef::read(OnOffAttribute::OnOff as u16, "on_off", WireType::Bool),
        AttributeDef::read(
            OnOffAttribute::GlobalSceneControl as u16,
            "global_scene_control",
            WireType::Bool,
        ),
        AttributeDef::read_write(OnOffAttribute::OnTime as u16, "on_time", WireType::Uint16),
        AttributeDef::read_write(
            OnOffAttribute::OffWaitTime as u16,
            "off_wait_time",
            WireType::Uint16,
        ),
        AttributeDef::read_write(
            OnOffAttribute::StartUpOnOff as u16,
            "start_up_on_off",
            WireType::Enum8,
        ),
    ],
};
