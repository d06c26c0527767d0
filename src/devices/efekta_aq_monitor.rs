//! EfektaLab air quality monitor (EFEKTA_AQ_Smart_Monitor_Gen2).
//!
//! Three endpoints:
//! - 1: Time (+ device lifetime counter) and Illuminance (+ LED night mode)
//! - 2: CO2 concentration (+ SCD4x sensor settings and calibration)
//! - 3: AnalogInput carrying the VOC index

use crate::error::Result;
use crate::quirk::{
    ClusterExtension, DeviceClass, DeviceDescriptor, EntityCategory, NumberRange, Presentation,
    QuirkBuilder, ReportingConfig, Unit, define_extension,
};
use crate::registry::DeviceRegistry;
use crate::zcl::clusters::{analog_input, carbon_dioxide, illuminance, time};
use crate::zcl::{AttributeDef, WireType};
use std::sync::Arc;

pub const VENDOR: &str = "EfektaLab";
pub const MODEL: &str = "EFEKTA_AQ_Smart_Monitor_Gen2";

pub const TIME_ENDPOINT: u8 = 1;
pub const ILLUMINANCE_ENDPOINT: u8 = 1;
pub const CO2_ENDPOINT: u8 = 2;
pub const VOC_ENDPOINT: u8 = 3;

/// CO2 cluster with the sensor's configuration attributes.
pub fn co2_cluster() -> Result<ClusterExtension> {
    define_extension(
        &carbon_dioxide::CLUSTER,
        [
            AttributeDef::read_write(0x0201, "reading_interval", WireType::Uint16),
            AttributeDef::read_write(0x0202, "forced_recalibration", WireType::Bool),
            AttributeDef::read_write(0x0207, "manual_forced_recalibration", WireType::Uint16),
            AttributeDef::read_write(0x0402, "automatic_self_calibration", WireType::Bool),
            AttributeDef::read_write(0x0206, "factory_reset_co2", WireType::Bool),
            AttributeDef::read_write(0x0220, "enable_co2_gas", WireType::Bool),
            AttributeDef::read_write(0x0221, "high_co2_gas", WireType::Uint16),
            AttributeDef::read_write(0x0222, "low_co2_gas", WireType::Uint16),
            AttributeDef::read_write(0x0205, "altitude", WireType::Uint16),
        ],
    )
}

/// Time cluster reused to carry the uptime counter (hours).
pub fn time_cluster() -> Result<ClusterExtension> {
    define_extension(
        &time::CLUSTER,
        [AttributeDef::read(0x0199, "lifetime", WireType::Uint32)],
    )
}

/// Illuminance cluster with the display night mode settings.
pub fn illuminance_cluster() -> Result<ClusterExtension> {
    define_extension(
        &illuminance::CLUSTER,
        [
            AttributeDef::read_write(0x0401, "night_mode", WireType::Bool),
            AttributeDef::read_write(0x0405, "night_mode_start_hour", WireType::Uint8),
            AttributeDef::read_write(0x0406, "night_mode_stop_hour", WireType::Uint8),
        ],
    )
}

pub fn quirk() -> Result<QuirkBuilder> {
    let co2 = Arc::new(co2_cluster()?);
    let time_ext = Arc::new(time_cluster()?);
    let illuminance_ext = Arc::new(illuminance_cluster()?);

    let mut builder = QuirkBuilder::new(VENDOR, MODEL);
    builder
        .replace(co2, CO2_ENDPOINT)?
        .replace(time_ext, TIME_ENDPOINT)?
        .replace(illuminance_ext, ILLUMINANCE_ENDPOINT)?
        .expose_measurement(
            "present_value",
            analog_input::CLUSTER_ID,
            VOC_ENDPOINT,
            ReportingConfig::new(10, 120, 1.0),
            Presentation::new("voc_index", "VOC index").device_class(DeviceClass::Aqi),
        )?
        .expose_counter(
            "lifetime",
            time::CLUSTER_ID,
            TIME_ENDPOINT,
            Unit::Hours,
            DeviceClass::Duration,
            Presentation::new("on_time", "Device lifetime")
                .entity_category(EntityCategory::Diagnostic),
        )?
        // Turns the LED off at night
        .expose_toggle(
            "night_mode",
            illuminance::CLUSTER_ID,
            ILLUMINANCE_ENDPOINT,
            Presentation::new("night_mode", "Night mode"),
        )?
        .expose_bounded_number(
            "reading_interval",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            NumberRange::new(6.0, 600.0, 1.0),
            Presentation::new("reading_delay", "Setting the sensor reading delay")
                .unique_id_suffix("reading_delay")
                .device_class(DeviceClass::Duration)
                .unit(Unit::Seconds),
        )?
        .expose_action(
            "forced_recalibration",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            Presentation::new(
                "forced_recalibration",
                "Start FRC (Perform Forced Recalibration of the CO2 Sensor)",
            )
            .unique_id_suffix("forced_recalibration"),
        )?
        .expose_bounded_number(
            "manual_forced_recalibration",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            NumberRange::new(0.0, 5000.0, 1.0),
            Presentation::new(
                "manual_forced_recalibration",
                "Start Manual FRC (Perform Forced Recalibration of the CO2 Sensor)",
            )
            .unique_id_suffix("manual_forced_recalibration")
            .unit(Unit::PartsPerMillion),
        )?
        .expose_toggle(
            "automatic_self_calibration",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            Presentation::new("automatic_self_calibration", "Automatic self calibration")
                .unique_id_suffix("automatic_self_calibration"),
        )?
        .expose_action(
            "factory_reset_co2",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            Presentation::new("factory_reset_co2", "Factory Reset CO2 sensor")
                .unique_id_suffix("factory_reset_co2")
                .entity_category(EntityCategory::Config),
        )?
        .expose_bounded_number(
            "night_mode_start_hour",
            illuminance::CLUSTER_ID,
            ILLUMINANCE_ENDPOINT,
            NumberRange::new(0.0, 23.0, 1.0),
            Presentation::new("night_mode_start_hour", "Night mode start hour")
                .device_class(DeviceClass::Duration)
                .unit(Unit::Hours),
        )?
        .expose_bounded_number(
            "night_mode_stop_hour",
            illuminance::CLUSTER_ID,
            ILLUMINANCE_ENDPOINT,
            NumberRange::new(0.0, 23.0, 1.0),
            Presentation::new("night_mode_stop_hour", "Night mode stop hour")
                .device_class(DeviceClass::Duration)
                .unit(Unit::Hours),
        )?
        // Altitude above sea level, used for CO2 pressure compensation
        .expose_bounded_number(
            "altitude",
            carbon_dioxide::CLUSTER_ID,
            CO2_ENDPOINT,
            NumberRange::new(0.0, 3000.0, 1.0),
            Presentation::new("altitude", "Altitude above sea level")
                .device_class(DeviceClass::Distance)
                .unit(Unit::Meters),
        )?;

    Ok(builder)
}

pub fn descriptor() -> Result<DeviceDescriptor> {
    quirk()?.finalize()
}

pub fn register(registry: &DeviceRegistry) -> Result<Arc<DeviceDescriptor>> {
    quirk()?.add_to_registry(registry)
}
