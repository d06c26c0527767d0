//! Quirk builder.
//!
//! A single mutable accumulator: endpoint bindings first, then one call per
//! exposed entity, then [`finalize`](QuirkBuilder::finalize). Every call is
//! validated on its own and returns `Result<&mut Self>`, so a definition reads
//! as a `?` chain and the first authoring error drops the whole builder.
//!
//! # Example
//! ```ignore
//! let mut builder = QuirkBuilder::new("EfektaLab", "EFEKTA_AQ_Smart_Monitor_Gen2");
//! builder
//!     .replace(co2_cluster()?, 2)?
//!     .expose_toggle(
//!         "automatic_self_calibration",
//!         carbon_dioxide::CLUSTER_ID,
//!         2,
//!         Presentation::new("automatic_self_calibration", "Automatic self calibration"),
//!     )?;
//! builder.add_to_registry(&registry)?;
//! ```

use super::descriptor::{DeviceDescriptor, DeviceIdentity, RemovedCluster};
use super::endpoints::EndpointTable;
use super::exposure::{
    Control, DeviceClass, ExposureDeclaration, NumberRange, Presentation, ReportingConfig, Unit,
    derive_unique_id, validate_presentation,
};
use super::extension::{ClusterExtension, ClusterRef};
use crate::error::{QuirkError, Result};
use crate::registry::DeviceRegistry;
use crate::zcl::clusters;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

pub struct QuirkBuilder {
    identity: DeviceIdentity,
    also_applies_to: Vec<DeviceIdentity>,
    endpoints: EndpointTable,
    exposures: Vec<ExposureDeclaration>,
}

impl QuirkBuilder {
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            identity: DeviceIdentity::new(vendor, model),
            also_applies_to: Vec::new(),
            endpoints: EndpointTable::new(),
            exposures: Vec::new(),
        }
    }

    /// Register the finished descriptor under an additional identity too.
    pub fn also_applies_to(
        &mut self,
        vendor: impl Into<String>,
        model: impl Into<String>,
    ) -> &mut Self {
        self.also_applies_to.push(DeviceIdentity::new(vendor, model));
        self
    }

    /// Declare a cluster the device signature already advertises.
    pub fn assume(&mut self, cluster: impl Into<ClusterRef>, endpoint_id: u8) -> Result<&mut Self> {
        self.endpoints.assume(cluster, endpoint_id)?;
        Ok(self)
    }

    /// Add a cluster the device implements but does not advertise.
    pub fn bind(&mut self, cluster: impl Into<ClusterRef>, endpoint_id: u8) -> Result<&mut Self> {
        self.endpoints.bind(cluster, endpoint_id)?;
        Ok(self)
    }

    /// Use an extended cluster instead of the standard one at `endpoint_id`.
    pub fn replace(
        &mut self,
        extension: impl Into<Arc<ClusterExtension>>,
        endpoint_id: u8,
    ) -> Result<&mut Self> {
        self.endpoints.replace(extension, endpoint_id)?;
        Ok(self)
    }

    pub fn remove(&mut self, cluster_id: u16, endpoint_id: u8) -> &mut Self {
        self.endpoints.remove(cluster_id, endpoint_id);
        self
    }

    /// Continuously varying read value (a sensor).
    pub fn expose_measurement(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        reporting: ReportingConfig,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        self.expose(
            attribute,
            cluster_id,
            endpoint_id,
            Control::Measurement { reporting },
            presentation,
        )
    }

    /// Monotonically non-decreasing value, such as elapsed time.
    ///
    /// `unit` and `device_class` override whatever `presentation` carries.
    pub fn expose_counter(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        unit: Unit,
        device_class: DeviceClass,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        self.expose(
            attribute,
            cluster_id,
            endpoint_id,
            Control::Counter,
            presentation.unit(unit).device_class(device_class),
        )
    }

    /// Writable boolean shown as an on/off switch.
    pub fn expose_toggle(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        self.expose(attribute, cluster_id, endpoint_id, Control::Toggle, presentation)
    }

    /// Writable numeric attribute with a user-adjustable value in `range`.
    pub fn expose_bounded_number(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        range: NumberRange,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        self.expose(
            attribute,
            cluster_id,
            endpoint_id,
            Control::BoundedNumber(range),
            presentation,
        )
    }

    /// Writable boolean pulse shown as a button; any write triggers the action.
    pub fn expose_action(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        self.expose(attribute, cluster_id, endpoint_id, Control::Action, presentation)
    }

    /// Validate unique ids and freeze the descriptor.
    pub fn finalize(self) -> Result<DeviceDescriptor> {
        let mut seen = HashSet::new();
        for exposure in &self.exposures {
            if !seen.insert(exposure.unique_id.as_str()) {
                return Err(QuirkError::DuplicateEntity(exposure.unique_id.clone()));
            }
        }

        let removed = self
            .endpoints
            .removed()
            .map(|(endpoint_id, cluster_id)| RemovedCluster {
                endpoint_id,
                cluster_id,
            })
            .collect();
        let bindings = self.endpoints.iter().cloned().collect();

        Ok(DeviceDescriptor::new(
            self.identity,
            self.also_applies_to,
            bindings,
            removed,
            self.exposures,
        ))
    }

    /// Finalize and register into `registry`.
    pub fn add_to_registry(self, registry: &DeviceRegistry) -> Result<Arc<DeviceDescriptor>> {
        registry.register(self.finalize()?)
    }

    fn expose(
        &mut self,
        attribute: &str,
        cluster_id: u16,
        endpoint_id: u8,
        control: Control,
        presentation: Presentation,
    ) -> Result<&mut Self> {
        let unknown = || QuirkError::UnknownAttribute {
            attribute: attribute.to_string(),
            cluster_id,
            endpoint: endpoint_id,
        };
        let cluster = self.resolve_cluster(cluster_id, endpoint_id).ok_or_else(unknown)?;
        let attr = *cluster.attribute(attribute).ok_or_else(unknown)?;

        let unique_id = derive_unique_id(
            endpoint_id,
            cluster_id,
            attr.name,
            presentation.unique_id_suffix.as_deref(),
        );
        control.validate(&attr)?;
        validate_presentation(&unique_id, control.kind(), &presentation)?;

        debug!(
            "Exposing {} as {} ({}) on endpoint {}",
            attr.name,
            control.kind(),
            unique_id,
            endpoint_id
        );

        self.exposures.push(ExposureDeclaration {
            unique_id,
            endpoint_id,
            cluster_id,
            cluster_name: cluster.name(),
            attribute: attr,
            state_class: control.state_class(),
            control,
            presentation,
        });
        Ok(self)
    }

    /// The cluster attribute lookups resolve against at a slot: the bound one,
    /// else the standard catalog definition the platform would assume. A
    /// removed slot resolves to nothing.
    fn resolve_cluster(&self, cluster_id: u16, endpoint_id: u8) -> Option<ClusterRef> {
        if let Some(binding) = self.endpoints.get(endpoint_id, cluster_id) {
            return Some(binding.cluster.clone());
        }
        if self.endpoints.is_removed(endpoint_id, cluster_id) {
            warn!(
                "Cluster 0x{:04X} was removed from endpoint {}",
                cluster_id, endpoint_id
            );
            return None;
        }
        clusters::lookup(cluster_id).map(ClusterRef::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quirk::{ControlKind, EntityCategory, define_extension};
    use crate::zcl::clusters::{analog_input, carbon_dioxide, illuminance, on_off, time};
    use crate::zcl::{AttributeDef, WireType};

    fn co2_extension() -> ClusterExtension {
        define_extension(
            &carbon_dioxide::CLUSTER,
            [
                AttributeDef::read_write(0x0201, "reading_interval", WireType::Uint16),
                AttributeDef::read_write(0x0202, "forced_recalibration", WireType::Bool),
                AttributeDef::read_write(0x0220, "enable_co2_gas", WireType::Bool),
            ],
        )
        .unwrap()
    }

    fn illuminance_extension() -> ClusterExtension {
        define_extension(
            &illuminance::CLUSTER,
            [
                AttributeDef::read_write(0x0405, "night_mode_start_hour", WireType::Uint8),
                AttributeDef::read_write(0x0406, "night_mode_stop_hour", WireType::Uint8),
            ],
        )
        .unwrap()
    }

    fn builder() -> QuirkBuilder {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder.replace(co2_extension(), 2).unwrap();
        builder
    }

    #[test]
    fn test_bounded_number_on_uint16() {
        let mut builder = builder();
        let result = builder.expose_bounded_number(
            "reading_interval",
            carbon_dioxide::CLUSTER_ID,
            2,
            NumberRange::new(6.0, 600.0, 1.0),
            Presentation::new("reading_delay", "Reading delay").unit(Unit::Seconds),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_bounded_number_exceeding_uint8() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder.replace(illuminance_extension(), 1).unwrap();
        let result = builder.expose_bounded_number(
            "night_mode_start_hour",
            illuminance::CLUSTER_ID,
            1,
            NumberRange::new(0.0, 3000.0, 1.0),
            Presentation::new("night_mode_start_hour", "Night mode start hour"),
        );
        assert!(matches!(result, Err(QuirkError::Range(_))));
    }

    #[test]
    fn test_bounded_number_inverted_range() {
        let mut builder = builder();
        let result = builder.expose_bounded_number(
            "reading_interval",
            carbon_dioxide::CLUSTER_ID,
            2,
            NumberRange::new(600.0, 6.0, 1.0),
            Presentation::new("reading_delay", "Reading delay"),
        );
        assert!(matches!(result, Err(QuirkError::Range(_))));
    }

    #[test]
    fn test_measurement_reporting_intervals() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        let bad = builder.expose_measurement(
            "present_value",
            analog_input::CLUSTER_ID,
            3,
            ReportingConfig::new(120, 10, 1.0),
            Presentation::new("voc_index", "VOC index"),
        );
        assert!(matches!(bad, Err(QuirkError::Range(_))));

        let good = builder.expose_measurement(
            "present_value",
            analog_input::CLUSTER_ID,
            3,
            ReportingConfig::new(10, 120, 1.0),
            Presentation::new("voc_index", "VOC index"),
        );
        assert!(good.is_ok());
    }

    #[test]
    fn test_unknown_attribute() {
        let mut builder = builder();
        let result = builder.expose_toggle(
            "does_not_exist",
            carbon_dioxide::CLUSTER_ID,
            2,
            Presentation::new("x", "X"),
        );
        assert!(matches!(
            result,
            Err(QuirkError::UnknownAttribute { endpoint: 2, .. })
        ));
    }

    #[test]
    fn test_extended_attribute_not_visible_on_other_endpoint() {
        let mut builder = builder();
        // Endpoint 1 falls back to the vanilla catalog cluster.
        let result = builder.expose_toggle(
            "enable_co2_gas",
            carbon_dioxide::CLUSTER_ID,
            1,
            Presentation::new("enable_co2_gas", "Enable CO2 gas"),
        );
        assert!(matches!(
            result,
            Err(QuirkError::UnknownAttribute { endpoint: 1, .. })
        ));
    }

    #[test]
    fn test_attribute_on_uncatalogued_cluster() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        let result = builder.expose_toggle("on_off", 0xFC00, 1, Presentation::new("x", "X"));
        assert!(matches!(
            result,
            Err(QuirkError::UnknownAttribute {
                cluster_id: 0xFC00,
                endpoint: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_removed_cluster_not_resolved() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder.assume(&time::CLUSTER, 1).unwrap();
        builder.remove(time::CLUSTER_ID, 1);
        let result = builder.expose_counter(
            "local_time",
            time::CLUSTER_ID,
            1,
            Unit::Seconds,
            DeviceClass::Duration,
            Presentation::new("local_time", "Local time"),
        );
        assert!(matches!(
            result,
            Err(QuirkError::UnknownAttribute { ref attribute, endpoint: 1, .. })
                if attribute == "local_time"
        ));

        let descriptor = builder.finalize().unwrap();
        assert!(descriptor.is_removed(1, time::CLUSTER_ID));
    }

    #[test]
    fn test_toggle_on_read_only_attribute() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder.bind(&on_off::CLUSTER, 1).unwrap();
        let result = builder.expose_toggle(
            "on_off",
            on_off::CLUSTER_ID,
            1,
            Presentation::new("on_off", "On/off"),
        );
        assert!(matches!(
            result,
            Err(QuirkError::IncompatibleAttribute { .. })
        ));
    }

    #[test]
    fn test_duplicate_unique_id_fails_finalize() {
        let mut builder = builder();
        builder
            .expose_action(
                "forced_recalibration",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("forced_recalibration", "Forced recalibration"),
            )
            .unwrap()
            .expose_action(
                "forced_recalibration",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("forced_recalibration", "Forced recalibration"),
            )
            .unwrap();
        assert!(matches!(
            builder.finalize(),
            Err(QuirkError::DuplicateEntity(id)) if id == "2-1037-forced_recalibration"
        ));
    }

    #[test]
    fn test_unique_id_suffix_resolves_collision() {
        let mut builder = builder();
        builder
            .expose_action(
                "forced_recalibration",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("forced_recalibration", "Forced recalibration"),
            )
            .unwrap()
            .expose_toggle(
                "forced_recalibration",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("forced_recalibration_switch", "Forced recalibration")
                    .unique_id_suffix("forced_recalibration_switch"),
            )
            .unwrap();
        let descriptor = builder.finalize().unwrap();
        assert_eq!(descriptor.exposures().len(), 2);
    }

    #[test]
    fn test_counter_carries_unit_and_state_class() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder
            .replace(
                define_extension(
                    &time::CLUSTER,
                    [AttributeDef::read(0x0199, "lifetime", WireType::Uint32)],
                )
                .unwrap(),
                1,
            )
            .unwrap()
            .expose_counter(
                "lifetime",
                time::CLUSTER_ID,
                1,
                Unit::Hours,
                DeviceClass::Duration,
                Presentation::new("on_time", "Device lifetime"),
            )
            .unwrap();

        let descriptor = builder.finalize().unwrap();
        let exposure = &descriptor.exposures()[0];
        assert_eq!(exposure.kind(), ControlKind::Counter);
        assert_eq!(exposure.presentation.unit, Some(Unit::Hours));
        assert_eq!(exposure.presentation.device_class, Some(DeviceClass::Duration));
        assert_eq!(
            exposure.state_class,
            Some(crate::quirk::StateClass::TotalIncreasing)
        );
    }

    #[test]
    fn test_enable_feature_end_to_end() {
        let registry = DeviceRegistry::new();
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder
            .assume(&carbon_dioxide::CLUSTER, 1)
            .unwrap()
            .replace(
                define_extension(
                    &carbon_dioxide::CLUSTER,
                    [AttributeDef::read_write(0x0220, "enable_feature", WireType::Bool)],
                )
                .unwrap(),
                2,
            )
            .unwrap()
            .expose_toggle(
                "enable_feature",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("enable_feature", "Enable feature"),
            )
            .unwrap();
        let descriptor = builder.add_to_registry(&registry).unwrap();

        assert_eq!(descriptor.exposures().len(), 1);
        let exposure = &descriptor.exposures()[0];
        assert_eq!(exposure.kind(), ControlKind::Toggle);
        assert_eq!(exposure.endpoint_id, 2);
        assert_eq!(exposure.attribute.id, 0x0220);

        let other = descriptor.cluster_at(1, carbon_dioxide::CLUSTER_ID).unwrap();
        assert!(!other.is_extended());
        assert!(other.attribute("enable_feature").is_none());
        assert!(descriptor.cluster_at(3, carbon_dioxide::CLUSTER_ID).is_none());
        assert_eq!(descriptor.exposures_on(1).count(), 0);
    }

    #[test]
    fn test_bounded_number_on_bool_attribute() {
        let mut builder = builder();
        let result = builder.expose_bounded_number(
            "forced_recalibration",
            carbon_dioxide::CLUSTER_ID,
            2,
            NumberRange::new(0.0, 1.0, 1.0),
            Presentation::new("forced_recalibration", "Forced recalibration"),
        );
        assert!(matches!(
            result,
            Err(QuirkError::IncompatibleAttribute { ref attribute, .. })
                if attribute == "forced_recalibration"
        ));
    }

    #[test]
    fn test_bounded_number_fractional_on_uint8() {
        let mut builder = QuirkBuilder::new("Vendor", "Model");
        builder.replace(illuminance_extension(), 1).unwrap();
        let result = builder.expose_bounded_number(
            "night_mode_start_hour",
            illuminance::CLUSTER_ID,
            1,
            NumberRange::new(0.5, 10.5, 0.25),
            Presentation::new("night_mode_start_hour", "Night mode start hour"),
        );
        assert!(matches!(result, Err(QuirkError::Range(_))));

        let result = builder.expose_bounded_number(
            "night_mode_start_hour",
            illuminance::CLUSTER_ID,
            1,
            NumberRange::new(0.0, 23.0, 1.0),
            Presentation::new("night_mode_start_hour", "Night mode start hour"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_category_and_disabled_flag_survive_finalize() {
        let mut builder = builder();
        builder
            .expose_toggle(
                "enable_co2_gas",
                carbon_dioxide::CLUSTER_ID,
                2,
                Presentation::new("enable_co2_gas", "Enable CO2 gas")
                    .entity_category(EntityCategory::Config)
                    .initially_disabled(),
            )
            .unwrap()
            .expose_bounded_number(
                "reading_interval",
                carbon_dioxide::CLUSTER_ID,
                2,
                NumberRange::new(6.0, 600.0, 1.0),
                Presentation::new("reading_delay", "Reading delay"),
            )
            .unwrap();
        let descriptor = builder.finalize().unwrap();

        let toggle = descriptor.exposure("2-1037-enable_co2_gas").unwrap();
        assert_eq!(
            toggle.presentation.entity_category,
            Some(EntityCategory::Config)
        );
        assert!(toggle.presentation.initially_disabled);
        let json = serde_json::to_value(toggle).unwrap();
        assert_eq!(json["presentation"]["entity_category"], "config");
        assert_eq!(json["presentation"]["initially_disabled"], true);

        let number = descriptor.exposure("2-1037-reading_interval").unwrap();
        assert_eq!(number.presentation.entity_category, None);
        assert!(!number.presentation.initially_disabled);
        let json = serde_json::to_value(number).unwrap();
        assert!(json["presentation"].get("entity_category").is_none());
        assert_eq!(json["presentation"]["initially_disabled"], false);
    }
}
