//! Standard cluster catalog.
//!
//! One module per standard cluster. Each exposes `CLUSTER_ID`, an attribute id
//! enum and a `CLUSTER` definition. Vendor quirks never modify these; they
//! layer extensions on top (see [`crate::quirk::ClusterExtension`]).

use super::ClusterDef;

pub mod analog_input;
pub mod basic;
pub mod carbon_dioxide;
pub mod illuminance;
pub mod on_off;
pub mod relative_humidity;
pub mod temperature_measurement;
pub mod time;

/// Every standard cluster in the catalog.
pub static STANDARD_CLUSTERS: &[&ClusterDef] = &[
    &basic::CLUSTER,
    &on_off::CLUSTER,
    &time::CLUSTER,
    &analog_input::CLUSTER,
    &illuminance::CLUSTER,
    &temperature_measurement::CLUSTER,
    &relative_humidity::CLUSTER,
    &carbon_dioxide::CLUSTER,
];

/// Resolve a standard cluster definition by its protocol cluster id.
pub fn lookup(cluster_id: u16) -> Option<&'static ClusterDef> {
    STANDARD_CLUSTERS
        .iter()
        .copied()
        .find(|c| c.id == cluster_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_clusters() {
        assert_eq!(lookup(0x0405).map(|c| c.name), Some("relative_humidity"));
        assert_eq!(lookup(0x040D).map(|c| c.name), Some("carbon_dioxide_concentration"));
        assert!(lookup(0xFC00).is_none());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<u16> = STANDARD_CLUSTERS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), STANDARD_CLUSTERS.len());
    }

    #[test]
    fn test_attribute_ids_and_names_unique_per_cluster() {
        for cluster in STANDARD_CLUSTERS {
            let ids: HashSet<u16> = cluster.attributes.iter().map(|a| a.id).collect();
            let names: HashSet<&str> = cluster.attributes.iter().map(|a| a.name).collect();
            assert_eq!(ids.len(), cluster.attributes.len(), "{}", cluster.name);
            assert_eq!(names.len(), cluster.attributes.len(), "{}", cluster.name);
        }
    }

    #[test]
    fn test_attribute_enums_match_definitions() {
        let present = analog_input::CLUSTER.attribute("present_value").unwrap();
        assert_eq!(
            analog_input::AnalogInputAttribute::from_repr(present.id),
            Some(analog_input::AnalogInputAttribute::PresentValue)
        );

        let model = basic::CLUSTER.attribute("model").unwrap();
        assert_eq!(
            basic::BasicAttribute::from_repr(model.id),
            Some(basic::BasicAttribute::Model)
        );

        assert_eq!(
            on_off::OnOffAttribute::from_repr(0x4003),
            Some(on_off::OnOffAttribute::StartUpOnOff)
        );
        assert_eq!(
            time::TimeAttribute::from_repr(0x0009),
            Some(time::TimeAttribute::ValidUntilTime)
        );
        assert_eq!(
            illuminance::IlluminanceAttribute::from_repr(0x0004),
            Some(illuminance::IlluminanceAttribute::LightSensorType)
        );
        assert_eq!(
            temperature_measurement::TemperatureAttribute::from_repr(0x0000),
            Some(temperature_measurement::TemperatureAttribute::MeasuredValue)
        );
        assert_eq!(
            relative_humidity::RelativeHumidityAttribute::from_repr(0x0003),
            Some(relative_humidity::RelativeHumidityAttribute::Tolerance)
        );
        assert_eq!(
            carbon_dioxide::CarbonDioxideAttribute::from_repr(0x0001),
            Some(carbon_dioxide::CarbonDioxideAttribute::MinMeasuredValue)
        );
        assert!(time::TimeAttribute::from_repr(0x0199).is_none());
    }
}
