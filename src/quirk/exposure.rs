//! Entity exposure declarations.
//!
//! One declaration binds one attribute (cluster + endpoint) to a user-facing
//! control kind plus its presentation metadata.

use crate::error::{QuirkError, Result};
use crate::zcl::{AttributeDef, WireType};
use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// Unit of measurement shown next to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Unit {
    #[serde(rename = "s")]
    #[strum(serialize = "s")]
    Seconds,
    #[serde(rename = "h")]
    #[strum(serialize = "h")]
    Hours,
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Meters,
    #[serde(rename = "ppm")]
    #[strum(serialize = "ppm")]
    PartsPerMillion,
    #[serde(rename = "lx")]
    #[strum(serialize = "lx")]
    Lux,
    #[serde(rename = "%")]
    #[strum(serialize = "%")]
    Percentage,
    #[serde(rename = "°C")]
    #[strum(serialize = "°C")]
    Celsius,
}

/// Device class tag the host uses to pick icons and conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceClass {
    Aqi,
    CarbonDioxide,
    Distance,
    Duration,
    Humidity,
    Illuminance,
    Temperature,
}

/// How the host aggregates a sensor's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
    /// Never resets to zero without an explicit device reset.
    TotalIncreasing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// Attribute reporting thresholds for measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportingConfig {
    /// Seconds
    pub min_interval: u16,
    /// Seconds
    pub max_interval: u16,
    pub reportable_change: f64,
}

impl ReportingConfig {
    pub const fn new(min_interval: u16, max_interval: u16, reportable_change: f64) -> Self {
        Self {
            min_interval,
            max_interval,
            reportable_change,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_interval > self.max_interval {
            return Err(QuirkError::Range(format!(
                "reporting min_interval {} exceeds max_interval {}",
                self.min_interval, self.max_interval
            )));
        }
        if self.reportable_change.is_nan() || self.reportable_change < 0.0 {
            return Err(QuirkError::Range(format!(
                "reportable_change {} must not be negative",
                self.reportable_change
            )));
        }
        Ok(())
    }
}

/// Value domain of a bounded number control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumberRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(QuirkError::Range(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(QuirkError::Range(format!(
                "step {} must be positive",
                self.step
            )));
        }
        Ok(())
    }

    /// Check the domain is valid and representable by `wire_type`.
    pub fn validate_for(&self, wire_type: WireType) -> Result<()> {
        self.validate()?;
        if !wire_type.can_represent(self.min, self.max) {
            return Err(QuirkError::Range(format!(
                "[{}, {}] does not fit wire type {}",
                self.min, self.max, wire_type
            )));
        }
        if wire_type.is_integer()
            && [self.min, self.max, self.step].iter().any(|v| v.fract() != 0.0)
        {
            return Err(QuirkError::Range(format!(
                "min {}, max {} and step {} must be whole numbers for wire type {}",
                self.min, self.max, self.step, wire_type
            )));
        }
        Ok(())
    }
}

/// Labels and presentation hints shared by every control kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub translation_key: String,
    pub fallback_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
    pub initially_disabled: bool,
}

impl Presentation {
    pub fn new(translation_key: impl Into<String>, fallback_label: impl Into<String>) -> Self {
        Self {
            translation_key: translation_key.into(),
            fallback_label: fallback_label.into(),
            unit: None,
            device_class: None,
            unique_id_suffix: None,
            entity_category: None,
            initially_disabled: false,
        }
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    /// Disambiguates the entity's unique id when the same attribute name could
    /// be exposed more than once.
    pub fn unique_id_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.unique_id_suffix = Some(suffix.into());
        self
    }

    pub fn entity_category(mut self, category: EntityCategory) -> Self {
        self.entity_category = Some(category);
        self
    }

    pub fn initially_disabled(mut self) -> Self {
        self.initially_disabled = true;
        self
    }
}

/// User-facing control kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ControlKind {
    Measurement,
    Counter,
    Toggle,
    BoundedNumber,
    Action,
}

/// Control kind plus its kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    Measurement { reporting: ReportingConfig },
    Counter,
    Toggle,
    BoundedNumber(NumberRange),
    /// Write-only pulse: any write means "do it now".
    Action,
}

impl Control {
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Measurement { .. } => ControlKind::Measurement,
            Self::Counter => ControlKind::Counter,
            Self::Toggle => ControlKind::Toggle,
            Self::BoundedNumber(_) => ControlKind::BoundedNumber,
            Self::Action => ControlKind::Action,
        }
    }

    pub fn state_class(&self) -> Option<StateClass> {
        match self {
            Self::Measurement { .. } => Some(StateClass::Measurement),
            Self::Counter => Some(StateClass::TotalIncreasing),
            _ => None,
        }
    }

    /// Check kind-specific metadata and that `attribute` can back this control.
    pub(crate) fn validate(&self, attribute: &AttributeDef) -> Result<()> {
        let incompatible = |reason: &str| QuirkError::IncompatibleAttribute {
            attribute: attribute.name.to_string(),
            kind: self.kind().to_string(),
            reason: reason.to_string(),
        };

        match self {
            Self::Measurement { reporting } => {
                reporting.validate()?;
                if !attribute.wire_type.is_numeric() {
                    return Err(incompatible("measurements need a numeric attribute"));
                }
            }
            Self::Counter => {
                if !attribute.wire_type.is_numeric() {
                    return Err(incompatible("counters need a numeric attribute"));
                }
            }
            Self::Toggle | Self::Action => {
                if attribute.wire_type != WireType::Bool {
                    return Err(incompatible("needs a boolean attribute"));
                }
                if !attribute.access.is_writable() {
                    return Err(incompatible("attribute is read-only"));
                }
            }
            Self::BoundedNumber(range) => {
                if !attribute.access.is_writable() {
                    return Err(incompatible("attribute is read-only"));
                }
                if !attribute.wire_type.is_numeric() {
                    return Err(incompatible("numbers need a numeric attribute"));
                }
                range.validate_for(attribute.wire_type)?;
            }
        }
        Ok(())
    }
}

/// One user-facing entity: which attribute, where, and how to show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureDeclaration {
    pub unique_id: String,
    pub endpoint_id: u8,
    pub cluster_id: u16,
    pub cluster_name: &'static str,
    pub attribute: AttributeDef,
    pub control: Control,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_class: Option<StateClass>,
    pub presentation: Presentation,
}

impl ExposureDeclaration {
    pub fn kind(&self) -> ControlKind {
        self.control.kind()
    }
}

/// Stable entity id: `{endpoint}-{cluster_id}-{suffix}`, where the suffix is
/// the explicit disambiguator or else the attribute name.
pub fn derive_unique_id(
    endpoint_id: u8,
    cluster_id: u16,
    attribute: &str,
    suffix: Option<&str>,
) -> String {
    format!("{}-{}-{}", endpoint_id, cluster_id, suffix.unwrap_or(attribute))
}

/// Check presentation metadata against the control kind.
pub(crate) fn validate_presentation(
    unique_id: &str,
    kind: ControlKind,
    presentation: &Presentation,
) -> Result<()> {
    let invalid = |reason: String| QuirkError::InvalidPresentation {
        unique_id: unique_id.to_string(),
        reason,
    };

    if presentation.translation_key.trim().is_empty() {
        return Err(invalid("empty translation key".into()));
    }
    if presentation.fallback_label.trim().is_empty() {
        return Err(invalid("empty fallback label".into()));
    }
    if presentation
        .unique_id_suffix
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        return Err(invalid("empty unique id suffix".into()));
    }
    if matches!(kind, ControlKind::Toggle | ControlKind::Action)
        && (presentation.unit.is_some() || presentation.device_class.is_some())
    {
        return Err(invalid(format!("{kind} entities carry no unit or device class")));
    }
    Ok(())
}
