//! Standard input forms
//!
//! Each form is written out as JSON, the same shape `FormSchema::to_json`
//! produces, and parsed on construction. Forms follow the versioning rules
//! in the crate docs.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::fields::FieldConstraints;
use crate::{SchemaError, SchemaResult};

/// A versioned set of input fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Base name (e.g. `power_stage`)
    pub name: String,

    /// Version tag (e.g. `v1`)
    pub version: String,

    /// Fields in display order
    pub fields: Vec<FieldConstraints>,
}

impl FormSchema {
    /// Name the registry files this form under (e.g. `power_stage_v1`).
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }

    /// Field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldConstraints> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Default of the named field.
    pub fn default_of(&self, name: &str) -> SchemaResult<f64> {
        self.field(name)
            .map(|f| f.default)
            .ok_or_else(|| SchemaError::NotFound(format!("{}.{}", self.qualified_name(), name)))
    }

    /// Fields a non-isolated topology reads.
    pub fn common_fields(&self) -> impl Iterator<Item = &FieldConstraints> {
        self.fields.iter().filter(|f| !f.isolated_only)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and checks a form definition.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let form: FormSchema = serde_json::from_str(json)?;
        form.check()?;
        Ok(form)
    }

    fn from_value(value: serde_json::Value) -> SchemaResult<Self> {
        let form: FormSchema = serde_json::from_value(value)?;
        form.check()?;
        Ok(form)
    }

    /// Rejects empty or duplicate names and defaults outside their bounds.
    pub fn check(&self) -> SchemaResult<()> {
        if self.name.is_empty() || self.version.is_empty() {
            return Err(SchemaError::InvalidSchema("form needs a name and a version".to_string()));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::InvalidSchema(format!(
                    "{}: duplicate field '{}'",
                    self.qualified_name(),
                    field.name
                )));
            }
            if !field.is_consistent() {
                return Err(SchemaError::InvalidSchema(format!(
                    "{}: field '{}' has a default outside its bounds or a non-positive step",
                    self.qualified_name(),
                    field.name
                )));
            }
        }

        Ok(())
    }
}

/// Power stage form v1
pub fn power_stage_v1() -> SchemaResult<FormSchema> {
    FormSchema::from_value(json!({
        "name": "power_stage",
        "version": "v1",
        "fields": [
            { "name": "vin", "label": "Input Voltage", "unit": "V",
              "min": 0.1, "step": 0.1, "default": 12.0 },
            { "name": "vout", "label": "Output Voltage", "unit": "V",
              "min": 0.1, "step": 0.1, "default": 5.0 },
            { "name": "iout", "label": "Output Current", "unit": "A",
              "min": 0.01, "step": 0.1, "default": 2.0 },
            { "name": "fsw", "label": "Switching Freq", "unit": "kHz",
              "min": 1.0, "step": 10.0, "default": 200.0 },
            { "name": "rippleCurrentPercent", "label": "Current Ripple", "unit": "%",
              "min": 1.0, "max": 100.0, "step": 1.0, "default": 30.0 },
            { "name": "rippleVoltagePercent", "label": "Voltage Ripple", "unit": "%",
              "min": 0.1, "max": 20.0, "step": 0.1, "default": 1.0 },
            { "name": "efficiency", "label": "Efficiency", "unit": "η",
              "min": 0.5, "max": 1.0, "step": 0.01, "default": 0.9 },
            { "name": "turnsRatio", "label": "Turns Ratio (Np/Ns)", "unit": "N",
              "min": 0.1, "max": 50.0, "step": 0.1, "default": 2.0,
              "isolatedOnly": true, "nullMeans": "no turns ratio, 1:1 is used" }
        ]
    }))
}

/// Magnetics form v1
pub fn magnetics_v1() -> SchemaResult<FormSchema> {
    FormSchema::from_value(json!({
        "name": "magnetics",
        "version": "v1",
        "fields": [
            { "name": "bmax", "label": "Max Flux Density", "unit": "T",
              "min": 0.05, "max": 0.5, "step": 0.01, "default": 0.3 },
            { "name": "ae", "label": "Core Area (Ae)", "unit": "mm²",
              "min": 1.0, "step": 1.0, "default": 52.0 },
            { "name": "windowArea", "label": "Window Area", "unit": "mm²",
              "min": 1.0, "step": 1.0, "default": 40.0 },
            { "name": "currentDensity", "label": "Current Density", "unit": "A/mm²",
              "min": 1.0, "max": 10.0, "step": 0.5, "default": 4.0 },
            { "name": "corePermeability", "label": "Core Permeability", "unit": "µr",
              "min": 100.0, "step": 100.0, "default": 2500.0 },
            { "name": "coreLengthMm", "label": "Mag. Path Length", "unit": "mm",
              "min": 5.0, "step": 1.0, "default": 37.0 }
        ]
    }))
}

/// Thermal form v1
pub fn thermal_v1() -> SchemaResult<FormSchema> {
    FormSchema::from_value(json!({
        "name": "thermal",
        "version": "v1",
        "fields": [
            { "name": "ambientTemp", "label": "Ambient Temp", "unit": "°C",
              "min": -40.0, "max": 85.0, "step": 1.0, "default": 25.0 },
            { "name": "maxJunctionTemp", "label": "Max Junction Temp", "unit": "°C",
              "min": 60.0, "max": 175.0, "step": 5.0, "default": 125.0 },
            { "name": "thetaJC", "label": "θ Junction-Case", "unit": "°C/W",
              "min": 0.1, "max": 50.0, "step": 0.1, "default": 2.0 },
            { "name": "thetaCS", "label": "θ Case-Sink", "unit": "°C/W",
              "min": 0.01, "max": 10.0, "step": 0.1, "default": 0.5 }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smps_core::{MagneticInputs, PowerInputs, ThermalInputs};

    #[test]
    fn standard_forms_parse() {
        assert!(power_stage_v1().is_ok());
        assert!(magnetics_v1().is_ok());
        assert!(thermal_v1().is_ok());
    }

    #[test]
    fn defaults_match_engine_defaults() {
        let power = power_stage_v1().unwrap();
        let engine = PowerInputs::default();
        assert_eq!(power.default_of("vin").unwrap(), engine.vin);
        assert_eq!(power.default_of("efficiency").unwrap(), engine.efficiency);
        assert_eq!(Some(power.default_of("turnsRatio").unwrap()), engine.turns_ratio);

        let magnetics = magnetics_v1().unwrap();
        assert_eq!(
            magnetics.default_of("coreLengthMm").unwrap(),
            MagneticInputs::default().core_length_mm
        );

        let thermal = thermal_v1().unwrap();
        assert_eq!(thermal.default_of("thetaCS").unwrap(), ThermalInputs::default().theta_cs);
    }

    #[test]
    fn turns_ratio_is_the_only_isolated_field() {
        let power = power_stage_v1().unwrap();
        assert_eq!(power.common_fields().count(), 7);
        assert!(power.field("turnsRatio").unwrap().isolated_only);
    }

    #[test]
    fn turns_ratio_is_the_only_nullable_field() {
        for form in [power_stage_v1().unwrap(), magnetics_v1().unwrap(), thermal_v1().unwrap()] {
            for field in &form.fields {
                assert_eq!(field.is_nullable(), field.name == "turnsRatio", "{}", field.name);
            }
        }
    }

    #[test]
    fn json_round_trip_keeps_form() {
        let form = thermal_v1().unwrap();
        let json = form.to_json().unwrap();
        assert!(json.contains("\"thetaJC\""));
        assert_eq!(FormSchema::from_json(&json).unwrap(), form);
    }

    #[test]
    fn duplicate_field_rejected() {
        let mut form = magnetics_v1().unwrap();
        form.fields.push(form.fields[0].clone());
        assert!(matches!(form.check(), Err(SchemaError::InvalidSchema(_))));
    }

    #[test]
    fn unknown_field_lookup() {
        let form = power_stage_v1().unwrap();
        assert!(form.field("bmax").is_none());
        assert!(matches!(form.default_of("bmax"), Err(SchemaError::NotFound(_))));
    }
}
