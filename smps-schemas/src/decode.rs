//! Decoding raw JSON into engine inputs
//!
//! Collaborators send plain JSON objects keyed by wire name. Every missing
//! (or `null`) field takes its form default; a field of the wrong JSON type
//! is an error rather than a silent default.
//!
//! Fields with a `nullMeans` entry (only `turnsRatio` in the standard
//! forms) are the exception: an explicit `null` decodes to `None`, and for
//! the turns ratio the engine then uses 1:1.
//!
//! Linked quantities (`inductance`, `peakCurrent`, `totalLoss`) are not form
//! fields. They are read when present and otherwise left at zero, ready to
//! be linked from a power stage.

use serde_json::{Map, Value};
use smps_core::{DesignInputs, MagneticInputs, PowerInputs, ThermalInputs, Topology};

use crate::fields::FieldConstraints;
use crate::forms::{self, FormSchema};
use crate::{SchemaError, SchemaResult};

/// Power-stage inputs from a JSON object, defaults from `power_stage_v1`.
pub fn power_inputs(raw: &Value) -> SchemaResult<PowerInputs> {
    power_inputs_with(&forms::power_stage_v1()?, raw)
}

/// Power-stage inputs from a JSON object, defaults from `form`.
pub fn power_inputs_with(form: &FormSchema, raw: &Value) -> SchemaResult<PowerInputs> {
    let fields = FieldReader::new(form, raw)?;

    Ok(PowerInputs {
        vin: fields.number("vin")?,
        vout: fields.number("vout")?,
        iout: fields.number("iout")?,
        fsw: fields.number("fsw")?,
        ripple_current_percent: fields.number("rippleCurrentPercent")?,
        ripple_voltage_percent: fields.number("rippleVoltagePercent")?,
        efficiency: fields.number("efficiency")?,
        turns_ratio: fields.optional("turnsRatio")?,
    })
}

/// Magnetics inputs from a JSON object, defaults from `magnetics_v1`.
pub fn magnetic_inputs(raw: &Value) -> SchemaResult<MagneticInputs> {
    magnetic_inputs_with(&forms::magnetics_v1()?, raw)
}

/// Magnetics inputs from a JSON object, defaults from `form`.
pub fn magnetic_inputs_with(form: &FormSchema, raw: &Value) -> SchemaResult<MagneticInputs> {
    let fields = FieldReader::new(form, raw)?;

    Ok(MagneticInputs {
        inductance: fields.linked("inductance")?,
        peak_current: fields.linked("peakCurrent")?,
        bmax: fields.number("bmax")?,
        ae: fields.number("ae")?,
        window_area: fields.number("windowArea")?,
        current_density: fields.number("currentDensity")?,
        core_permeability: fields.number("corePermeability")?,
        core_length_mm: fields.number("coreLengthMm")?,
    })
}

/// Thermal inputs from a JSON object, defaults from `thermal_v1`.
pub fn thermal_inputs(raw: &Value) -> SchemaResult<ThermalInputs> {
    thermal_inputs_with(&forms::thermal_v1()?, raw)
}

/// Thermal inputs from a JSON object, defaults from `form`.
pub fn thermal_inputs_with(form: &FormSchema, raw: &Value) -> SchemaResult<ThermalInputs> {
    let fields = FieldReader::new(form, raw)?;

    Ok(ThermalInputs {
        total_loss: fields.linked("totalLoss")?,
        ambient_temp: fields.number("ambientTemp")?,
        max_junction_temp: fields.number("maxJunctionTemp")?,
        theta_jc: fields.number("thetaJC")?,
        theta_cs: fields.number("thetaCS")?,
    })
}

/// Topology from a JSON string; missing or `null` means buck.
pub fn topology(raw: Option<&Value>) -> SchemaResult<Topology> {
    match raw {
        None | Some(Value::Null) => Ok(Topology::default()),
        Some(Value::String(id)) => Ok(id.parse()?),
        Some(_) => Err(SchemaError::TypeMismatch {
            field: "topology".to_string(),
            expected: "string",
        }),
    }
}

/// A complete design request:
/// `{ "topology": .., "power": {..}, "magnetics": {..}, "thermal": {..} }`.
///
/// Each section may be omitted and then takes its defaults entirely.
pub fn design_inputs(raw: &Value) -> SchemaResult<DesignInputs> {
    let object = as_object(raw, "design")?;
    let empty = Value::Object(Map::new());
    let section = |name: &str| object.get(name).filter(|v| !v.is_null()).unwrap_or(&empty);

    Ok(DesignInputs {
        topology: topology(object.get("topology"))?,
        power: power_inputs(section("power"))?,
        magnetics: magnetic_inputs(section("magnetics"))?,
        thermal: thermal_inputs(section("thermal"))?,
    })
}

struct FieldReader<'a> {
    form: &'a FormSchema,
    object: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    fn new(form: &'a FormSchema, raw: &'a Value) -> SchemaResult<Self> {
        Ok(Self { form, object: as_object(raw, &form.name)? })
    }

    /// Form field: the given number, or the form default.
    fn number(&self, name: &str) -> SchemaResult<f64> {
        match self.object.get(name) {
            None | Some(Value::Null) => self.form.default_of(name),
            Some(value) => as_number(name, value),
        }
    }

    /// Form field that may be `null` when the form allows it.
    fn optional(&self, name: &str) -> SchemaResult<Option<f64>> {
        let nullable = self.form.field(name).is_some_and(FieldConstraints::is_nullable);
        match self.object.get(name) {
            Some(Value::Null) if nullable => Ok(None),
            _ => self.number(name).map(Some),
        }
    }

    /// Linked quantity: the given number, or zero.
    fn linked(&self, name: &str) -> SchemaResult<f64> {
        match self.object.get(name) {
            None | Some(Value::Null) => Ok(0.0),
            Some(value) => as_number(name, value),
        }
    }
}

fn as_object<'a>(raw: &'a Value, name: &str) -> SchemaResult<&'a Map<String, Value>> {
    raw.as_object().ok_or_else(|| SchemaError::TypeMismatch {
        field: name.to_string(),
        expected: "object",
    })
}

fn as_number(name: &str, value: &Value) -> SchemaResult<f64> {
    value.as_f64().ok_or_else(|| SchemaError::TypeMismatch {
        field: name.to_string(),
        expected: "number",
    })
}
