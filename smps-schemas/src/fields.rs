//! Field Constraints for Form Inputs
//!
//! Each input a designer can edit carries its unit, default, step and the
//! range a sensible design stays within. The engine itself accepts any
//! value; these bounds drive validation and input widgets.

use serde::{Deserialize, Serialize};

/// Range, default and presentation of one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    /// Wire name, as it appears in JSON (e.g. `rippleCurrentPercent`)
    pub name: String,

    /// Human-readable label
    pub label: String,

    /// Display unit
    pub unit: String,

    /// Smallest sensible value, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Largest sensible value, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Input widget increment
    pub step: f64,

    /// Value used when the field is missing
    pub default: f64,

    /// Only read by isolated topologies
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub isolated_only: bool,

    /// What an explicit `null` stands for. Without it `null` takes the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_means: Option<String>,
}

impl FieldConstraints {
    /// Unbounded field with the given default and step.
    pub fn new(name: &str, label: &str, unit: &str, default: f64, step: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
            min: None,
            max: None,
            step,
            default,
            isolated_only: false,
            null_means: None,
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Marks the field as read by isolated topologies only.
    #[must_use]
    pub fn isolated(mut self) -> Self {
        self.isolated_only = true;
        self
    }

    /// Lets an explicit `null` through as "no value", described by `meaning`.
    #[must_use]
    pub fn nullable(mut self, meaning: &str) -> Self {
        self.null_means = Some(meaning.to_string());
        self
    }

    /// Whether an explicit `null` is a value of its own.
    pub fn is_nullable(&self) -> bool {
        self.null_means.is_some()
    }

    /// Whether `value` lies within the bounds. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan()
            && self.min.map_or(true, |min| value >= min)
            && self.max.map_or(true, |max| value <= max)
    }

    /// Whether the default itself respects the bounds.
    pub fn is_consistent(&self) -> bool {
        let ordered = match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        ordered && self.step > 0.0 && self.contains(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn efficiency() -> FieldConstraints {
        FieldConstraints::new("efficiency", "Efficiency", "η", 0.9, 0.01)
            .with_min(0.5)
            .with_max(1.0)
    }

    #[test]
    fn bounds_are_inclusive() {
        let field = efficiency();
        assert!(field.contains(0.5));
        assert!(field.contains(1.0));
        assert!(!field.contains(0.49));
        assert!(!field.contains(1.01));
    }

    #[test]
    fn nan_is_never_in_range() {
        assert!(!efficiency().contains(f64::NAN));
        let open = FieldConstraints::new("ae", "Core Area (Ae)", "mm²", 52.0, 1.0);
        assert!(!open.contains(f64::NAN));
        assert!(open.contains(f64::INFINITY));
    }

    #[test]
    fn lower_bound_only() {
        let field = FieldConstraints::new("vin", "Input Voltage", "V", 12.0, 0.1).with_min(0.1);
        assert!(field.contains(1000.0));
        assert!(!field.contains(0.0));
        assert!(field.is_consistent());
    }

    #[test]
    fn default_outside_bounds_is_inconsistent() {
        let field = FieldConstraints::new("bmax", "Max Flux Density", "T", 0.8, 0.01)
            .with_min(0.05)
            .with_max(0.5);
        assert!(!field.is_consistent());
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(efficiency().isolated()).unwrap();
        assert_eq!(json["name"], "efficiency");
        assert_eq!(json["min"], 0.5);
        assert_eq!(json["isolatedOnly"], true);

        let plain = serde_json::to_value(efficiency()).unwrap();
        assert!(plain.get("isolatedOnly").is_none());
        assert!(plain.get("nullMeans").is_none());
    }

    #[test]
    fn nullable_flag_survives_json() {
        let field = FieldConstraints::new("turnsRatio", "Turns Ratio (Np/Ns)", "N", 2.0, 0.1)
            .isolated()
            .nullable("1:1");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["nullMeans"], "1:1");

        let back: FieldConstraints = serde_json::from_value(json).unwrap();
        assert!(back.is_nullable());
        assert!(!efficiency().is_nullable());
    }
}
