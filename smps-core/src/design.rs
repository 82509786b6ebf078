//! Design pipeline
//!
//! Runs the three calculators in their fixed order and reviews the result:
//!
//! ```text
//!                 ┌──── L, I_pk ───▶ magnetics
//! power stage ────┤
//!                 └──── P_loss ────▶ thermal
//! ```
//!
//! The pipeline adds no computation of its own. It only wires power-stage
//! outputs into the downstream inputs, exactly as a caller would by hand.
//!
//! ```
//! use smps_core::design::{evaluate, DesignInputs};
//! use smps_core::Topology;
//!
//! let report = evaluate(&DesignInputs::for_topology(Topology::Flyback));
//! assert_eq!(report.power.turns_ratio, Some(2.0));
//! assert!(report.magnetics.turns >= 1);
//! ```

use crate::checks::{self, Warnings};
use crate::magnetics::{compute_magnetics, MagneticInputs, MagneticResults};
use crate::power_stage::{compute_power_stage, PowerInputs, PowerResults};
use crate::thermal::{compute_thermal, ThermalInputs, ThermalResults};
use crate::topology::Topology;

/// Everything a complete design needs
///
/// `magnetics.inductance`, `magnetics.peak_current` and
/// `thermal.total_loss` are overwritten from the power stage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DesignInputs {
    /// Converter topology
    pub topology: Topology,
    /// Electrical operating point
    pub power: PowerInputs,
    /// Core and winding parameters
    pub magnetics: MagneticInputs,
    /// Thermal stack
    pub thermal: ThermalInputs,
}

impl DesignInputs {
    /// Default operating point, core and thermal stack for `topology`.
    pub fn for_topology(topology: Topology) -> Self {
        Self { topology, ..Self::default() }
    }
}

/// A complete design and its advisories
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DesignReport {
    /// Topology the design was computed for
    pub topology: Topology,
    /// Power-stage results
    pub power: PowerResults,
    /// Magnetics inputs after linking
    pub magnetic_inputs: MagneticInputs,
    /// Magnetics results
    pub magnetics: MagneticResults,
    /// Thermal inputs after linking
    pub thermal_inputs: ThermalInputs,
    /// Thermal results
    pub thermal: ThermalResults,
    /// Advisories raised on the results
    pub warnings: Warnings,
}

impl DesignReport {
    /// Whether no check raised a warning.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Computes power stage, magnetics and thermal budget for `inputs`.
pub fn evaluate(inputs: &DesignInputs) -> DesignReport {
    let power = compute_power_stage(inputs.topology, &inputs.power);

    let magnetic_inputs = inputs.magnetics.linked_to(&power);
    let magnetics = compute_magnetics(&magnetic_inputs);

    let thermal_inputs = inputs.thermal.linked_to(&power);
    let thermal = compute_thermal(&thermal_inputs);

    let warnings = checks::review(&power, &magnetics, &thermal_inputs, &thermal);

    log_debug!("{} design evaluated with {} warning(s)", inputs.topology, warnings.len());

    DesignReport {
        topology: inputs.topology,
        power,
        magnetic_inputs,
        magnetics,
        thermal_inputs,
        thermal,
        warnings,
    }
}
