//! Design checks
//!
//! The calculators never refuse an input. These checks look at finished
//! results and flag the ones a designer should not take at face value:
//!
//! | Warning                   | Raised when                                   |
//! |---------------------------|-----------------------------------------------|
//! | `HighLosses`              | power-stage loss above 5 W                    |
//! | `FillFactorExceeded`      | winding fills more than half the window       |
//! | `NoPassiveHeatsink`       | heatsink-to-ambient budget below zero         |
//! | `JunctionOverTemperature` | junction ends above its limit                 |
//! | `NonFinite`               | a headline result is NaN or infinite          |
//!
//! Checks never modify a result. Each raised warning is also logged at
//! `warn` level when the `log` feature is on.

use thiserror_no_std::Error;

use crate::constants::converter::LOSS_WARNING_W;
use crate::constants::magnetics::FILL_FACTOR_WARNING;
use crate::constants::thermal::JUNCTION_TOLERANCE_C;
use crate::magnetics::MagneticResults;
use crate::power_stage::PowerResults;
use crate::thermal::{ThermalInputs, ThermalResults};

/// Upper bound on warnings one design can raise
///
/// Each check pushes a given warning at most once. The power stage can raise
/// five (four `NonFinite` plus `HighLosses`), the magnetics two and the
/// thermal solution three.
pub const MAX_WARNINGS: usize = 10;

/// Warnings collected for one design, without allocation
pub type Warnings = heapless::Vec<DesignWarning, MAX_WARNINGS>;

/// Advisory raised on a computed design
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DesignWarning {
    /// Converter dissipates more than a single package comfortably handles
    #[error("Power loss {losses} W exceeds {limit} W")]
    HighLosses {
        /// Computed loss (W)
        losses: f64,
        /// Advisory limit (W)
        limit: f64,
    },

    /// Winding probably does not fit the core window
    #[error("Fill factor {fill_factor} exceeds {limit}; winding may not fit")]
    FillFactorExceeded {
        /// Computed fill factor
        fill_factor: f64,
        /// Advisory limit
        limit: f64,
    },

    /// Thermal budget left for the heatsink is negative
    #[error(
        "No passive heatsink can meet the junction limit (θSA budget {theta_sa} °C/W); \
         consider forced air or lower losses"
    )]
    NoPassiveHeatsink {
        /// Heatsink-to-ambient budget (°C/W)
        theta_sa: f64,
    },

    /// Junction ends above its rated maximum
    #[error("Junction temperature {junction_temp} °C exceeds limit {limit} °C")]
    JunctionOverTemperature {
        /// Computed junction temperature (°C)
        junction_temp: f64,
        /// Maximum junction temperature (°C)
        limit: f64,
    },

    /// A result is NaN or infinite, usually from a zero input
    #[error("{quantity} is not a finite number; check for zero or missing inputs")]
    NonFinite {
        /// Name of the offending result
        quantity: &'static str,
    },
}

/// Flags on the power stage alone.
pub fn check_power_stage(power: &PowerResults, warnings: &mut Warnings) {
    let headline = [
        ("duty cycle", power.duty_cycle),
        ("inductance", power.inductance),
        ("output capacitance", power.output_capacitance),
        ("losses", power.losses),
    ];
    for (quantity, value) in headline {
        if !value.is_finite() {
            push(warnings, DesignWarning::NonFinite { quantity });
        }
    }

    if power.losses > LOSS_WARNING_W {
        push(warnings, DesignWarning::HighLosses { losses: power.losses, limit: LOSS_WARNING_W });
    }
}

/// Flags on the magnetics.
pub fn check_magnetics(magnetics: &MagneticResults, warnings: &mut Warnings) {
    if !magnetics.air_gap_mm.is_finite() {
        push(warnings, DesignWarning::NonFinite { quantity: "air gap" });
    }

    if magnetics.fill_factor > FILL_FACTOR_WARNING {
        push(
            warnings,
            DesignWarning::FillFactorExceeded {
                fill_factor: magnetics.fill_factor,
                limit: FILL_FACTOR_WARNING,
            },
        );
    }
}

/// Flags on the thermal solution, against the limit it was solved for.
pub fn check_thermal(inputs: &ThermalInputs, thermal: &ThermalResults, warnings: &mut Warnings) {
    if !thermal.max_theta_sa.is_finite() {
        push(warnings, DesignWarning::NonFinite { quantity: "heatsink budget" });
    }

    if thermal.max_theta_sa < 0.0 {
        push(warnings, DesignWarning::NoPassiveHeatsink { theta_sa: thermal.max_theta_sa });
    }

    if thermal.junction_temp > inputs.max_junction_temp + JUNCTION_TOLERANCE_C {
        push(
            warnings,
            DesignWarning::JunctionOverTemperature {
                junction_temp: thermal.junction_temp,
                limit: inputs.max_junction_temp,
            },
        );
    }
}

/// Runs every check over a complete design.
pub fn review(
    power: &PowerResults,
    magnetics: &MagneticResults,
    thermal_inputs: &ThermalInputs,
    thermal: &ThermalResults,
) -> Warnings {
    let mut warnings = Warnings::new();
    check_power_stage(power, &mut warnings);
    check_magnetics(magnetics, &mut warnings);
    check_thermal(thermal_inputs, thermal, &mut warnings);
    warnings
}

fn push(warnings: &mut Warnings, warning: DesignWarning) {
    log_warn!("design check: {}", warning);
    // Never full: `review` raises at most MAX_WARNINGS
    let _ = warnings.push(warning);
}
