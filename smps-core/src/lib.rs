//! Core design engine for switch-mode DC-DC converters
//!
//! Turns a converter topology and a handful of operating parameters into the
//! numbers a designer needs before picking parts: duty cycle, current and
//! voltage stresses, inductance and capacitance, magnetics sizing and the
//! heatsink budget.
//!
//! Key properties:
//! - Every calculation is a single closed-form evaluation
//! - No allocation, no I/O, no shared state (`no_std` capable)
//! - Inputs are never rejected; degenerate values propagate as NaN/∞
//!
//! ```
//! use smps_core::{compute_power_stage, compute_magnetics, compute_thermal};
//! use smps_core::{MagneticInputs, PowerInputs, ThermalInputs, Topology};
//!
//! let power = compute_power_stage(Topology::Buck, &PowerInputs::default());
//! let magnetics = compute_magnetics(&MagneticInputs::default().linked_to(&power));
//! let thermal = compute_thermal(&ThermalInputs::default().linked_to(&power));
//!
//! assert!(power.duty_cycle > 0.46 && power.duty_cycle < 0.47);
//! assert!(magnetics.turns >= 1);
//! assert!(thermal.max_theta_sa > 0.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod checks;
pub mod constants;
pub mod design;
pub mod errors;
pub mod magnetics;
pub mod math;
pub mod power_stage;
pub mod thermal;
pub mod topology;
pub mod traits;

// Public API
pub use checks::{DesignWarning, Warnings};
pub use design::{DesignInputs, DesignReport};
pub use errors::ParseTopologyError;
pub use magnetics::{compute_magnetics, MagneticInputs, MagneticResults, MagneticsCalculator};
pub use power_stage::{compute_power_stage, PowerInputs, PowerResults, PowerStageCalculator};
pub use thermal::{compute_thermal, ThermalCalculator, ThermalInputs, ThermalResults};
pub use topology::Topology;
pub use traits::Calculator;

/// Crate version, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
