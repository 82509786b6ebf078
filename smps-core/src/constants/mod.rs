//! Constants for the SMPS design engine
//!
//! Every numeric limit, floor and unit factor the calculators rely on is
//! defined here with a note on where it comes from. The calculators never
//! carry magic numbers of their own.
//!
//! ## Organization
//!
//! Constants are grouped by calculator:
//! - **Converter**: duty-cycle clamps, sizing floors, unit factors
//! - **Magnetics**: vacuum permeability, SI conversions, winding limits
//! - **Thermal**: loss fallback and advisory thresholds
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Name constants with their unit as a suffix
//! 3. Keep the source or rationale next to the value

/// Power-stage clamps, floors and unit conversions.
pub mod converter;

/// Magnetic constants and winding limits.
pub mod magnetics;

/// Thermal-network fallbacks and advisory limits.
pub mod thermal;

// Re-export commonly used constants for convenience
pub use converter::{
    DUTY_CYCLE_MIN, DUTY_CYCLE_MAX, DUTY_CYCLE_MAX_TRANSFORMER_RESET,
    SIZING_FLOOR, MIN_RIPPLE_VOLTAGE_V, HZ_PER_KHZ, LOSS_WARNING_W,
};

pub use magnetics::{VACUUM_PERMEABILITY_H_PER_M, FILL_FACTOR_WARNING};

pub use thermal::MIN_LINKED_LOSS_W;
