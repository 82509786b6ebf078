//! Magnetics calculator
//!
//! Sizes the winding and gap of a gapped ferrite inductor (or flyback
//! transformer primary) for a target inductance and peak current.
//!
//! ## Equations
//!
//! Inputs are converted to SI first (µH → H, mm² → m², mm → m).
//!
//! ```text
//! N      = ⌈L·I_pk / (B_max·A_e)⌉          Faraday: peak flux stays ≤ B_max
//! l_g    = μ₀·N²·A_e/L − l_c/μ_r            reluctance balance, floored at 0
//! A_L    = L / N²                           reported in nH/N²
//! A_wire = I_pk / J                         mm², sized on peak current
//! d_wire = √(4·A_wire/π)                    round conductor
//! k_u    = N·A_wire / A_window              fill factor
//! ```
//!
//! A fill factor above one half means the winding will probably not fit;
//! it is reported, not rejected (see [`crate::checks`]).

use core::f64::consts::PI;

use crate::constants::magnetics::{
    AIR_GAP_DECIMALS, AL_VALUE_DECIMALS, FILL_FACTOR_WARNING, H_PER_UH, MM_PER_M, M2_PER_MM2,
    M_PER_MM, NH_PER_H, VACUUM_PERMEABILITY_H_PER_M,
};
use crate::math::{ceil, floor_at, round_to, sqrt};
use crate::power_stage::PowerResults;
use crate::traits::Calculator;

/// Core, material and winding parameters
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticInputs {
    /// Target inductance (µH)
    pub inductance: f64,
    /// Peak winding current (A)
    pub peak_current: f64,
    /// Maximum flux density (T)
    pub bmax: f64,
    /// Effective core cross-section A_e (mm²)
    pub ae: f64,
    /// Winding window area (mm²)
    pub window_area: f64,
    /// Conductor current density (A/mm²)
    pub current_density: f64,
    /// Relative permeability of the core material
    pub core_permeability: f64,
    /// Magnetic path length of the core (mm)
    pub core_length_mm: f64,
}

impl Default for MagneticInputs {
    /// A mid-size ferrite core (A_e = 52 mm², l_e = 37 mm, μ_r = 2500) at
    /// 0.3 T and 4 A/mm². Inductance and peak current are zero until linked
    /// to a power stage.
    fn default() -> Self {
        Self {
            inductance: 0.0,
            peak_current: 0.0,
            bmax: 0.3,
            ae: 52.0,
            window_area: 40.0,
            current_density: 4.0,
            core_permeability: 2500.0,
            core_length_mm: 37.0,
        }
    }
}

impl MagneticInputs {
    /// Same core, with inductance and peak current taken from a power stage.
    #[must_use]
    pub fn linked_to(mut self, power: &PowerResults) -> Self {
        self.inductance = power.inductance;
        self.peak_current = power.peak_current;
        self
    }
}

/// Winding and gap design
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticResults {
    /// Number of turns
    pub turns: u32,
    /// Air gap length (mm), two decimals
    pub air_gap_mm: f64,
    /// Conductor cross-section (mm²)
    pub wire_area_mm2: f64,
    /// Bare conductor diameter (mm)
    pub wire_diameter_mm: f64,
    /// Fraction of the window area occupied by copper
    pub fill_factor: f64,
    /// Inductance factor (nH/N²), one decimal
    pub al_value: f64,
}

impl MagneticResults {
    /// Whether the winding probably does not fit the window.
    pub fn overfilled(&self) -> bool {
        self.fill_factor > FILL_FACTOR_WARNING
    }
}

/// Magnetics calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct MagneticsCalculator;

impl Calculator for MagneticsCalculator {
    type Input = MagneticInputs;
    type Output = MagneticResults;

    fn compute(&self, inputs: &MagneticInputs) -> MagneticResults {
        let l_henry = inputs.inductance * H_PER_UH;
        let ae_m2 = inputs.ae * M2_PER_MM2;
        let lc_m = inputs.core_length_mm * M_PER_MM;

        let turns_f = ceil((l_henry * inputs.peak_current) / (inputs.bmax * ae_m2));

        let air_gap_m = (VACUUM_PERMEABILITY_H_PER_M * turns_f * turns_f * ae_m2) / l_henry
            - lc_m / inputs.core_permeability;
        let air_gap_mm = floor_at(air_gap_m * MM_PER_M, 0.0);

        let al_value = (l_henry / (turns_f * turns_f)) * NH_PER_H;

        let wire_area_mm2 = inputs.peak_current / inputs.current_density;
        let wire_diameter_mm = sqrt((4.0 * wire_area_mm2) / PI);
        let fill_factor = (turns_f * wire_area_mm2) / inputs.window_area;

        log_debug!(
            "magnetics: N={} gap={}mm AL={}nH fill={}",
            turns_f, air_gap_mm, al_value, fill_factor
        );

        MagneticResults {
            turns: turns_to_count(turns_f),
            air_gap_mm: round_to(air_gap_mm, AIR_GAP_DECIMALS),
            wire_area_mm2,
            wire_diameter_mm,
            fill_factor,
            al_value: round_to(al_value, AL_VALUE_DECIMALS),
        }
    }
}

/// Integer turn count for the record.
///
/// The float turn count already drives every derived quantity; this only
/// narrows it. `as` saturates: NaN becomes 0, ∞ becomes `u32::MAX`.
fn turns_to_count(turns: f64) -> u32 {
    turns as u32
}

/// Sizes the magnetics for `inputs`.
pub fn compute_magnetics(inputs: &MagneticInputs) -> MagneticResults {
    MagneticsCalculator.compute(inputs)
}
