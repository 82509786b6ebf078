//! Magnetic Constants
//!
//! Permeability of free space and the SI conversions the magnetics
//! calculator needs. Inputs are entered in engineering units (µH, mm, mm²)
//! and converted to SI before any physics is applied.

use core::f64::consts::PI;

/// Vacuum permeability μ₀ (H/m).
///
/// Uses the pre-2019 defined value 4π × 10⁻⁷. The CODATA 2018 value differs
/// by about one part in 10¹⁰, far below any core tolerance.
pub const VACUUM_PERMEABILITY_H_PER_M: f64 = 4.0 * PI * 1e-7;

/// Henries per microhenry.
pub const H_PER_UH: f64 = 1e-6;

/// Square metres per square millimetre.
pub const M2_PER_MM2: f64 = 1e-6;

/// Metres per millimetre.
pub const M_PER_MM: f64 = 1e-3;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// Nanohenries per henry; AL values are quoted in nH/N².
pub const NH_PER_H: f64 = 1e9;

/// Decimal places kept on the air gap (mm).
pub const AIR_GAP_DECIMALS: i32 = 2;

/// Decimal places kept on the AL value (nH/N²).
pub const AL_VALUE_DECIMALS: i32 = 1;

/// Window fill above which a winding may not physically fit.
///
/// Round wire with insulation, bobbin walls and creepage margins rarely
/// packs denser than about half of the bare window.
///
/// Source: McLyman, Transformer and Inductor Design Handbook, ch. 4
pub const FILL_FACTOR_WARNING: f64 = 0.5;
