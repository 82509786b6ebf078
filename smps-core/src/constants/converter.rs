//! Power-Stage Constants
//!
//! Duty-cycle clamps, sizing floors and unit factors used by the
//! power-stage calculator. The clamps keep results physically sane for
//! typical inputs; they are not validation limits.

// ===== DUTY CYCLE LIMITS =====

/// Lowest duty cycle any topology reports.
///
/// Below 1 % the switch on-time is shorter than practical gate-drive and
/// blanking times at typical switching frequencies.
pub const DUTY_CYCLE_MIN: f64 = 0.01;

/// Highest duty cycle for buck, boost, buck-boost and flyback.
///
/// The switch must turn off for part of every period so the inductor can
/// release its energy.
pub const DUTY_CYCLE_MAX: f64 = 0.99;

/// Highest duty cycle for forward and push-pull converters.
///
/// The transformer core has to reset every period; with a 1:1 reset winding
/// the reset interval equals the on-time, which caps D just below 50 %.
///
/// Source: Erickson & Maksimović, Fundamentals of Power Electronics, §6.3
pub const DUTY_CYCLE_MAX_TRANSFORMER_RESET: f64 = 0.49;

// ===== SIZING FLOORS =====

/// Floor applied to inductance (µH) and capacitance (µF) results.
///
/// Keeps a non-physical zero or negative size from reaching a bill of
/// materials when the operating point makes the formula collapse.
pub const SIZING_FLOOR: f64 = 0.01;

/// Smallest output ripple voltage used when sizing the output capacitor (V).
///
/// A 0 % ripple request would otherwise divide by zero.
pub const MIN_RIPPLE_VOLTAGE_V: f64 = 1e-3;

/// Sizing factor of the triangular-ripple capacitor model.
///
/// ΔV = ΔI / (8·f·C) for an inductor ripple current that flows entirely into
/// the output capacitor.
pub const TRIANGULAR_RIPPLE_FACTOR: f64 = 8.0;

/// Share of the output capacitance used as the input capacitance estimate.
pub const INPUT_CAPACITANCE_RATIO: f64 = 0.5;

/// Divisor of the triangular-ripple RMS term, ΔI²/12.
pub const TRIANGULAR_RMS_DIVISOR: f64 = 12.0;

// ===== UNIT FACTORS =====

/// Hertz per kilohertz; switching frequency is entered in kHz.
pub const HZ_PER_KHZ: f64 = 1000.0;

/// Micro-units per base unit (H → µH, F → µF).
pub const MICRO_PER_UNIT: f64 = 1e6;

/// Millivolts per volt; output ripple is reported in mV.
pub const MV_PER_V: f64 = 1000.0;

/// Percent to ratio divisor.
pub const PERCENT: f64 = 100.0;

// ===== ADVISORY LIMITS =====

/// Power-stage loss above which a design is flagged (W).
///
/// Past a few watts a single switch package needs a real heatsink and the
/// efficiency assumption deserves a second look.
pub const LOSS_WARNING_W: f64 = 5.0;
