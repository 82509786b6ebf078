//! Thermal Constants

/// Loss used when the power stage reports zero (or NaN) loss (W).
///
/// A 100 % efficient design would otherwise divide the temperature budget
/// by zero when its loss is linked into the thermal calculator.
pub const MIN_LINKED_LOSS_W: f64 = 0.01;

/// Lowest heatsink-to-ambient resistance carried into the forward
/// temperature calculation (°C/W). A negative budget means no passive
/// heatsink works, and is reported rather than propagated.
pub const THETA_SA_FLOOR: f64 = 0.0;

/// Margin above the junction limit before an over-temperature is flagged
/// (°C). A design solved exactly onto its limit lands there only to within
/// floating-point rounding.
pub const JUNCTION_TOLERANCE_C: f64 = 1e-6;
