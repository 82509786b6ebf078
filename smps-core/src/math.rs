//! Small numeric helpers shared by the calculators
//!
//! All helpers go through `libm` so the engine behaves the same with and
//! without `std`. None of them hides a NaN: a degenerate input stays visible
//! in the result instead of being clamped into a plausible-looking number.

/// Raises `value` to `floor`, letting NaN through unchanged.
///
/// `f64::max` would turn NaN into `floor`, which would disguise a degenerate
/// operating point as a minimum-size component.
#[inline]
#[must_use]
pub fn floor_at(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

/// Rounds to `decimals` places with ties going toward +∞.
///
/// `round_to(-1.125, 2)` is `-1.12`, `round_to(1.125, 2)` is `1.13`.
#[inline]
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = libm::pow(10.0, f64::from(decimals));
    libm::floor(value * scale + 0.5) / scale
}

/// Square root.
#[inline]
#[must_use]
pub fn sqrt(value: f64) -> f64 {
    libm::sqrt(value)
}

/// Smallest integer-valued float not below `value`.
#[inline]
#[must_use]
pub fn ceil(value: f64) -> f64 {
    libm::ceil(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_at_raises_small_values() {
        assert_eq!(floor_at(-3.0, 0.01), 0.01);
        assert_eq!(floor_at(0.0, 0.01), 0.01);
        assert_eq!(floor_at(27.0, 0.01), 27.0);
    }

    #[test]
    fn floor_at_keeps_nan_and_infinity() {
        assert!(floor_at(f64::NAN, 0.01).is_nan());
        assert_eq!(floor_at(f64::INFINITY, 0.01), f64::INFINITY);
        assert_eq!(floor_at(f64::NEG_INFINITY, 0.0), 0.0);
    }

    #[test]
    fn round_to_breaks_ties_upward() {
        assert_eq!(round_to(0.0239, 2), 0.02);
        assert_eq!(round_to(1687.5, 1), 1687.5);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn round_to_propagates_nan() {
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
