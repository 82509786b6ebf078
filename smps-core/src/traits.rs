//! Core trait for calculators
//!
//! Every calculator maps one input record to one result record. Keep it
//! that simple: no state, no error channel, no allocation.

/// A stateless, closed-form design calculation
pub trait Calculator {
    /// Parameters the calculation reads
    type Input;

    /// Freshly built result record
    type Output;

    /// Evaluate the calculation.
    ///
    /// Must be deterministic: identical inputs give bit-identical outputs.
    fn compute(&self, input: &Self::Input) -> Self::Output;
}
