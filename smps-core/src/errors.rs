//! Error types
//!
//! The calculators themselves have no error path: every input produces a
//! result, and degenerate inputs show up as NaN or infinite fields (see
//! [`crate::checks`] for how those are flagged). The only fallible
//! operation in the engine is turning a caller-supplied identifier into a
//! [`Topology`](crate::Topology).
//!
//! Errors follow the same rules as the rest of the crate:
//! - No heap allocation, so they work without `std`
//! - `Copy`, cheap to return and compare
//!
//! ```
//! use smps_core::{ParseTopologyError, Topology};
//!
//! assert_eq!("flyback".parse::<Topology>(), Ok(Topology::Flyback));
//! assert_eq!("".parse::<Topology>(), Err(ParseTopologyError::Empty));
//! assert_eq!("cuk".parse::<Topology>(), Err(ParseTopologyError::Unknown));
//! ```

use thiserror_no_std::Error;

/// Result type for topology parsing
pub type TopologyResult<T> = Result<T, ParseTopologyError>;

/// Failure to recognise a topology identifier
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTopologyError {
    /// Identifier was empty or whitespace
    #[error("Topology identifier is empty")]
    Empty,

    /// Identifier names none of the supported converters
    #[error("Unknown topology: expected buck, boost, buck-boost, flyback, forward or push-pull")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small() {
        assert_eq!(core::mem::size_of::<ParseTopologyError>(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_problem() {
        assert!(ParseTopologyError::Unknown.to_string().contains("push-pull"));
        assert!(ParseTopologyError::Empty.to_string().contains("empty"));
    }
}
