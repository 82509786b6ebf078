//! Form Schemas for the SMPS Design Engine
//!
//! ## Overview
//!
//! The engine in `smps-core` accepts any number and never refuses an input.
//! The ranges a designer is expected to stay within live here instead, as
//! data: every input form is a [`FormSchema`] listing its fields with unit,
//! default, step and optional bounds.
//!
//! Keeping the ranges next to the wire names means a front end, a batch
//! script and the engine's own tests all agree on what a sensible input is.
//!
//! ```json
//! {
//!   "name": "vin",
//!   "label": "Input Voltage",
//!   "unit": "V",
//!   "min": 0.1,
//!   "step": 0.1,
//!   "default": 12.0
//! }
//! ```
//!
//! ## Standard Forms
//!
//! | Qualified name   | Feeds                              |
//! |------------------|------------------------------------|
//! | `power_stage_v1` | `smps_core::PowerInputs`           |
//! | `magnetics_v1`   | `smps_core::MagneticInputs`        |
//! | `thermal_v1`     | `smps_core::ThermalInputs`         |
//!
//! Inductance, peak current and total loss are not form fields: they are
//! linked from the power stage.
//!
//! ## Versioning
//!
//! 1. **Version in Name**: `power_stage_v1`, `power_stage_v2`
//! 2. **Always Append**: new fields are added, never removed
//! 3. **Defaults**: a decoder fills every missing field from the form
//!
//! ## Usage Example
//!
//! ```rust
//! use smps_schemas::{decode, FormRegistry, FormValidator};
//! use serde_json::json;
//!
//! let registry = FormRegistry::new();
//! registry.load_defaults()?;
//!
//! let raw = json!({ "vin": 48.0, "vout": 12.0, "turnsRatio": 3.0 });
//! let form = registry.get("power_stage_v1")?;
//! let report = FormValidator::new(form).validate(&raw);
//! assert!(report.is_valid());
//!
//! let inputs = decode::power_inputs(&raw)?;
//! assert_eq!(inputs.vin, 48.0);
//! assert_eq!(inputs.iout, 2.0); // default
//! # Ok::<(), smps_schemas::SchemaError>(())
//! ```

pub mod decode;
pub mod fields;
pub mod forms;
pub mod registry;
pub mod validation;

pub use fields::FieldConstraints;
pub use forms::FormSchema;
pub use registry::{FormRegistry, DEFAULT_REGISTRY};
pub use validation::{
    from_design_warning, FormValidator, IssueType, Severity, ValidationIssue, ValidationReport,
};

/// Result alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// No form registered under the name
    #[error("Form not found: {0}")]
    NotFound(String),

    /// Field present but not of the expected JSON type
    #[error("Field '{field}' expected {expected}")]
    TypeMismatch {
        /// Wire name of the field
        field: String,
        /// Expected JSON type
        expected: &'static str,
    },

    /// Topology identifier not recognised
    #[error("Invalid topology: {0}")]
    UnknownTopology(#[from] smps_core::ParseTopologyError),

    /// JSON encoding or decoding failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Registry lock poisoned by a panicking writer
    #[error("Registry lock poisoned")]
    Lock,

    /// Form definition is malformed
    #[error("Invalid form: {0}")]
    InvalidSchema(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Serialization(e.to_string())
    }
}
