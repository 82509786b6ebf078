//! Form-Based Validation
//!
//! Checks raw JSON input against a form's field constraints before it is
//! decoded, and folds the engine's design advisories into the same report
//! vocabulary so a client shows both in one list.

use serde::Serialize;
use serde_json::Value;
use smps_core::DesignWarning;

use crate::forms::FormSchema;

/// Validator for one input form
pub struct FormValidator {
    form: FormSchema,

    /// Whether the isolated-only fields are expected
    isolated: bool,
}

impl FormValidator {
    /// Create a validator that expects every field
    pub fn new(form: FormSchema) -> Self {
        Self { form, isolated: true }
    }

    /// Skip isolated-only fields, as for a non-isolated topology
    #[must_use]
    pub fn non_isolated(mut self) -> Self {
        self.isolated = false;
        self
    }

    /// Form being validated against
    pub fn form(&self) -> &FormSchema {
        &self.form
    }

    /// Validate a raw JSON object against the form
    pub fn validate(&self, raw: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(object) = raw.as_object() else {
            report.add_error(ValidationIssue {
                issue_type: IssueType::TypeMismatch,
                field: None,
                message: format!("Expected an object for form {}", self.form.qualified_name()),
                severity: Severity::Error,
            });
            return report;
        };

        for field in &self.form.fields {
            if field.isolated_only && !self.isolated {
                if object.contains_key(&field.name) {
                    report.add_info(ValidationIssue {
                        issue_type: IssueType::Ignored,
                        field: Some(field.name.clone()),
                        message: format!("{} is only used by isolated topologies", field.label),
                        severity: Severity::Info,
                    });
                }
                continue;
            }

            match (object.get(&field.name), &field.null_means) {
                (Some(Value::Null), Some(meaning)) => report.add_info(ValidationIssue {
                    issue_type: IssueType::MissingField,
                    field: Some(field.name.clone()),
                    message: format!("{} is null; {}", field.label, meaning),
                    severity: Severity::Info,
                }),
                (None | Some(Value::Null), _) => report.add_info(ValidationIssue {
                    issue_type: IssueType::MissingField,
                    field: Some(field.name.clone()),
                    message: format!(
                        "{} not given; using default {} {}",
                        field.label, field.default, field.unit
                    ),
                    severity: Severity::Info,
                }),
                (Some(value), _) => match value.as_f64() {
                    None => report.add_error(ValidationIssue {
                        issue_type: IssueType::TypeMismatch,
                        field: Some(field.name.clone()),
                        message: format!("{} must be a number", field.label),
                        severity: Severity::Error,
                    }),
                    Some(number) if !number.is_finite() => report.add_error(ValidationIssue {
                        issue_type: IssueType::InvalidNumber,
                        field: Some(field.name.clone()),
                        message: format!("{} is not a finite number", field.label),
                        severity: Severity::Error,
                    }),
                    Some(number) if !field.contains(number) => report.add_error(ValidationIssue {
                        issue_type: IssueType::OutOfRange,
                        field: Some(field.name.clone()),
                        message: out_of_range_message(field, number),
                        severity: Severity::Error,
                    }),
                    Some(_) => {}
                },
            }
        }

        for name in object.keys() {
            if self.form.field(name).is_none() {
                report.add_info(ValidationIssue {
                    issue_type: IssueType::UnknownField,
                    field: Some(name.clone()),
                    message: format!("'{}' is not a field of {}", name, self.form.qualified_name()),
                    severity: Severity::Info,
                });
            }
        }

        report
    }
}

fn out_of_range_message(field: &crate::FieldConstraints, value: f64) -> String {
    match (field.min, field.max) {
        (Some(min), _) if value < min => format!(
            "{} {} {} is below minimum {} {}",
            field.label, value, field.unit, min, field.unit
        ),
        (_, Some(max)) if value > max => format!(
            "{} {} {} exceeds maximum {} {}",
            field.label, value, field.unit, max, field.unit
        ),
        _ => format!("{} {} {} is out of range", field.label, value, field.unit),
    }
}

/// Validation report containing all issues found
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationIssue>,

    /// Informational messages
    pub info: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Add info
    pub fn add_info(&mut self, issue: ValidationIssue) {
        self.info.push(issue);
    }

    /// Add each design advisory as a warning
    pub fn add_design_warnings<'a>(
        &mut self,
        warnings: impl IntoIterator<Item = &'a DesignWarning>,
    ) {
        for warning in warnings {
            self.add_warning(from_design_warning(warning));
        }
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueType {
    /// Field not given; the form default applies
    MissingField,

    /// Field not part of the form
    UnknownField,

    /// Field given where the topology does not read it
    Ignored,

    /// Type doesn't match the form
    TypeMismatch,

    /// NaN or infinite
    InvalidNumber,

    /// Outside the field's bounds
    OutOfRange,

    /// Advisory raised on the computed design
    DesignAdvisory,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

/// Convert an engine design advisory into a report issue
pub fn from_design_warning(warning: &DesignWarning) -> ValidationIssue {
    let field = match warning {
        DesignWarning::HighLosses { .. } => Some("losses"),
        DesignWarning::FillFactorExceeded { .. } => Some("fillFactor"),
        DesignWarning::NoPassiveHeatsink { .. } => Some("maxThetaSA"),
        DesignWarning::JunctionOverTemperature { .. } => Some("junctionTemp"),
        DesignWarning::NonFinite { .. } => None,
    };

    ValidationIssue {
        issue_type: IssueType::DesignAdvisory,
        field: field.map(str::to_string),
        message: warning.to_string(),
        severity: Severity::Warning,
    }
}
