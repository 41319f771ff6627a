//! Props validation
//!
//! Kit components accept any props their types allow; validators report caller
//! contract violations (such as an empty required label) without failing the
//! render.

use std::fmt::{self, Display};

/// Error indicating validation problems with props
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValidationError {
    /// A required property was missing or empty
    MissingRequired(String),
    /// A property had an invalid value
    InvalidValue {
        /// Name of the property
        name: String,
        /// Description of the validation error
        reason: String,
    },
    /// Multiple validation errors
    Multiple(Vec<PropValidationError>),
}

impl Display for PropValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValidationError::MissingRequired(name) => {
                write!(f, "Missing required property: {name}")
            }
            PropValidationError::InvalidValue { name, reason } => {
                write!(f, "Invalid value for property {name}: {reason}")
            }
            PropValidationError::Multiple(errors) => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PropValidationError {}

/// Trait for props validation
pub trait PropValidator<P> {
    /// Validate the props
    fn validate(&self, props: &P) -> Result<(), PropValidationError>;
}

/// Fail with [`PropValidationError::MissingRequired`] when `value` is blank
pub fn require_non_empty(name: &str, value: &str) -> Result<(), PropValidationError> {
    if value.trim().is_empty() {
        Err(PropValidationError::MissingRequired(name.to_string()))
    } else {
        Ok(())
    }
}

/// Collapse a list of errors into a single result
pub fn collect_errors(mut errors: Vec<PropValidationError>) -> Result<(), PropValidationError> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(PropValidationError::Multiple(errors)),
    }
}
