use colored::Colorize;
use std::fmt;

/// Errors that can occur while binding environment variables onto a record
///
/// The first error aborts the bind. Fields written before it keep their new
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The record cannot accept the value: no writable field at the index,
    /// or the value does not match the field's shape
    InvalidTarget { reason: String },
    /// A settable field has a type the binder cannot coerce into
    UnsupportedType { key: String, kind: String },
    /// A boolean field's value is not one of the recognized literals
    InvalidBoolean { key: String, value: String },
    /// An integer field's value is malformed or out of range for the field
    InvalidInteger { key: String, value: String },
}

impl BindError {
    pub(crate) fn invalid_target(reason: impl Into<String>) -> Self {
        BindError::InvalidTarget {
            reason: reason.into(),
        }
    }

    /// Environment key the error was raised for, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            BindError::InvalidTarget { .. } => None,
            BindError::UnsupportedType { key, .. }
            | BindError::InvalidBoolean { key, .. }
            | BindError::InvalidInteger { key, .. } => Some(key),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::InvalidTarget { reason } => {
                write!(f, "Invalid bind target: {}", reason)
            }
            BindError::UnsupportedType { key, kind } => {
                write!(
                    f,
                    "{}: Unsupported field type {}",
                    key.magenta().bold(),
                    kind.yellow()
                )
            }
            BindError::InvalidBoolean { key, value } => {
                write!(
                    f,
                    "{}: Invalid boolean value {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                write!(f, " (expected true/True/TRUE or false/False/FALSE)")
            }
            BindError::InvalidInteger { key, value } => {
                write!(
                    f,
                    "{}: Invalid integer value {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                )
            }
        }
    }
}

impl std::error::Error for BindError {}
