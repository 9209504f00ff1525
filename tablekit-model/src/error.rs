//! Error types for field access and editor input

/// Error type for field access operations on [`Record`](crate::Record).
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the record.
    #[error("Field '{field}' not found in record")]
    Missing { field: String },

    /// The field exists but has a different type than requested.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}

/// Error type for parsing raw editor input into a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The input is not a valid number.
    #[error("'{input}' is not a valid number")]
    InvalidNumber { input: String },

    /// The input is not a valid ISO-8601 date.
    #[error("'{input}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// The input does not match any option of a select editor.
    #[error("'{input}' is not one of the select options")]
    UnknownOption { input: String },
}
