//! Error types for profile updates
//!
//! Both variants are recoverable: the caller renders them as a message and
//! the store is left untouched.

use crate::fields::ProfileField;

/// Errors raised by [`ProfileStore::update_field`](crate::ProfileStore::update_field)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Field name is not in the allow-list
    #[error("field '{field}' is not updatable")]
    Validation {
        /// The rejected field name, as supplied by the caller
        field: String,
    },

    /// Raw value cannot be converted to the field's type
    #[error("cannot convert '{value}' for field {field}: {reason}")]
    Conversion {
        /// Target field
        field: ProfileField,
        /// Raw value as supplied
        value: String,
        /// Underlying parse failure
        reason: String,
    },
}

impl ProfileError {
    /// Create validation error for a rejected field name
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Create conversion error for a field
    pub fn conversion(
        field: ProfileField,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Conversion {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if error is an allow-list rejection
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error is a type conversion failure
    #[inline]
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

/// Result type alias for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;
