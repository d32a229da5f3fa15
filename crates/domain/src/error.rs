//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`VitrineError`]
//! via `From` when crossing a port boundary.

/// Base error for the vitrine workspace.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    /// A configuration or domain value violated an invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The client-side key/value storage rejected an operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Details about why a value failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A ratio field must lie within `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    RatioOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A pixel offset must not be negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeOffset {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An identifier, class name, or key must not be empty.
    #[error("{field} must not be empty")]
    EmptyName {
        /// Name of the offending field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_ratio_error_with_field_and_value() {
        let err = ValidationError::RatioOutOfRange {
            field: "reveal.threshold",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "reveal.threshold must be within [0, 1], got 1.5");
    }

    #[test]
    fn should_display_empty_name_error() {
        let err = ValidationError::EmptyName {
            field: "storage_key",
        };
        assert_eq!(err.to_string(), "storage_key must not be empty");
    }

    #[test]
    fn should_convert_validation_error_into_base_error() {
        let err: VitrineError = ValidationError::EmptyName { field: "ids.lightbox" }.into();
        assert!(matches!(
            err,
            VitrineError::Validation(ValidationError::EmptyName { .. })
        ));
    }

    #[test]
    fn should_keep_storage_source() {
        let source = std::io::Error::other("quota exceeded");
        let err = VitrineError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "storage error");
        let inner = std::error::Error::source(&err).unwrap();
        assert_eq!(inner.to_string(), "quota exceeded");
    }
}
