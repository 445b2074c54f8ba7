//! Error types for point cloud generation

use thiserror::Error;

/// Errors that can occur while generating a point cloud or camera path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhyllotaxisError {
    /// A generation parameter failed validation
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// Requested preset does not exist
    #[error("preset not found: {0}")]
    NotFound(String),
    /// Generation produced a value that cannot be rendered (NaN or infinity)
    #[error("internal computation error: {0}")]
    InternalComputation(String),
}

impl PhyllotaxisError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PhyllotaxisError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the rejected field, if this is a parameter error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PhyllotaxisError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, PhyllotaxisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_names_field() {
        let err = PhyllotaxisError::invalid("radius", "must be positive (got 0)");
        assert_eq!(err.field(), Some("radius"));
        assert_eq!(
            err.to_string(),
            "invalid parameter `radius`: must be positive (got 0)"
        );
    }

    #[test]
    fn test_other_kinds_have_no_field() {
        assert_eq!(PhyllotaxisError::NotFound("x".into()).field(), None);
        assert_eq!(
            PhyllotaxisError::InternalComputation("nan".into()).to_string(),
            "internal computation error: nan"
        );
    }
}
