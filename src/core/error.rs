//! Error types for certext.

use thiserror::Error;

/// Errors raised by extension records, collections and the registry seam.
///
/// A search that finds nothing is not an error: lookups return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// A required handle or value was not supplied.
    #[error("required argument is missing: {0}")]
    NullArgument(&'static str),

    /// A symbolic name did not resolve to an object identifier.
    #[error("unknown extension identifier: {0}")]
    UnknownIdentifier(String),

    /// Resource exhaustion while duplicating, creating or inserting.
    #[error("allocation failure: {0}")]
    AllocationFailure(&'static str),

    /// A dotted-decimal object identifier could not be parsed.
    #[error("invalid object identifier: {0}")]
    InvalidIdentifier(String),
}

impl From<std::collections::TryReserveError> for ExtensionError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::AllocationFailure("buffer reservation failed")
    }
}

/// Result alias used throughout certext.
pub type ExtensionResult<T> = Result<T, ExtensionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtensionError::UnknownIdentifier("bogusExt".into());
        assert_eq!(err.to_string(), "unknown extension identifier: bogusExt");

        let err = ExtensionError::NullArgument("collection handle");
        assert_eq!(err.to_string(), "required argument is missing: collection handle");
    }

    #[test]
    fn test_try_reserve_maps_to_allocation_failure() {
        let mut buf: Vec<u8> = Vec::new();
        let reserve_err = buf.try_reserve(usize::MAX).unwrap_err();
        let err = ExtensionError::from(reserve_err);
        assert!(matches!(err, ExtensionError::AllocationFailure(_)));
    }
}
