//! Error types for the core model.

use thiserror::Error;

/// Errors produced when model types are constructed from unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more field constraints were violated at construction time.
    ///
    /// Carries every violation found, not just the first.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_issue() {
        let err = Error::Validation(vec![
            "stock length must be positive".to_string(),
            "target size 0: length must be positive".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: stock length must be positive; \
             target size 0: length must be positive"
        );
    }
}
