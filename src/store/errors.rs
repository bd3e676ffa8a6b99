//! # Store Errors
//!
//! The store is purely in-memory, so the only non-success outcome is a
//! lookup against an id that holds no record. It is an expected result,
//! never a fault.

use thiserror::Error;

/// Result type for store operations that require a record to exist
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record is stored under the given id
    #[error("No record with id '{0}'")]
    NotFound(String),
}

impl StoreError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "TODOKV_STORE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let err = StoreError::NotFound("42".to_string());
        assert_eq!(err.to_string(), "No record with id '42'");
        assert_eq!(err.code(), "TODOKV_STORE_NOT_FOUND");
    }
}
