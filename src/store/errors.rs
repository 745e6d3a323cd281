//! # Store Errors

use thiserror::Error;

use super::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
///
/// Create, list and clear cannot fail; only id-addressed operations can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Record {0} not found")]
    NotFound(RecordId),
}

impl StoreError {
    /// Id the failed operation addressed
    pub fn id(&self) -> RecordId {
        match self {
            StoreError::NotFound(id) => *id,
        }
    }
}
