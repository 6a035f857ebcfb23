//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! find_by_id("unknown") → StoreError::NotFound → ApiError (404) → client
//! ```

use thiserror::Error;

/// Score store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No score was ever saved under this identifier.
    #[error("score not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
