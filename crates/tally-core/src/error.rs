//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Anything that stops an ingestion               │
//! │  ├── ValidationError  - Required field missing / empty items           │
//! │  └── ParseError       - Present but malformed timestamp or amount      │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Unknown score id                               │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError / ParseError → CoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value or field in the message
//! 3. Errors are enum variants, never String

use std::fmt;

use thiserror::Error;

// =============================================================================
// Field
// =============================================================================

/// Top-level fields of a raw submission, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Retailer,
    PurchaseDate,
    PurchaseTime,
    Total,
    Items,
}

impl Field {
    /// Name as reported in validation messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Retailer => "Retailer",
            Field::PurchaseDate => "PurchaseDate",
            Field::PurchaseTime => "PurchaseTime",
            Field::Total => "Total",
            Field::Items => "Items",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A submission failed a presence check.
///
/// Raised before any parsing is attempted; only the first failing field is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Field: {field}, Error: required")]
    Required { field: Field },

    /// A sequence is present but shorter than allowed.
    #[error("Field: {field}, Error: min")]
    TooFew { field: Field, min: usize },
}

impl ValidationError {
    /// The field that failed.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field } | ValidationError::TooFew { field, .. } => *field,
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// A value was present but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `"<date> <time>"` did not match `YYYY-MM-DD HH:MM`.
    #[error("error parsing timestring: {0}")]
    Timestamp(String),

    /// A total or price was not a non-negative decimal amount.
    #[error("error parsing currency string: {0}")]
    Currency(String),
}

// =============================================================================
// Core Error
// =============================================================================

/// Every way an ingestion can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
