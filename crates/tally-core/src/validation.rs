//! # Validation Module
//!
//! Presence checks for raw submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ingestion Stages                                   │
//! │                                                                         │
//! │  Stage 1: Decoding (caller)                                            │
//! │  └── JSON → RawSubmission, every field optional                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 2: THIS MODULE                                                  │
//! │  ├── Retailer → PurchaseDate → PurchaseTime → Total → Items            │
//! │  └── First failure wins: "Field: <Name>, Error: required|min"          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 3: Parsing (parse.rs)                                           │
//! │  └── Timestamp and amounts, ParseError on malformed values             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only presence is checked here. Values are not trimmed: a retailer of
//! `"   "` passes and is scored as zero alphanumeric characters.
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::validate_submission;
//! use tally_core::RawSubmission;
//!
//! let err = validate_submission(&RawSubmission::default()).unwrap_err();
//! assert_eq!(err.to_string(), "Field: Retailer, Error: required");
//! ```

use crate::error::{Field, ValidationError};
use crate::types::{RawItem, RawSubmission};

/// Minimum number of items on a receipt.
pub const MIN_ITEMS: usize = 1;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validators
// =============================================================================

/// Validates every required field of a submission, in order.
///
/// ## Rules
/// - `retailer`, `purchaseDate`, `purchaseTime`, `total`: present and non-empty
/// - `items`: present (`required`) with at least one entry (`min`)
/// - each item: non-empty `shortDescription` and `price`, reported as `Items`
pub fn validate_submission(raw: &RawSubmission) -> ValidationResult<()> {
    require(Field::Retailer, raw.retailer.as_deref())?;
    require(Field::PurchaseDate, raw.purchase_date.as_deref())?;
    require(Field::PurchaseTime, raw.purchase_time.as_deref())?;
    require(Field::Total, raw.total.as_deref())?;
    validate_items(raw.items.as_deref())
}

/// Validates the items sequence and each entry in it.
pub fn validate_items(items: Option<&[RawItem]>) -> ValidationResult<()> {
    let items = items.ok_or(ValidationError::Required { field: Field::Items })?;

    if items.len() < MIN_ITEMS {
        return Err(ValidationError::TooFew {
            field: Field::Items,
            min: MIN_ITEMS,
        });
    }

    for item in items {
        require(Field::Items, item.short_description.as_deref())?;
        require(Field::Items, item.price.as_deref())?;
    }

    Ok(())
}

/// A value is present when it exists and is not the empty string.
fn require(field: Field, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(ValidationError::Required { field }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
