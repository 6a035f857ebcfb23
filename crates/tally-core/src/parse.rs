//! # Parse Module
//!
//! Turns a validated [`RawSubmission`] into a typed [`Receipt`].
//!
//! ## Pipeline
//! ```text
//! RawSubmission
//!      │
//!      ▼
//! validate_submission ──► ValidationError (nothing parsed yet)
//!      │
//!      ▼
//! "<date> <time>" ──────► ParseError::Timestamp("<date> <time>")
//!      │
//!      ▼
//! total ────────────────► ParseError::Currency(total)
//!      │
//!      ▼
//! each item price ──────► ParseError::Currency(price), no partial item list
//!      │
//!      ▼
//! Receipt
//! ```

use chrono::NaiveDateTime;

use crate::error::{CoreResult, Field, ParseError, ValidationError};
use crate::money::Money;
use crate::types::{Item, RawSubmission, Receipt};
use crate::validation::validate_submission;

/// Layout of the combined purchase timestamp: `YYYY-MM-DD HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Byte length of a timestamp in [`TIMESTAMP_FORMAT`].
const TIMESTAMP_LEN: usize = 16;

/// Validates and parses a submission into a scorable receipt.
///
/// ## Example
/// ```rust
/// use tally_core::{ingest, Money, RawItem, RawSubmission};
///
/// let raw = RawSubmission {
///     retailer: Some("Walgreens".into()),
///     purchase_date: Some("2022-01-02".into()),
///     purchase_time: Some("08:13".into()),
///     total: Some("2.65".into()),
///     items: Some(vec![
///         RawItem::new("Pepsi - 12-oz", "1.25"),
///         RawItem::new("Dasani", "1.40"),
///     ]),
/// };
///
/// let receipt = ingest(&raw).unwrap();
/// assert_eq!(receipt.total, Money::from_cents(265));
/// assert_eq!(receipt.items.len(), 2);
/// ```
pub fn ingest(raw: &RawSubmission) -> CoreResult<Receipt> {
    validate_submission(raw)?;

    let retailer = present(raw.retailer.as_deref(), Field::Retailer)?;
    let purchased_at = parse_purchase_timestamp(
        present(raw.purchase_date.as_deref(), Field::PurchaseDate)?,
        present(raw.purchase_time.as_deref(), Field::PurchaseTime)?,
    )?;
    let total = Money::parse(present(raw.total.as_deref(), Field::Total)?)?;

    let items = raw
        .items
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|item| -> CoreResult<Item> {
            let price = Money::parse(present(item.price.as_deref(), Field::Items)?)?;
            let description = present(item.short_description.as_deref(), Field::Items)?;
            Ok(Item::new(description, price))
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchased_at,
        total,
        items,
    })
}

/// Combines a purchase date and time into one timestamp.
///
/// The combined string must match `YYYY-MM-DD HH:MM` exactly: zero-padded,
/// 24-hour clock, no seconds, no offset.
pub fn parse_purchase_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, ParseError> {
    let combined = format!("{date} {time}");

    if combined.len() != TIMESTAMP_LEN {
        return Err(ParseError::Timestamp(combined));
    }

    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::Timestamp(combined))
}

/// Re-reads a field that validation has already checked.
fn present(value: Option<&str>, field: Field) -> Result<&str, ValidationError> {
    value.ok_or(ValidationError::Required { field })
}

// =============================================================================
// Unit Tests
// =============================================================================
