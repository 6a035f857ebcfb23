//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  ingest  ┌─────────────────┐  score  ┌─────────┐  │
//! │  │  RawSubmission  │ ───────► │     Receipt     │ ──────► │ Points  │  │
//! │  │  ─────────────  │          │  ─────────────  │         └────┬────┘  │
//! │  │  retailer?      │          │  retailer       │              │ save  │
//! │  │  purchaseDate?  │          │  purchased_at   │              ▼       │
//! │  │  purchaseTime?  │          │  total (Money)  │      ┌─────────────┐ │
//! │  │  total?         │          │  items (≥ 1)    │      │ ScoreResult │ │
//! │  │  items?         │          └─────────────────┘      │  id, points │ │
//! │  └─────────────────┘                                   └─────────────┘ │
//! │                                                                         │
//! │  RawSubmission and Receipt live for one ingestion call.                │
//! │  ScoreResult lives as long as the process.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A point total. Never negative.
pub type Points = u64;

// =============================================================================
// Raw Submission
// =============================================================================

/// A receipt exactly as submitted: every field is an optional string.
///
/// Required-ness is enforced by [`crate::validation::validate_submission`],
/// not by deserialization, so a missing field surfaces as a
/// `ValidationError` rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,

    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,

    /// 24-hour clock, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,

    /// Decimal amount, e.g. `"35.35"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawItem>>,
}

/// One purchased line as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl RawItem {
    /// Convenience constructor for a fully populated item.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        RawItem {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A validated, typed receipt ready for scoring.
///
/// ## Invariants
/// - `retailer` is non-empty
/// - `total` and every item price are non-negative
/// - `items` has at least one entry
///
/// Only [`crate::parse::ingest`] builds these from untrusted input, so the
/// scoring engine never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    /// Purchase date and time combined, no timezone.
    pub purchased_at: NaiveDateTime,
    pub total: Money,
    pub items: Vec<Item>,
}

/// A typed receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Kept exactly as submitted; rules trim it themselves.
    pub short_description: String,
    pub price: Money,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Money) -> Self {
        Item {
            short_description: short_description.into(),
            price,
        }
    }
}

// =============================================================================
// Score Result
// =============================================================================

/// A stored score: the identifier handed back to the caller and the points
/// computed for its receipt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub id: String,
    pub points: Points,
}

// =============================================================================
// Unit Tests
// =============================================================================
