//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It turns a submitted receipt into a
//! point score as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (tally-api)                         │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ RawSubmission                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │─►│   parse   │─►│  scoring  │  │   money   │  │   │
//! │  │   │ presence  │  │  ingest   │  │ 7 rules   │  │  micros   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Points                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tally-store (id → ScoreResult)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Raw and typed receipt models, `ScoreResult`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation and parse errors
//! - [`validation`] - Presence checks on raw submissions
//! - [`parse`] - `ingest`: validation followed by parsing
//! - [`scoring`] - The seven point rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, logging are left to the caller
//! 3. **Integer Money**: All monetary values are millionths of a unit (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{ingest, score, RawItem, RawSubmission};
//!
//! let raw = RawSubmission {
//!     retailer: Some("M&M Corner Market".into()),
//!     purchase_date: Some("2022-03-20".into()),
//!     purchase_time: Some("14:33".into()),
//!     total: Some("9.00".into()),
//!     items: Some(vec![RawItem::new("Gatorade", "2.25"); 4]),
//! };
//!
//! let receipt = ingest(&raw).unwrap();
//! assert_eq!(score(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parse;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, Field, ParseError, ValidationError};
pub use money::Money;
pub use parse::ingest;
pub use scoring::{breakdown, score, ScoreBreakdown};
pub use types::*;
