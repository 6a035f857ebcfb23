//! # tally-store: Score Storage for Tally
//!
//! This crate keeps every computed score for the lifetime of the process and
//! resolves identifiers back to them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                                  │
//! │                                                                         │
//! │  ReceiptService::process_submission                                    │
//! │       │  ingest → score (no lock held)                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tally-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────┐        ┌─────────────────────────────┐ │   │
//! │  │   │  ScoreRepository  │◄───────│  InMemoryScoreStore         │ │   │
//! │  │   │  (trait)          │        │  RwLock<HashMap<id, score>> │ │   │
//! │  │   │  save             │        │  UUID v4 ids                │ │   │
//! │  │   │  find_by_id       │        └─────────────────────────────┘ │   │
//! │  │   └───────────────────┘                                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tally_store::{InMemoryScoreStore, ScoreRepository};
//!
//! let store = InMemoryScoreStore::new();
//! let id = store.save(28);
//! assert_eq!(store.find_by_id(&id).unwrap().points, 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::memory::InMemoryScoreStore;
pub use repository::ScoreRepository;
