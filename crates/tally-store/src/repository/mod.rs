//! # Repository Module
//!
//! Score storage behind a trait so the orchestration layer never depends on
//! a concrete container.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ReceiptService                                                        │
//! │       │                                                                 │
//! │       │  repo.save(points) / repo.find_by_id(id)                       │
//! │       ▼                                                                 │
//! │  dyn ScoreRepository                                                   │
//! │  ├── save(&self, points) -> id                                         │
//! │  └── find_by_id(&self, id) -> ScoreResult | NotFound                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryScoreStore (memory.rs)                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - `save` never fails and always returns a fresh identifier
//! - a `find_by_id` that starts after `save` returned sees the entry
//! - entries are never updated or removed

pub mod memory;

use tally_core::{Points, ScoreResult};

use crate::error::StoreResult;

/// Identifier-keyed, append-only score storage.
///
/// Implementations must be safe to call from many request handlers at once.
pub trait ScoreRepository: Send + Sync {
    /// Stores `points` under a newly generated identifier and returns it.
    fn save(&self, points: Points) -> String;

    /// Looks up the score stored under `id`.
    fn find_by_id(&self, id: &str) -> StoreResult<ScoreResult>;

    /// Number of stored scores.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
