//! # In-Memory Score Store
//!
//! ## Locking
//! ```text
//! save(points)
//!   ├── Uuid::new_v4()            ← outside the lock
//!   ├── write lock ─┐
//!   │   insert      │  only the map mutation is guarded
//!   └───────────────┘
//!
//! find_by_id(id)
//!   ├── read lock ─┐
//!   │   get+clone  │  readers run in parallel
//!   └──────────────┘
//! ```
//!
//! A poisoned lock is recovered rather than propagated: the map is only ever
//! touched by a single `insert` or `get`, so a panic elsewhere cannot leave a
//! half-written entry behind.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::{Points, ScoreResult};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::ScoreRepository;

/// Score store that lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<String, ScoreResult>>,
}

impl InMemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryScoreStore::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ScoreResult>> {
        self.scores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ScoreResult>> {
        self.scores.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScoreRepository for InMemoryScoreStore {
    fn save(&self, points: Points) -> String {
        let id = Uuid::new_v4().to_string();
        let result = ScoreResult {
            id: id.clone(),
            points,
        };

        self.write().insert(id.clone(), result);

        debug!(id = %id, points, "Saved score");
        id
    }

    fn find_by_id(&self, id: &str) -> StoreResult<ScoreResult> {
        let found = self.read().get(id).cloned();

        found.ok_or_else(|| {
            debug!(id = %id, "Score not found");
            StoreError::not_found(id)
        })
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
