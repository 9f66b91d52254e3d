//! In-Memory Score Store
//!
//! Implements `ScoreStore` for the lifetime of the process. No eviction,
//! no persistence.

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::{Points, ReceiptId};
use crate::ports::outbound::ScoreStore;

/// Process-lifetime score map behind a read/write lock.
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<ReceiptId, Points>>,
}

impl InMemoryScoreStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            scores: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn insert_if_absent(&self, id: ReceiptId, points: Points) -> Points {
        let mut scores = self.scores.write();
        match scores.entry(id) {
            Entry::Occupied(existing) => {
                debug!(id = %existing.key(), "[rr-01] Score already stored, keeping first value");
                *existing.get()
            }
            Entry::Vacant(slot) => {
                debug!(id = %slot.key(), points, "[rr-01] Storing score");
                *slot.insert(points)
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.scores.read().get(id).copied()
    }

    fn contains(&self, id: &ReceiptId) -> bool {
        self.scores.read().contains_key(id)
    }

    fn len(&self) -> usize {
        self.scores.read().len()
    }
}
