//! Outbound Ports (Driven Ports)
//!
//! Storage the scoring service depends on.

use crate::domain::{Points, ReceiptId};

/// ID -> points map (Driven Port)
///
/// Each ID moves `Unknown -> Scored` exactly once. Implementations must
/// make the check-and-insert in `insert_if_absent` atomic so concurrent
/// writers for one ID cannot leave two different scores behind.
pub trait ScoreStore: Send + Sync {
    /// Store `points` for `id` unless a score is already present.
    ///
    /// Returns the score held for `id` after the call, which is the first
    /// one ever written.
    fn insert_if_absent(&self, id: ReceiptId, points: Points) -> Points;

    /// Look up a stored score.
    fn get(&self, id: &ReceiptId) -> Option<Points>;

    /// Whether `id` has been scored.
    fn contains(&self, id: &ReceiptId) -> bool {
        self.get(id).is_some()
    }

    /// Number of scored receipts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
