//! Inbound Ports (Driving Ports)
//!
//! The API that callers use to submit receipts and read back scores.

use crate::domain::{Points, Receipt, ReceiptId};
use crate::error::ProcessError;

/// Primary receipt rewards API (Driving Port)
pub trait ReceiptRewardsApi: Send + Sync {
    /// Validate, identify and score a receipt.
    ///
    /// Idempotent: a receipt whose ID already has a score keeps that score
    /// and is not rescored. Returns the receipt's ID.
    fn process(&self, receipt: Receipt) -> Result<ReceiptId, ProcessError>;

    /// Points previously stored for `id`, if any.
    fn points(&self, id: &ReceiptId) -> Option<Points>;

    /// Number of distinct receipts holding a score.
    fn scored_count(&self) -> usize;
}
