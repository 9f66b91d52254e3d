//! Rewards Service
//!
//! Orchestrates validation, identification and scoring against an injected
//! score store.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::{identify, validate, Points, PointsBreakdown, Receipt, ReceiptId};
use crate::error::ProcessError;
use crate::ports::{ReceiptRewardsApi, ScoreStore};

/// Receipt rewards service implementation
///
/// Implements the `ReceiptRewardsApi` port using an injected store.
pub struct RewardsService<S: ScoreStore> {
    store: Arc<S>,
}

impl<S: ScoreStore> RewardsService<S> {
    /// Create a new service over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Shared handle to the underlying store
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }
}

impl<S: ScoreStore + 'static> ReceiptRewardsApi for RewardsService<S> {
    fn process(&self, receipt: Receipt) -> Result<ReceiptId, ProcessError> {
        let validated = validate(receipt).inspect_err(|e| {
            debug!(reason = %e, "[rr-01] Receipt rejected");
        })?;

        let id = identify(validated.receipt())?;

        if let Some(points) = self.store.get(&id) {
            debug!(id = %id, points, "[rr-01] Receipt already scored");
            return Ok(id);
        }

        // Nothing is stored when scoring fails, so the ID stays unknown.
        let breakdown = PointsBreakdown::for_receipt(&validated).inspect_err(|e| {
            error!(id = %id, error = %e, "[rr-01] Scoring failed after validation");
        })?;
        debug!(id = %id, ?breakdown, "[rr-01] Points breakdown");

        let points = self.store.insert_if_absent(id.clone(), breakdown.total());
        info!(id = %id, points, retailer = %validated.receipt().retailer, "[rr-01] Receipt scored");

        Ok(id)
    }

    fn points(&self, id: &ReceiptId) -> Option<Points> {
        self.store.get(id)
    }

    fn scored_count(&self) -> usize {
        self.store.len()
    }
}
