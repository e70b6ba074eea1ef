//! Receipt processing pipeline
//!
//! Submission runs validate → normalize → score → issue ID → store.
//! Every stage except storage works on values owned by the caller, so
//! concurrent submissions only meet at the [`ScoreStore`] lock.

use receipt_common::{
    PointsBreakdown, ReceiptNormalizer, ReceiptValidator, ReceiptWire, Result,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::storage::ScoreStore;

/// Issue a new opaque receipt ID
pub fn new_receipt_id() -> String {
    Uuid::new_v4().to_string()
}

/// Scores receipts and remembers the result under a fresh ID
#[derive(Debug, Default)]
pub struct ReceiptProcessor {
    store: ScoreStore,
}

impl ReceiptProcessor {
    pub fn new(store: ScoreStore) -> Self {
        Self { store }
    }

    /// Score a submitted receipt and return its new ID
    pub async fn process(&self, wire: &ReceiptWire) -> Result<String> {
        if let Err(err) = ReceiptValidator::check(wire) {
            warn!("Rejected receipt from '{}': {}", wire.retailer, err);
            return Err(err);
        }

        let receipt = ReceiptNormalizer::normalize(wire).map_err(|err| {
            warn!("Failed to normalize receipt from '{}': {}", wire.retailer, err);
            err
        })?;

        let breakdown = PointsBreakdown::for_receipt(&receipt);
        debug!("Points breakdown for '{}': {:?}", receipt.retailer, breakdown);
        let points = breakdown.total();

        // Issued IDs are never reused
        let mut id = new_receipt_id();
        while !self.store.put(id.clone(), points).await {
            id = new_receipt_id();
        }

        info!("Processed receipt {} worth {} points", id, points);
        Ok(id)
    }

    /// Points previously awarded to `id`, if it was ever issued
    pub async fn points(&self, id: &str) -> Option<u64> {
        let points = self.store.get(id).await;
        if points.is_none() {
            debug!("Receipt ID not found: {}", id);
        }
        points
    }

    /// Number of receipts processed so far
    pub async fn receipt_count(&self) -> usize {
        self.store.len().await
    }
}
