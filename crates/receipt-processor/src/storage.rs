//! In-memory score storage
//!
//! Scores live for the lifetime of the process. Records are insert-only:
//! there is no update, delete or expiry path.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Identifier-keyed store of computed points
#[derive(Debug, Default)]
pub struct ScoreStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl ScoreStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the points for a freshly issued receipt ID
    ///
    /// Returns `false` and keeps the existing record if `id` was already used.
    pub async fn put(&self, id: String, points: u64) -> bool {
        let mut scores = self.scores.write().await;

        match scores.entry(id) {
            Entry::Occupied(entry) => {
                warn!("Receipt ID already stored, keeping original: {}", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                debug!("Stored {} points for receipt: {}", points, entry.key());
                entry.insert(points);
                true
            }
        }
    }

    /// Look up the points for a receipt ID
    pub async fn get(&self, id: &str) -> Option<u64> {
        self.scores.read().await.get(id).copied()
    }

    /// Number of stored receipts
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}
