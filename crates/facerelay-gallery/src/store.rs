//! Local train-record lookup.
//!
//! The aggregation service keeps a relational record of every training
//! sample, including the remote asset id the sample was uploaded as. The
//! remove path consults that store to know which backend assets to delete.
//! The store itself is owned by the aggregator; the adapter sees it through
//! this trait.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use thiserror::Error;

use crate::error::GalleryError;

/// Train-store lookup failure.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<StoreError> for GalleryError {
    fn from(e: StoreError) -> Self {
        GalleryError::Store(e.to_string())
    }
}

/// Lookup of remote asset ids recorded by prior training calls.
#[async_trait]
pub trait TrainStore: Send + Sync {
    /// Remote asset ids for the given local file ids.
    ///
    /// An empty slice selects every stored record. Records whose metadata
    /// carries no asset id yield `None`; unknown file ids yield nothing.
    async fn trained_asset_ids(&self, file_ids: &[i64])
        -> Result<Vec<Option<String>>, StoreError>;
}

/// In-memory train store for tests and small deployments.
#[derive(Debug, Default)]
pub struct MemoryTrainStore {
    records: Mutex<BTreeMap<i64, Option<String>>>,
}

impl MemoryTrainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a training sample's remote asset id.
    pub fn insert(&self, file_id: i64, asset_id: Option<String>) {
        self.lock().insert(file_id, asset_id);
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<i64, Option<String>>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TrainStore for MemoryTrainStore {
    async fn trained_asset_ids(
        &self,
        file_ids: &[i64],
    ) -> Result<Vec<Option<String>>, StoreError> {
        let records = self.lock();
        let ids = if file_ids.is_empty() {
            records.values().cloned().collect()
        } else {
            file_ids
                .iter()
                .filter_map(|id| records.get(id).cloned())
                .collect()
        };
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_selection_returns_all() {
        let store = MemoryTrainStore::new();
        store.insert(1, Some("asset-1".to_string()));
        store.insert(2, None);
        store.insert(3, Some("asset-3".to_string()));

        let ids = store.trained_asset_ids(&[]).await.unwrap();
        assert_eq!(
            ids,
            vec![
                Some("asset-1".to_string()),
                None,
                Some("asset-3".to_string())
            ]
        );
    }

    #[test]
    fn test_specific_selection_skips_unknown_ids() {
        let store = MemoryTrainStore::new();
        store.insert(1, Some("asset-1".to_string()));

        let ids = tokio_test::block_on(store.trained_asset_ids(&[1, 99])).unwrap();
        assert_eq!(ids, vec![Some("asset-1".to_string())]);
    }
}
