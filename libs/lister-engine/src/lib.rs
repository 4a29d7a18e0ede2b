pub mod bound;
pub mod error;

use std::sync::Arc;

use serde::Serialize;

use lister_api::{Record, RecordStore};

pub use bound::Bound;
pub use error::ListError;

// ═══════════════════════════════════════════════════════════════
//  Listing
// ═══════════════════════════════════════════════════════════════

/// Ordered, size-bounded snapshot produced by one `list` call.
///
/// Owned by the caller; holds no reference back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Listing {
    records: Vec<Record>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl IntoIterator for Listing {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ═══════════════════════════════════════════════════════════════
//  BoundedLister
// ═══════════════════════════════════════════════════════════════

/// Read-only, size-bounded view over a record store.
///
/// Holds only a shared handle to the store, so one lister can serve any
/// number of concurrent callers. Consistency between calls is whatever the
/// store provides.
#[derive(Clone)]
pub struct BoundedLister {
    store: Arc<dyn RecordStore>,
}

impl BoundedLister {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// List at most `bound` records in store order.
    ///
    /// Fails with `InvalidArgument` when `bound` is zero or negative and
    /// with `StoreUnavailable` when the store cannot be queried.
    pub async fn list(&self, bound: i64) -> Result<Listing, ListError> {
        let bound = Bound::new(bound)?;
        self.list_within(bound).await
    }

    /// Same as [`list`](Self::list) for an already validated bound.
    pub async fn list_within(&self, bound: Bound) -> Result<Listing, ListError> {
        let limit = bound.get();
        let mut records = match self.store.fetch(limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(store = %self.store.name(), bound = limit, error = %e, "store fetch failed");
                return Err(ListError::StoreUnavailable(e));
            }
        };

        // A store returning more than asked must not break the bound.
        records.truncate(limit);

        tracing::debug!(store = %self.store.name(), bound = limit, returned = records.len(), "listed records");
        Ok(Listing { records })
    }
}
