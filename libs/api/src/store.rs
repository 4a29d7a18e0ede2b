use std::future::Future;
use std::pin::Pin;

use crate::error::StoreError;
use crate::record::Record;

/// Read side of an already-initialized record store.
///
/// The listing layer never enumerates concrete backends: memory, file and
/// anything else plug in behind this trait. Lifecycle (creation,
/// connection, teardown) belongs to whoever constructed the store.
pub trait RecordStore: Send + Sync {
    /// Return up to `limit` records in the store's natural order.
    ///
    /// Must not mutate the store. Returning fewer than `limit` records
    /// means the store holds fewer.
    fn fetch(&self, limit: usize) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>>;

    /// Short backend name for logs.
    fn name(&self) -> &str {
        "store"
    }
}
