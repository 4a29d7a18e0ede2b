use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use tokio::sync::RwLock;

use lister_api::{Record, RecordStore, StoreError};

// ═══════════════════════════════════════════════════════════════
//  MemoryStoreConfig
// ═══════════════════════════════════════════════════════════════

fn default_max_records() -> usize {
    100_000
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MemoryStoreConfig {
    #[serde(default = "default_max_records")]
    pub max_records: usize,
    /// Records loaded at construction, in order.
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
            records: Vec::new(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  MemoryStore
// ═══════════════════════════════════════════════════════════════

/// In-memory ring buffer. Natural order is insertion order; once
/// `max_records` is reached the oldest record is evicted.
pub struct MemoryStore {
    records: RwLock<VecDeque<Record>>,
    max_records: usize,
}

impl MemoryStore {
    pub fn new(max_records: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::with_capacity(max_records.min(65536))),
            max_records,
        }
    }

    pub fn from_config(config: MemoryStoreConfig) -> Result<Self, StoreError> {
        if config.max_records == 0 {
            return Err(StoreError::config("max_records must be positive"));
        }
        let mut buf = VecDeque::with_capacity(config.max_records.min(65536));
        for record in config.records {
            push_bounded(&mut buf, record, config.max_records);
        }
        Ok(Self {
            records: RwLock::new(buf),
            max_records: config.max_records,
        })
    }

    /// Append records, evicting the oldest past capacity.
    pub async fn insert(&self, records: impl IntoIterator<Item = Record>) {
        let mut buf = self.records.write().await;
        for record in records {
            push_bounded(&mut buf, record, self.max_records);
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn push_bounded(buf: &mut VecDeque<Record>, record: Record, max_records: usize) {
    if buf.len() >= max_records {
        buf.pop_front();
    }
    buf.push_back(record);
}

impl RecordStore for MemoryStore {
    fn fetch(&self, limit: usize) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let buf = self.records.read().await;
            Ok(buf.iter().take(limit).cloned().collect())
        })
    }

    fn name(&self) -> &str {
        "memory"
    }
}
