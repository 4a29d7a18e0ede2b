use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::io::AsyncBufReadExt;

use lister_api::{Record, RecordStore, StoreError};

// ════════════════════════════════════════════════════════════════
//  JsonlStore
// ════════════════════════════════════════════════════════════════

/// Read-only store over a JSON-lines file. Natural order is line order.
///
/// The file is opened on every fetch, so edits made by whoever owns the
/// file are visible to the next call.
#[derive(Clone, Debug)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn do_fetch(&self, limit: usize) -> Result<Vec<Record>, StoreError> {
        let f = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| StoreError::io(format!("open {}: {e}", self.path.display())))?;
        let mut lines = tokio::io::BufReader::new(f).lines();

        let mut result = Vec::with_capacity(limit.min(1024));
        let mut line_no = 0usize;
        while result.len() < limit {
            let Some(line) = lines
                .next_line()
                .await
                .map_err(|e| StoreError::io(format!("read {}: {e}", self.path.display())))?
            else {
                break;
            };
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(&line)
                .map_err(|e| StoreError::format_err(format!("{}:{line_no}: {e}", self.path.display())))?;
            result.push(record);
        }

        Ok(result)
    }
}

impl RecordStore for JsonlStore {
    fn fetch(&self, limit: usize) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, StoreError>> + Send + '_>> {
        Box::pin(self.do_fetch(limit))
    }

    fn name(&self) -> &str {
        "file"
    }
}
