// ════════════════════════════════════════════════════════════════
//  Configuration
// ════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, serde::Deserialize)]
pub struct FileStoreConfig {
    /// JSON-lines file, one `{"key": ..., "value": ...}` object per line.
    pub path: String,
}
