mod config;
mod storage;

pub use config::FileStoreConfig;
pub use storage::JsonlStore;

impl From<FileStoreConfig> for JsonlStore {
    fn from(config: FileStoreConfig) -> Self {
        JsonlStore::new(config.path)
    }
}
