use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use lister_engine::Bound;
use store_file::FileStoreConfig;
use store_memory::MemoryStoreConfig;

use crate::error::ServerError;

#[derive(Parser)]
#[command(name = "lister-server", about = "Bounded read-only record listing over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml", env = "CONFIG_PATH")]
    pub config: String,
}

// ---- TOML Config ----

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Bound used when a request does not pass `limit`.
    #[serde(default = "default_bound")]
    pub default_bound: i64,
    /// Ceiling applied to requested bounds.
    #[serde(default)]
    pub max_bound: Option<i64>,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    Memory(MemoryStoreConfig),
    File(FileStoreConfig),
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Memory(_) => "memory",
            StoreConfig::File(_) => "file",
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}
fn default_api_port() -> u16 {
    9200
}
fn default_bound() -> i64 {
    5
}

impl ServerConfig {
    pub fn load(path: &str) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|e| ServerError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.api_port)
    }

    /// Validated `(default_bound, max_bound)`.
    pub fn bounds(&self) -> Result<(Bound, Option<Bound>), ServerError> {
        let invalid = |field: &str, e| ServerError::Config { context: "validate", detail: format!("{field}: {e}") };
        let default = Bound::new(self.default_bound).map_err(|e| invalid("default_bound", e))?;
        let max = self
            .max_bound
            .map(Bound::new)
            .transpose()
            .map_err(|e| invalid("max_bound", e))?;
        Ok((default, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_with_defaults() {
        let config = ServerConfig::parse(
            r#"
            [store]
            kind = "file"
            path = "members.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_addr(), "0.0.0.0:9200");
        let (default, max) = config.bounds().unwrap();
        assert_eq!(default.get(), 5);
        assert!(max.is_none());
        match config.store {
            StoreConfig::File(file) => assert_eq!(file.path, "members.jsonl"),
            other => panic!("expected file store, got {}", other.kind()),
        }
    }

    #[test]
    fn memory_store_with_seed_records() {
        let config = ServerConfig::parse(
            r#"
            api_port = 8080
            default_bound = 3
            max_bound = 50

            [store]
            kind = "memory"
            max_records = 10

            [[store.records]]
            key = "ada"
            value = { name = "Ada" }

            [[store.records]]
            key = "bob"
            "#,
        )
        .unwrap();

        let (default, max) = config.bounds().unwrap();
        assert_eq!(default.get(), 3);
        assert_eq!(max.map(|m| m.get()), Some(50));
        match config.store {
            StoreConfig::Memory(mem) => {
                assert_eq!(mem.max_records, 10);
                assert_eq!(mem.records.len(), 2);
                assert_eq!(mem.records[0].value["name"], "Ada");
            }
            other => panic!("expected memory store, got {}", other.kind()),
        }
    }

    #[test]
    fn unknown_store_kind_is_rejected() {
        let err = ServerConfig::parse(
            r#"
            [store]
            kind = "postgres"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn non_positive_default_bound_fails_validation() {
        let config = ServerConfig::parse(
            r#"
            default_bound = 0
            [store]
            kind = "memory"
            "#,
        )
        .unwrap();

        let err = config.bounds().unwrap_err();
        assert!(matches!(err, ServerError::Config { context: "validate", .. }));
        assert!(err.to_string().contains("default_bound"));
    }
}
