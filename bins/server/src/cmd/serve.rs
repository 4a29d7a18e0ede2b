use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::{ServeArgs, ServerConfig, StoreConfig};
use crate::error::ServerError;
use lister_api::RecordStore;
use lister_engine::BoundedLister;
use store_file::JsonlStore;
use store_memory::MemoryStore;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("lister-server starting");

    // --- Load config ---
    let config = ServerConfig::load(&args.config)?;
    let (default_bound, max_bound) = config.bounds()?;
    let addr = config.api_addr();
    tracing::info!(config = %args.config, addr = %addr, "loaded config");

    // --- Open store ---
    let store_kind = config.store.kind();
    let store = open_store(config.store)?;
    tracing::info!(
        store = store_kind,
        default_bound = %default_bound,
        max_bound = ?max_bound.map(|b| b.get()),
        "store ready"
    );

    let lister = BoundedLister::new(store);
    let app = lister_api_server::router(lister, default_bound, max_bound);

    // --- API server ---
    let token = CancellationToken::new();
    let api_token = token.clone();
    let mut api_handle = tokio::spawn(async move { lister_api_server::run(&addr, app, api_token).await });

    tracing::info!("server ready");

    // --- Wait for Ctrl+C, or the API dying on its own ---
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("shutting down...");
        }
        res = &mut api_handle => {
            return match res {
                Ok(result) => result.map_err(ServerError::from),
                Err(e) => Err(ServerError::Task(e)),
            };
        }
    }

    token.cancel();

    match tokio::time::timeout(SHUTDOWN_GRACE, &mut api_handle).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => tracing::error!(error = %e, "api task panicked"),
        Err(_) => {
            tracing::warn!("api did not drain in time, aborting");
            api_handle.abort();
        }
    }

    tracing::info!("shutdown complete");
    Ok(())
}

fn open_store(config: StoreConfig) -> Result<Arc<dyn RecordStore>, ServerError> {
    let store: Arc<dyn RecordStore> = match config {
        StoreConfig::Memory(cfg) => Arc::new(MemoryStore::from_config(cfg)?),
        StoreConfig::File(cfg) => {
            let store = JsonlStore::from(cfg);
            if !store.path().exists() {
                tracing::warn!(path = %store.path().display(), "store file does not exist yet");
            }
            Arc::new(store)
        }
    };
    Ok(store)
}
