mod http;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use lister_engine::{Bound, BoundedLister};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bind api {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("axum serve: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
pub(crate) struct AppState {
    lister: BoundedLister,
    /// Used when a request carries no `limit`.
    default_bound: Bound,
    /// Requested bounds above this are clamped to it.
    max_bound: Option<Bound>,
}

/// HTTP presentation layer over a `BoundedLister`.
///
/// Routes:
/// - `GET /api/records?limit=N` — listing as JSON
/// - `GET /health`
pub fn router(lister: BoundedLister, default_bound: Bound, max_bound: Option<Bound>) -> Router {
    let state = AppState {
        lister,
        default_bound,
        max_bound,
    };

    Router::new()
        .route("/api/records", get(http::handle_list_records))
        .route("/health", get(http::handle_health))
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` is cancelled.
pub async fn run(addr: &str, app: Router, shutdown: CancellationToken) -> Result<(), ApiError> {
    let listener = TcpListener::bind(addr).await.map_err(|source| ApiError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    serve(listener, app, shutdown).await
}

/// Serve on an already bound listener until `shutdown` is cancelled.
pub async fn serve(listener: TcpListener, app: Router, shutdown: CancellationToken) -> Result<(), ApiError> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "api listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(ApiError::Serve)
}
