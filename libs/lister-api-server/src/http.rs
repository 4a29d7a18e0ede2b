use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use lister_engine::{Bound, ListError, Listing};

use super::AppState;

// ═══════════════════════════════════════════════════════════════
//  REST: GET /api/records?limit=
// ═══════════════════════════════════════════════════════════════

#[derive(Deserialize)]
pub(crate) struct ListParams {
    limit: Option<i64>,
}

#[derive(Serialize)]
struct ListingBody<'a> {
    bound: usize,
    count: usize,
    records: &'a Listing,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub(crate) async fn handle_list_records(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let bound = match params.limit {
        Some(limit) => match Bound::new(limit) {
            Ok(bound) => bound,
            Err(e) => return error_response(&e),
        },
        None => state.default_bound,
    };
    let bound = match state.max_bound {
        Some(max) => bound.clamp_to(max),
        None => bound,
    };

    match state.lister.list_within(bound).await {
        Ok(listing) => axum::Json(ListingBody {
            bound: bound.get(),
            count: listing.len(),
            records: &listing,
        })
        .into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &ListError) -> Response {
    let status = match err {
        ListError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        ListError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, axum::Json(ErrorBody { error: err.to_string() })).into_response()
}

// ═══════════════════════════════════════════════════════════════
//  GET /health
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_health() -> &'static str {
    "ok"
}
