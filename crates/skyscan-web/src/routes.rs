//! Route table and handlers.

use crate::{html, map, AppState, QueryParams, ShapeParam, Snapshot};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use skyscan_core::Projection;
use tracing::debug;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).head(head_ok))
        .route("/json", get(json_view))
        .route("/map", get(map_view))
        .route("/healthz", get(healthz))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Hosting platforms probe `/` with HEAD; answer without touching upstream.
async fn head_ok() -> StatusCode {
    StatusCode::OK
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Html<String> {
    let snap = state.snapshot(&params, Projection::Named).await;
    debug!(country = %snap.country, rows = snap.count, "rendered index");
    Html(html::page(&snap))
}

async fn json_view(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
    Query(shape): Query<ShapeParam>,
) -> Json<Snapshot> {
    let projection = shape.shape.unwrap_or_default();
    Json(state.snapshot(&params, projection).await)
}

async fn map_view(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Html<String> {
    let snap = state.snapshot(&params, Projection::Raw).await;
    Html(map::page(&snap))
}
