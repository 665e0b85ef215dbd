use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;

pub mod digest;
pub mod fx;
pub mod news;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .merge(news::routes())
        .merge(fx::routes())
        .merge(digest::routes())
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: [&'static str; 3],
}

#[tracing::instrument(skip(global))]
async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Finance News Digest API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: ["/news", "/fx", "/digest"],
    })
}
