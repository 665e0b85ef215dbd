use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::digest::{compose, dedup};
use crate::global::Global;
use crate::http::error::ApiError;
use crate::types::Digest;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/digest", get(get_digest))
}

/// The full HTML digest, rendered on demand from fresh fetches.
///
/// Both fetches must succeed; either failure is returned with its raw
/// upstream payload instead of a partial document.
#[tracing::instrument(skip(global))]
async fn get_digest(State(global): State<Arc<Global>>) -> Result<Html<String>, ApiError> {
    let symbols = global.config.fx.symbol_list();

    let (news, fx) = tokio::join!(
        crate::sources::newsdata::fetch(&global.http_client, &global.config.news),
        crate::sources::erapi::fetch(&global.http_client, &global.config.fx.base, &symbols),
    );

    let digest = Digest {
        articles: dedup::dedup_articles(news?),
        fx: fx?,
        generated_at: chrono::Local::now(),
    };

    Ok(Html(compose::render(&digest)))
}
