use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::digest::dedup;
use crate::global::Global;
use crate::http::error::ApiError;
use crate::types::ArticleRecord;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/news", get(get_news))
}

/// The deduplicated headline list, in upstream order.
#[tracing::instrument(skip(global))]
async fn get_news(
    State(global): State<Arc<Global>>,
) -> Result<Json<Vec<ArticleRecord>>, ApiError> {
    let articles =
        crate::sources::newsdata::fetch(&global.http_client, &global.config.news).await?;

    Ok(Json(dedup::dedup_articles(articles)))
}
