use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;
use crate::http::error::ApiError;
use crate::types::FxSnapshot;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/fx", get(get_fx))
}

/// Current rates for the configured base and symbol list.
#[tracing::instrument(skip(global))]
async fn get_fx(State(global): State<Arc<Global>>) -> Result<Json<FxSnapshot>, ApiError> {
    let symbols = global.config.fx.symbol_list();
    let snapshot =
        crate::sources::erapi::fetch(&global.http_client, &global.config.fx.base, &symbols)
            .await?;

    Ok(Json(snapshot))
}
