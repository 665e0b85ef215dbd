use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;

use crate::digest::{compose, dedup};
use crate::global::Global;
use crate::types::Digest;

/// Fetch both sources, deduplicate, compose, and write the digest to
/// `<output_dir>/digest.html`. Returns the written path.
///
/// Either fetch failing aborts the whole generation; there is no partial
/// digest and no retry on this path.
#[tracing::instrument(skip_all)]
pub async fn generate(global: &Arc<Global>) -> anyhow::Result<PathBuf> {
    let symbols = global.config.fx.symbol_list();

    let (news, fx) = tokio::join!(
        crate::sources::newsdata::fetch(&global.http_client, &global.config.news),
        crate::sources::erapi::fetch(&global.http_client, &global.config.fx.base, &symbols),
    );

    let articles = dedup::dedup_articles(news.context("news fetch")?);
    let fx = fx.context("fx fetch")?;

    let digest = Digest {
        articles,
        fx,
        generated_at: chrono::Local::now(),
    };
    let html = compose::render(&digest);

    let dir = PathBuf::from(&global.config.worker.output_dir);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("creating output dir {}", dir.display()))?;

    let path = dir.join("digest.html");
    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(
        articles = digest.articles.len(),
        rates = digest.fx.rates.len(),
        path = %path.display(),
        "digest written"
    );

    Ok(path)
}

/// Sleep until the next tick aligned to the wall clock, so a 30 minute
/// interval fires at :00 and :30 rather than at process-start offsets.
async fn sleep_until_aligned(interval_secs: u64) {
    let current_secs = chrono::Utc::now().timestamp() as u64;
    let next_tick = (current_secs / interval_secs + 1) * interval_secs;

    tracing::debug!(
        next_tick_in_secs = next_tick - current_secs,
        "sleeping until next aligned tick"
    );

    tokio::time::sleep(std::time::Duration::from_secs(next_tick - current_secs)).await;
}

/// Periodic digest generation. A failed tick is logged and skipped; the
/// next aligned tick starts from fresh inputs.
#[tracing::instrument(name = "Worker", skip_all)]
pub async fn run(global: Arc<Global>) -> anyhow::Result<()> {
    if !global.config.worker.enabled {
        tracing::info!("digest worker is disabled");
        // Park forever so tokio::select doesn't exit
        std::future::pending::<()>().await;
        return Ok(());
    }

    let interval_secs = global.config.worker.interval_secs.max(1);
    tracing::info!(interval_secs, "starting digest worker");

    loop {
        if let Err(e) = generate(&global).await {
            tracing::error!("digest generation failed: {e:#}");
        }

        sleep_until_aligned(interval_secs).await;
    }
}
