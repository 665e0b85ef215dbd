use anyhow::bail;
use finance_digest::{config::Config, global::Global, worker};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// One-shot digest generation: fetch, deduplicate, compose, write, print
/// the output path. A missing API key terminates the run with a non-zero
/// status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info"))
        .with(fmt_layer)
        .init();

    let config = Config::load()?;

    if !config.has_api_key() {
        bail!("missing NEWSDATA API key");
    }

    let global = Global::init(config)?;
    let path = worker::generate(&global).await?;

    println!("{}", path.display());

    Ok(())
}
