use finance_digest::{config, global::Global, http, worker};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.level),
        )
        .init();

    tracing::info!("starting finance digest");

    if !config.has_api_key() {
        tracing::warn!("no NEWSDATA API key configured, news endpoints will fail");
    }

    let global = Global::init(config)?;

    tracing::info!("all services initialized");

    tokio::select! {
        r = http::run(global.clone()) => {
            if let Err(e) = r {
                tracing::error!("http server error: {:#}", e);
            }
        }
        r = worker::run(global.clone()) => {
            if let Err(e) = r {
                tracing::error!("worker error: {:#}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
