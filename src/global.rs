use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;

pub struct Global {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("finance-digest/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .context("http client")?;

        Ok(Arc::new(Self {
            config,
            http_client,
            started_at: std::time::Instant::now(),
        }))
    }
}
