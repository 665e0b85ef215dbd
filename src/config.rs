use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    /// Newsdata.io API key. The only setting without a usable default.
    pub api_key: String,
    pub country: String,
    pub category: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FxConfig {
    /// Currency all rates are expressed relative to.
    pub base: String,
    /// Comma-separated list of currency codes to keep from the snapshot.
    pub symbols: String,
}

impl FxConfig {
    /// Split the configured symbol list, trimming and uppercasing each
    /// entry and dropping empty ones.
    pub fn symbol_list(&self) -> Vec<String> {
        self.symbols
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    pub enabled: bool,
    pub interval_secs: u64,
    pub output_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub news: NewsConfig,
    pub fx: FxConfig,
    pub worker: WorkerConfig,
    pub api: ApiConfig,
    /// tracing env-filter directive, e.g. "info" or "finance_digest=debug".
    pub level: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .set_default("news.api_key", "")?
            .set_default("news.country", "us")?
            .set_default("news.category", "business")?
            .set_default("news.language", "en")?
            .set_default("fx.base", "USD")?
            .set_default("fx.symbols", "TWD,JPY,EUR")?
            .set_default("worker.enabled", true)?
            .set_default("worker.interval_secs", 1800)?
            .set_default("worker.output_dir", "./output")?
            .set_default("api.bind", "0.0.0.0:3000")?
            .set_default("level", "info")?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// The only validation performed at startup.
    pub fn has_api_key(&self) -> bool {
        !self.news.api_key.trim().is_empty()
    }
}
