use crate::config::NewsConfig;
use crate::error::FetchError;
use crate::types::ArticleRecord;

const NEWS_API: &str = "https://newsdata.io/api/1/news";

#[derive(Debug, serde::Deserialize)]
struct NewsResponse {
    results: Option<Vec<ArticleRecord>>,
}

/// Any body without a `results` array (error shape, non-2xx body,
/// malformed JSON) is surfaced as [`FetchError::Upstream`] carrying the
/// raw text; the caller never sees a partial article list.
fn parse_articles(body: String) -> Result<Vec<ArticleRecord>, FetchError> {
    let parsed: NewsResponse = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse newsdata response");
            return Err(FetchError::Upstream { payload: body });
        }
    };

    match parsed.results {
        Some(articles) => Ok(articles),
        None => {
            tracing::error!(payload = %body, "newsdata response has no results");
            Err(FetchError::Upstream { payload: body })
        }
    }
}

/// Fetch the latest headlines for the configured country/category.
#[tracing::instrument(skip(client, config))]
pub async fn fetch(
    client: &reqwest::Client,
    config: &NewsConfig,
) -> Result<Vec<ArticleRecord>, FetchError> {
    if config.api_key.trim().is_empty() {
        return Err(FetchError::MissingCredential);
    }

    let body = client
        .get(NEWS_API)
        .query(&[
            ("apikey", config.api_key.as_str()),
            ("country", config.country.as_str()),
            ("category", config.category.as_str()),
            ("language", config.language.as_str()),
        ])
        .send()
        .await?
        .text()
        .await?;

    let articles = parse_articles(body)?;

    tracing::info!(count = articles.len(), "fetched headlines");

    Ok(articles)
}
