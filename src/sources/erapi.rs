use std::collections::BTreeMap;

use crate::error::FetchError;
use crate::types::FxSnapshot;

const FX_API: &str = "https://open.er-api.com/v6/latest";

#[derive(Debug, serde::Deserialize)]
struct RatesResponse {
    result: Option<String>,
    base_code: Option<String>,
    rates: Option<BTreeMap<String, f64>>,
    time_last_update_utc: Option<String>,
}

/// Anything other than a `result: success` body with a `rates` mapping is
/// surfaced as [`FetchError::Upstream`] with the raw payload. A requested
/// symbol absent from the mapping is reported with a per-symbol warning
/// and skipped; the remaining symbols still make it into the snapshot.
fn parse_snapshot(body: String, base: &str, symbols: &[String]) -> Result<FxSnapshot, FetchError> {
    let parsed: RatesResponse = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse er-api response");
            return Err(FetchError::Upstream { payload: body });
        }
    };

    let RatesResponse {
        result,
        base_code,
        rates: all_rates,
        time_last_update_utc,
    } = parsed;

    let all_rates = match (result.as_deref(), all_rates) {
        (Some("success"), Some(all_rates)) => all_rates,
        _ => {
            tracing::error!(payload = %body, "er-api returned a failure shape");
            return Err(FetchError::Upstream { payload: body });
        }
    };

    let mut rates = BTreeMap::new();
    for symbol in symbols {
        match all_rates.get(symbol) {
            Some(rate) => {
                rates.insert(symbol.clone(), *rate);
            }
            None => tracing::warn!(symbol = %symbol, "missing rate for requested symbol"),
        }
    }

    Ok(FxSnapshot {
        base: base_code.unwrap_or_else(|| base.to_string()),
        rates,
        last_updated: time_last_update_utc,
    })
}

/// Fetch the latest exchange rates for `base`, keeping only the requested
/// symbols.
#[tracing::instrument(skip(client, symbols))]
pub async fn fetch(
    client: &reqwest::Client,
    base: &str,
    symbols: &[String],
) -> Result<FxSnapshot, FetchError> {
    let body = client
        .get(format!("{}/{}", FX_API, base))
        .send()
        .await?
        .text()
        .await?;

    let snapshot = parse_snapshot(body, base, symbols)?;

    tracing::info!(
        base = %snapshot.base,
        requested = symbols.len(),
        resolved = snapshot.rates.len(),
        "fetched fx snapshot"
    );

    Ok(snapshot)
}
