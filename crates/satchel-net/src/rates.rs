use serde::Deserialize;

use crate::client::HttpClient;

const RATES_ENDPOINT: &str = "https://api.exchangeratesapi.io/latest";

#[derive(Debug, Default, Deserialize)]
struct RateTable {
    #[serde(default)]
    rates: Rates,
}

#[derive(Debug, Default, Deserialize)]
struct Rates {
    #[serde(rename = "GBP", default)]
    gbp: f64,
}

/// Fetches the GBP exchange rate for the given base currency.
///
/// Any request or decode failure is logged and masked by `fallback`; a
/// well-formed response without a GBP entry yields `0.0`.
pub async fn gbp_exchange_rate<C: HttpClient>(client: &C, base: &str, fallback: f64) -> f64 {
    let url = format!("{RATES_ENDPOINT}?base={base}");
    let body = match client.get_text(&url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%err, fallback, "exchange rate request failed");
            return fallback;
        }
    };
    match serde_json::from_str::<RateTable>(&body) {
        Ok(table) => table.rates.gbp,
        Err(err) => {
            tracing::warn!(%err, fallback, "exchange rate response was not valid JSON");
            fallback
        }
    }
}
