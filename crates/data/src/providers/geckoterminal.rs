use super::{DEFAULT_TIMEOUT, OhlcvProvider, OhlcvRequest};
use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::DateTime;
use lp_wealth_domain::entities::PriceCandle;
use serde::Deserialize;
use tracing::info;

/// Public GeckoTerminal API.
pub const GECKOTERMINAL_BASE_URL: &str = "https://api.geckoterminal.com/api/v2";

#[derive(Debug, Deserialize)]
struct OhlcvResponse {
    data: OhlcvData,
}

#[derive(Debug, Deserialize)]
struct OhlcvData {
    attributes: OhlcvAttributes,
}

#[derive(Debug, Deserialize)]
struct OhlcvAttributes {
    /// Rows of `[ts, open, high, low, close, volume]`.
    ohlcv_list: Vec<[f64; 6]>,
}

/// GeckoTerminal pool OHLCV client.
#[derive(Debug, Clone)]
pub struct GeckoTerminalProvider {
    base_url: String,
    client: reqwest::Client,
}

impl GeckoTerminalProvider {
    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl OhlcvProvider for GeckoTerminalProvider {
    async fn fetch_ohlcv(&self, request: &OhlcvRequest) -> Result<Vec<PriceCandle>> {
        let url = format!(
            "{}/networks/{}/pools/{}/ohlcv/{}",
            self.base_url, request.network, request.pool_address, request.timeframe
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("aggregate", request.aggregate.to_string()),
                ("limit", request.limit.to_string()),
                ("currency", "usd".to_string()),
                ("token", "base".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let candles = parse_ohlcv(&response.text().await?)?;
        info!(
            network = %request.network,
            pool = %request.pool_address,
            candles = candles.len(),
            "fetched OHLCV"
        );
        Ok(candles)
    }
}

/// Parses an OHLCV response body into candles sorted oldest first.
///
/// # Errors
/// Returns an error if the body has the wrong shape or a timestamp is out of
/// range.
pub fn parse_ohlcv(body: &str) -> Result<Vec<PriceCandle>> {
    let response: OhlcvResponse = serde_json::from_str(body)?;

    let mut candles = response
        .data
        .attributes
        .ohlcv_list
        .into_iter()
        .enumerate()
        .map(|(i, [ts, open, high, low, close, volume])| -> Result<PriceCandle> {
            let timestamp =
                DateTime::from_timestamp(ts as i64, 0).ok_or_else(|| DataError::InvalidRecord {
                    line: i + 1,
                    reason: format!("timestamp {ts} out of range"),
                })?;
            Ok(PriceCandle {
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // API returns newest first
    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}
