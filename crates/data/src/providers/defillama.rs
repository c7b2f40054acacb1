use super::{DEFAULT_TIMEOUT, YieldDataProvider};
use crate::error::{DataError, Result};
use async_trait::async_trait;
use lp_wealth_domain::entities::{LendBorrowRow, YieldPool, YieldPoint};
use serde::Deserialize;
use tracing::{debug, info};

/// Public DefiLlama yields API.
pub const DEFILLAMA_BASE_URL: &str = "https://yields.llama.fi";

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// DefiLlama yields API client.
#[derive(Debug, Clone)]
pub struct DefiLlamaProvider {
    base_url: String,
    client: reqwest::Client,
}

impl DefiLlamaProvider {
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

    /// Returns the body on 2xx, `None` on any other status.
    async fn get_optional(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "no data");
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl YieldDataProvider for DefiLlamaProvider {
    async fn pools(&self) -> Result<Vec<YieldPool>> {
        let url = format!("{}/pools", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let pools = parse_pools(&response.text().await?)?;
        info!(count = pools.len(), "fetched yield pools");
        Ok(pools)
    }

    async fn pool_history(&self, pool_id: &str) -> Result<Option<Vec<YieldPoint>>> {
        let url = format!("{}/chart/{}", self.base_url, pool_id);
        match self.get_optional(&url).await? {
            Some(body) => {
                let history = parse_chart(&body)?;
                info!(pool = pool_id, points = history.len(), "fetched pool history");
                Ok(Some(history))
            }
            None => Ok(None),
        }
    }

    async fn lend_borrow(&self) -> Result<Option<Vec<LendBorrowRow>>> {
        let url = format!("{}/lendBorrow", self.base_url);
        self.get_optional(&url)
            .await?
            .map(|body| parse_lend_borrow(&body))
            .transpose()
    }
}

/// Parses a `/pools` response body.
///
/// # Errors
/// Returns an error if the body is not the expected JSON envelope.
pub fn parse_pools(body: &str) -> Result<Vec<YieldPool>> {
    let envelope: DataEnvelope<Vec<YieldPool>> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Parses a `/chart/{pool}` response body.
///
/// # Errors
/// Returns an error if the body is not the expected JSON envelope.
pub fn parse_chart(body: &str) -> Result<Vec<YieldPoint>> {
    let envelope: DataEnvelope<Vec<YieldPoint>> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

/// Parses a `/lendBorrow` response body (a bare JSON array).
///
/// # Errors
/// Returns an error if the body is not a JSON array of rows.
pub fn parse_lend_borrow(body: &str) -> Result<Vec<LendBorrowRow>> {
    Ok(serde_json::from_str(body)?)
}

/// First pool with exactly `project` on exactly `chain` whose symbol
/// contains `asset`.
#[must_use]
pub fn find_pool<'a>(
    pools: &'a [YieldPool],
    project: &str,
    chain: &str,
    asset: &str,
) -> Option<&'a YieldPool> {
    pools
        .iter()
        .find(|p| p.project == project && p.chain == chain && p.has_asset(asset))
}

/// Looser search used when [`find_pool`] finds nothing: pools on `chain`
/// holding `asset` whose project contains `project_hint`, ignoring case.
#[must_use]
pub fn candidate_pools<'a>(
    pools: &'a [YieldPool],
    chain: &str,
    asset: &str,
    project_hint: &str,
) -> Vec<&'a YieldPool> {
    let hint = project_hint.to_lowercase();
    pools
        .iter()
        .filter(|p| {
            p.chain == chain && p.has_asset(asset) && p.project.to_lowercase().contains(&hint)
        })
        .collect()
}
