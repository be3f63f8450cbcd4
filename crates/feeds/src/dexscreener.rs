//! DexScreener REST feed for live market data.
//!
//! Replaces the simulated feed when running with `--live`. DexScreener only
//! supplies market data, so the screen fields of every record are filled
//! fail-closed; screening stays an upstream concern.

use crate::error::FeedError;
use crate::feed::TokenFeed;
use async_trait::async_trait;
use memewatch_core::TokenRecord;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEXSCREENER_SEARCH_API: &str = "https://api.dexscreener.com/latest/dex/search";
const API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "schemaVersion")]
    pub schema_version: Option<String>,
    pub pairs: Option<Vec<TokenPair>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "chainId")]
    pub chain_id: String,
    #[serde(rename = "baseToken")]
    pub base_token: BaseToken,
    #[serde(rename = "priceUsd")]
    pub price_usd: Option<String>,
    pub volume: Option<Volume>,
    pub liquidity: Option<Liquidity>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<f64>,
    pub fdv: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub h24: Option<f64>,
    pub h6: Option<f64>,
    pub h1: Option<f64>,
    pub m5: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Liquidity {
    pub usd: Option<f64>,
}

/// Live token feed backed by the DexScreener search API.
pub struct DexScreenerFeed {
    client: reqwest::Client,
    query: String,
    chain_id: String,
}

impl DexScreenerFeed {
    /// Create a feed filtered to one chain (e.g., "solana").
    pub fn new(chain_id: &str, query: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(API_TIMEOUT_SECS))
                .build()
                .expect("Failed to create DexScreener HTTP client"),
            query: query.to_string(),
            chain_id: chain_id.to_string(),
        }
    }

    /// Map API pairs onto token records.
    ///
    /// Pairs from other chains or without a usable USD price are dropped.
    /// Screen fields come back fail-closed (`TokenRecord::unscreened`).
    fn map_pairs(&self, pairs: Vec<TokenPair>) -> Vec<TokenRecord> {
        pairs
            .into_iter()
            .filter(|pair| pair.chain_id == self.chain_id)
            .filter_map(|pair| {
                let price = pair.price_usd.as_deref()?.parse::<f64>().ok()?;
                if price <= 0.0 {
                    return None;
                }
                let volume_5m = pair.volume.as_ref().and_then(|v| v.m5).unwrap_or(0.0);
                let liquidity = pair.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0);
                // marketCap is missing for some pairs; fall back to FDV
                let market_cap = pair.market_cap.or(pair.fdv).unwrap_or(0.0);

                Some(TokenRecord::unscreened(
                    &pair.base_token.symbol,
                    price,
                    volume_5m,
                    liquidity,
                    market_cap,
                ))
            })
            .collect()
    }
}

#[async_trait]
impl TokenFeed for DexScreenerFeed {
    async fn fetch(&self) -> Result<Vec<TokenRecord>, FeedError> {
        let url = format!("{}?q={}", DEXSCREENER_SEARCH_API, self.query);
        debug!(url = %url, "Fetching DexScreener pairs");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::HttpStatus(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FeedError::ParseError(e.to_string()))?;

        let pairs = body.pairs.unwrap_or_default();
        let records = self.map_pairs(pairs);
        debug!(count = records.len(), "Mapped DexScreener pairs");
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "dexscreener"
    }
}
