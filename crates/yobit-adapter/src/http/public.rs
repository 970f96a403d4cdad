/*
[INPUT]:  Pair/pool identifiers, ignore_invalid flag, result limits
[OUTPUT]: Market data (exchange info, tickers, depth, trades, pool info)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::request::{FormParams, build_path};
use crate::http::{PublicClient, Result, YobitError};
use crate::types::{DepthResponse, ExchangeInfo, TickerResponse, TradesResponse};

/// Default number of depth levels / trades returned by the exchange
pub const DEFAULT_LIMIT: u32 = 150;

/// Largest `limit` the exchange accepts
pub const MAX_LIMIT: u32 = 2000;

/// Query options shared by the market-data endpoints
///
/// `limit == 0` leaves the parameter out so the exchange default applies.
fn market_options(ignore_invalid: bool, limit: u32) -> Result<FormParams> {
    if limit > MAX_LIMIT {
        return Err(YobitError::validation(format!(
            "limit {limit} exceeds maximum {MAX_LIMIT}"
        )));
    }

    let mut options = FormParams::new();
    if ignore_invalid {
        options.set("ignore_invalid", "1");
    }
    if limit > 0 {
        options.set("limit", limit.to_string());
    }
    Ok(options)
}

impl PublicClient {
    /// Server time and the list of pairs with their trading rules
    ///
    /// GET /api/3/info
    pub async fn info(&self) -> Result<ExchangeInfo> {
        let path = build_path(self.public_path(), "info", None, &FormParams::new());
        self.get_json(&path).await
    }

    /// 24h statistics for one or more pairs (`ltc_btc-eth_btc`)
    ///
    /// GET /api/3/ticker/{pairs}?ignore_invalid=1
    pub async fn ticker(&self, pair: Option<&str>, ignore_invalid: bool) -> Result<TickerResponse> {
        let options = market_options(ignore_invalid, 0)?;
        let path = build_path(self.public_path(), "ticker", pair, &options);
        self.get_json(&path).await
    }

    /// Active orders (asks and bids) for one or more pairs
    ///
    /// GET /api/3/depth/{pairs}?ignore_invalid=1&limit={limit}
    pub async fn depth(
        &self,
        pair: Option<&str>,
        ignore_invalid: bool,
        limit: u32,
    ) -> Result<DepthResponse> {
        let options = market_options(ignore_invalid, limit)?;
        let path = build_path(self.public_path(), "depth", pair, &options);
        self.get_json(&path).await
    }

    /// Latest trades for one or more pairs
    ///
    /// GET /api/3/trades/{pairs}?ignore_invalid=1&limit={limit}
    pub async fn trades(
        &self,
        pair: Option<&str>,
        ignore_invalid: bool,
        limit: u32,
    ) -> Result<TradesResponse> {
        let options = market_options(ignore_invalid, limit)?;
        let path = build_path(self.public_path(), "trades", pair, &options);
        self.get_json(&path).await
    }

    /// Any market-data endpoint, returned as the exchange sent it
    ///
    /// Untyped counterpart of `ticker`/`depth`/`trades` for payloads the typed
    /// models do not cover. GET /api/3/{endpoint}[/{pairs}]
    pub async fn query(
        &self,
        endpoint: &str,
        pair: Option<&str>,
        ignore_invalid: bool,
        limit: u32,
    ) -> Result<Value> {
        let options = market_options(ignore_invalid, limit)?;
        let path = build_path(self.public_path(), endpoint, pair, &options);
        self.get_json(&path).await
    }

    /// Liquidity pool state, returned as the exchange sent it
    ///
    /// GET /defi/api/1/info/{pools}?ignore_invalid=1
    pub async fn pool_info(&self, pool: Option<&str>, ignore_invalid: bool) -> Result<Value> {
        let options = market_options(ignore_invalid, 0)?;
        let path = build_path(self.defi_path(), "info", pool, &options);
        self.get_json(&path).await
    }
}
