/*
[INPUT]:  Pool identifiers, input currency and amount
[OUTPUT]: Swap quotes and swap results (pool schema passed through unmodified)
[POS]:    HTTP layer - liquidity pool swap endpoints (require signed requests)
[UPDATE]: When pool endpoints or their parameters change
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::request::FormParams;
use crate::http::{PrivateClient, Result};

const SWAP_REQUIRED: &[&str] = &["pool", "currency", "amount"];

fn swap_fields(pool: &str, currency: &str, amount: Decimal) -> FormParams {
    FormParams::new()
        .with("pool", pool)
        .with("currency", currency)
        .with("amount", amount.to_string())
}

impl PrivateClient {
    /// Quote for swapping `amount` of `currency` through `pool`
    ///
    /// POST /tapi/ method=DefiSwapInfo
    pub async fn swap_info(&self, pool: &str, currency: &str, amount: Decimal) -> Result<Value> {
        self.call("DefiSwapInfo", swap_fields(pool, currency, amount), SWAP_REQUIRED)
            .await
    }

    /// Swap `amount` of `currency` through `pool`
    ///
    /// POST /tapi/ method=DefiSwap
    pub async fn swap(&self, pool: &str, currency: &str, amount: Decimal) -> Result<Value> {
        self.call("DefiSwap", swap_fields(pool, currency, amount), SWAP_REQUIRED)
            .await
    }
}
