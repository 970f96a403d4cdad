/*
[INPUT]:  Owning account's private client and a pair or pool name
[OUTPUT]: Per-pair trading helpers and per-pool swap helpers
[POS]:    Registry layer - market and pool handles
[UPDATE]: When adding helpers that delegate to the private client
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{PrivateClient, Result};
use crate::types::{ActiveOrdersResponse, NewOrderRequest, NewOrderResponse, Side};

/// Trading helpers bound to one pair of one account
#[derive(Debug, Clone)]
pub struct Market {
    client: PrivateClient,
    pair: String,
}

impl Market {
    pub(crate) fn new(client: PrivateClient, pair: impl Into<String>) -> Self {
        Self {
            client,
            pair: pair.into(),
        }
    }

    pub fn pair(&self) -> &str {
        &self.pair
    }

    pub async fn active_orders(&self) -> Result<ActiveOrdersResponse> {
        self.client.active_orders(&self.pair).await
    }

    pub async fn buy(&self, rate: Decimal, amount: Decimal) -> Result<NewOrderResponse> {
        self.place(Side::Buy, rate, amount).await
    }

    pub async fn sell(&self, rate: Decimal, amount: Decimal) -> Result<NewOrderResponse> {
        self.place(Side::Sell, rate, amount).await
    }

    async fn place(&self, side: Side, rate: Decimal, amount: Decimal) -> Result<NewOrderResponse> {
        let request = NewOrderRequest::new(self.pair.as_str(), side, rate, amount);
        self.client.trade(&request).await
    }
}

/// Swap helpers bound to one liquidity pool of one account
#[derive(Debug, Clone)]
pub struct Pool {
    client: PrivateClient,
    pool: String,
}

impl Pool {
    pub(crate) fn new(client: PrivateClient, pool: impl Into<String>) -> Self {
        Self {
            client,
            pool: pool.into(),
        }
    }

    pub fn pool(&self) -> &str {
        &self.pool
    }

    pub async fn swap_info(&self, currency: &str, amount: Decimal) -> Result<Value> {
        self.client.swap_info(&self.pool, currency, amount).await
    }

    pub async fn swap(&self, currency: &str, amount: Decimal) -> Result<Value> {
        self.client.swap(&self.pool, currency, amount).await
    }
}
