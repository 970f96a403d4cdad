/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{ActiveOrder, Depth, OrderInfo, Ticker, Trade, TradeRecord};
use super::serde_util::flexible_id;

/// `{pair: Ticker}`
pub type TickerResponse = HashMap<String, Ticker>;

/// `{pair: Depth}`
pub type DepthResponse = HashMap<String, Depth>;

/// `{pair: [Trade]}`
pub type TradesResponse = HashMap<String, Vec<Trade>>;

/// `{order_id: ActiveOrder}`
pub type ActiveOrdersResponse = HashMap<String, ActiveOrder>;

/// `{order_id: OrderInfo}`
pub type OrderInfoResponse = HashMap<String, OrderInfo>;

/// `{trade_id: TradeRecord}`
pub type TradeHistoryResponse = HashMap<String, TradeRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderResponse {
    pub received: Decimal,
    pub remains: Decimal,
    /// 0 when the order was filled immediately
    #[serde(with = "flexible_id")]
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    #[serde(with = "flexible_id")]
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddressResponse {
    pub address: String,
    #[serde(default)]
    pub processed_amount: Option<Decimal>,
    #[serde(default)]
    pub server_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithdrawResponse {
    #[serde(default)]
    pub server_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCouponResponse {
    pub coupon: String,
    #[serde(with = "flexible_id")]
    pub trans_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCouponResponse {
    #[serde(rename = "couponAmount")]
    pub coupon_amount: Decimal,
    #[serde(rename = "couponCurrency")]
    pub coupon_currency: String,
    #[serde(with = "flexible_id")]
    pub trans_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}
