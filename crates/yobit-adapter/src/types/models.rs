/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Side, TradeType};
use super::serde_util::{flexible_id, flexible_timestamp};

// ### Public market data

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    #[serde(with = "flexible_timestamp")]
    pub server_time: DateTime<Utc>,
    #[serde(default)]
    pub pairs: HashMap<String, PairInfo>,
}

/// Trading rules for one pair; fields the exchange omits read as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairInfo {
    pub decimal_places: u32,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub min_amount: Decimal,
    pub min_total: Option<Decimal>,
    /// 1 when the pair is hidden from the exchange home page
    pub hidden: u8,
    pub fee: Decimal,
    pub fee_buyer: Option<Decimal>,
    pub fee_seller: Option<Decimal>,
}

/// 24h statistics for one pair; fields the exchange omits read as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticker {
    pub high: Decimal,
    pub low: Decimal,
    pub avg: Decimal,
    pub vol: Decimal,
    pub vol_cur: Decimal,
    pub last: Decimal,
    pub buy: Decimal,
    pub sell: Decimal,
    #[serde(with = "flexible_timestamp")]
    pub updated: DateTime<Utc>,
}

/// `[price, amount]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel(pub Decimal, pub Decimal);

impl DepthLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn amount(&self) -> Decimal {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(with = "flexible_id", default)]
    pub tid: u64,
    #[serde(with = "flexible_timestamp", default)]
    pub timestamp: DateTime<Utc>,
}

// ### Private account data

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiRights {
    #[serde(default)]
    pub info: u8,
    #[serde(default)]
    pub trade: u8,
    #[serde(default)]
    pub deposit: u8,
    #[serde(default)]
    pub withdraw: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
    #[serde(default)]
    pub funds_incl_orders: HashMap<String, Decimal>,
    #[serde(default)]
    pub rights: ApiRights,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub open_orders: u64,
    #[serde(with = "flexible_timestamp")]
    pub server_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub amount: Decimal,
    pub rate: Decimal,
    #[serde(with = "flexible_timestamp")]
    pub timestamp_created: DateTime<Utc>,
    #[serde(default)]
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub start_amount: Decimal,
    pub amount: Decimal,
    pub rate: Decimal,
    #[serde(with = "flexible_timestamp")]
    pub timestamp_created: DateTime<Utc>,
    /// 0 active, 1 filled, 2 cancelled, 3 partially filled then cancelled
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub amount: Decimal,
    pub rate: Decimal,
    #[serde(with = "flexible_id")]
    pub order_id: u64,
    #[serde(default)]
    pub is_your_order: u8,
    #[serde(with = "flexible_timestamp")]
    pub timestamp: DateTime<Utc>,
}
