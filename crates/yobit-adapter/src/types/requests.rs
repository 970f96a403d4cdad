/*
[INPUT]:  Caller-side order, history and withdrawal parameters
[OUTPUT]: Typed request structs that write themselves into form parameters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Side, SortOrder};
use crate::http::FormParams;

/// Limit order for the `Trade` method
///
/// `rate` and `amount` are optional at the type level so that incomplete orders
/// are rejected locally with a validation error instead of reaching the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub pair: String,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl NewOrderRequest {
    pub fn new(pair: impl Into<String>, side: Side, rate: Decimal, amount: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side,
            rate: Some(rate),
            amount: Some(amount),
        }
    }

    pub fn buy(pair: impl Into<String>, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, Side::Buy, rate, amount)
    }

    pub fn sell(pair: impl Into<String>, rate: Decimal, amount: Decimal) -> Self {
        Self::new(pair, Side::Sell, rate, amount)
    }

    pub(crate) const REQUIRED: &'static [&'static str] = &["pair", "type", "rate", "amount"];

    pub(crate) fn write_params(&self, params: &mut FormParams) {
        params.set("pair", self.pair.as_str());
        params.set("type", self.side.as_str());
        params.set_opt("rate", self.rate.map(|rate| rate.to_string()));
        params.set_opt("amount", self.amount.map(|amount| amount.to_string()));
    }
}

/// Filters for the `TradeHistory` method; unset fields use exchange defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeHistoryRequest {
    pub pair: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl TradeHistoryRequest {
    pub fn for_pair(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            ..Self::default()
        }
    }

    pub(crate) const REQUIRED: &'static [&'static str] = &["pair"];

    pub(crate) fn write_params(&self, params: &mut FormParams) {
        params.set_opt("from", self.from.map(|v| v.to_string()));
        params.set_opt("count", self.count.map(|v| v.to_string()));
        params.set_opt("from_id", self.from_id.map(|v| v.to_string()));
        params.set_opt("end_id", self.end_id.map(|v| v.to_string()));
        params.set_opt("order", self.order.map(|v| v.as_str()));
        params.set_opt("since", self.since.map(|v| v.to_string()));
        params.set_opt("end", self.end.map(|v| v.to_string()));
        params.set("pair", self.pair.as_str());
    }
}

/// Withdrawal for the `WithdrawCoinsToAddress` method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub coin: String,
    pub amount: Decimal,
    pub address: String,
}

impl WithdrawRequest {
    pub(crate) const REQUIRED: &'static [&'static str] = &["coinName", "amount", "address"];

    pub(crate) fn write_params(&self, params: &mut FormParams) {
        params.set("coinName", self.coin.as_str());
        params.set("amount", self.amount.to_string());
        params.set("address", self.address.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_params() {
        let mut params = FormParams::new();
        NewOrderRequest::buy("ltc_btc", dec!(0.0035), dec!(2.5)).write_params(&mut params);

        assert_eq!(params.encode(), "pair=ltc_btc&type=buy&rate=0.0035&amount=2.5");
        assert_eq!(params.missing(NewOrderRequest::REQUIRED), None);
    }

    #[test]
    fn test_new_order_without_rate_is_incomplete() {
        let request = NewOrderRequest {
            pair: "btc_usd".to_string(),
            side: Side::Buy,
            rate: None,
            amount: Some(dec!(1)),
        };
        let mut params = FormParams::new();
        request.write_params(&mut params);

        assert_eq!(params.missing(NewOrderRequest::REQUIRED), Some("rate"));
    }

    #[test]
    fn test_trade_history_skips_unset_filters() {
        let request = TradeHistoryRequest {
            count: Some(100),
            order: Some(SortOrder::Asc),
            ..TradeHistoryRequest::for_pair("doge_btc")
        };
        let mut params = FormParams::new();
        request.write_params(&mut params);

        assert_eq!(params.encode(), "count=100&order=ASC&pair=doge_btc");
    }

    #[test]
    fn test_withdraw_params() {
        let request = WithdrawRequest {
            coin: "btc".to_string(),
            amount: dec!(0.01),
            address: "1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string(),
        };
        let mut params = FormParams::new();
        request.write_params(&mut params);

        assert_eq!(
            params.encode(),
            "coinName=btc&amount=0.01&address=1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        );
    }
}
