/*
[INPUT]:  Order requests, order ids and trade history filters
[OUTPUT]: Order responses, active orders and fills
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::request::FormParams;
use crate::http::{PrivateClient, Result};
use crate::types::{
    ActiveOrdersResponse, CancelOrderResponse, NewOrderResponse, NewOrderRequest,
    OrderInfoResponse, TradeHistoryRequest, TradeHistoryResponse,
};

impl PrivateClient {
    /// Place a limit order
    ///
    /// POST /tapi/ method=Trade
    pub async fn trade(&self, req: &NewOrderRequest) -> Result<NewOrderResponse> {
        let mut fields = FormParams::new();
        req.write_params(&mut fields);
        self.call("Trade", fields, NewOrderRequest::REQUIRED).await
    }

    /// Active orders for a pair, keyed by order id
    ///
    /// POST /tapi/ method=ActiveOrders
    pub async fn active_orders(&self, pair: &str) -> Result<ActiveOrdersResponse> {
        let fields = FormParams::new().with("pair", pair);
        self.call("ActiveOrders", fields, &["pair"]).await
    }

    /// Details of one order, keyed by order id
    ///
    /// POST /tapi/ method=OrderInfo
    pub async fn order_info(&self, order_id: &str) -> Result<OrderInfoResponse> {
        let fields = FormParams::new().with("order_id", order_id);
        self.call("OrderInfo", fields, &["order_id"]).await
    }

    /// Cancel an order
    ///
    /// POST /tapi/ method=CancelOrder
    pub async fn cancel_order(&self, order_id: &str) -> Result<CancelOrderResponse> {
        let fields = FormParams::new().with("order_id", order_id);
        self.call("CancelOrder", fields, &["order_id"]).await
    }

    /// Own fills for a pair, keyed by trade id
    ///
    /// POST /tapi/ method=TradeHistory
    pub async fn trade_history(&self, req: &TradeHistoryRequest) -> Result<TradeHistoryResponse> {
        let mut fields = FormParams::new();
        req.write_params(&mut fields);
        self.call("TradeHistory", fields, TradeHistoryRequest::REQUIRED)
            .await
    }
}
