/*
[INPUT]:  Order requests and order identifiers
[OUTPUT]: Order responses and confirmation
[POS]:    HTTP layer - trading endpoints (require API key + signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{Params, Result, WazirxClient};
use crate::types::{AllOrdersQuery, NewOrderRequest};

impl WazirxClient {
    /// Place a new order
    ///
    /// POST /v1/order
    pub async fn create_order(&self, req: &NewOrderRequest) -> Result<Value> {
        let params = self.with_request_window(Params::from(req));
        self.call("create_order", Some(&params)).await
    }

    /// Validate an order without placing it
    ///
    /// POST /v1/order/test
    pub async fn test_order(&self, req: &NewOrderRequest) -> Result<Value> {
        let params = self.with_request_window(Params::from(req));
        self.call("test_order", Some(&params)).await
    }

    /// Query one order
    ///
    /// GET /v1/order?symbol={symbol}&orderId={order_id}
    pub async fn query_order(&self, symbol: &str, order_id: i64) -> Result<Value> {
        let params = Params::new().with("symbol", symbol).with("orderId", order_id);
        let params = self.with_request_window(params);
        self.call("query_order", Some(&params)).await
    }

    /// Open orders, optionally for one symbol
    ///
    /// GET /v1/openOrders
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Value> {
        let params = self.with_request_window(Params::new().with_opt("symbol", symbol));
        self.call("open_orders", Some(&params)).await
    }

    /// Order history for a symbol
    ///
    /// GET /v1/allOrders
    pub async fn all_orders(&self, query: &AllOrdersQuery) -> Result<Value> {
        let params = self.with_request_window(Params::from(query));
        self.call("all_orders", Some(&params)).await
    }

    /// Cancel an order
    ///
    /// DELETE /v1/order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Value> {
        let params = Params::new().with("symbol", symbol).with("orderId", order_id);
        let params = self.with_request_window(params);
        self.call("cancel_order", Some(&params)).await
    }

    /// Cancel every open order on a symbol
    ///
    /// DELETE /v1/openOrders
    pub async fn cancel_open_orders(&self, symbol: &str) -> Result<Value> {
        let params = self.with_request_window(Params::new().with("symbol", symbol));
        self.call("cancel_open_orders", Some(&params)).await
    }
}
