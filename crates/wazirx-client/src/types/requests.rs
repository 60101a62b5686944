/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};
use crate::http::Params;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub client_order_id: Option<String>,
}

impl NewOrderRequest {
    /// Limit order with no stop price or client id
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price,
            stop_price: None,
            client_order_id: None,
        }
    }
}

impl From<&NewOrderRequest> for Params {
    fn from(req: &NewOrderRequest) -> Self {
        Params::new()
            .with("symbol", req.symbol.as_str())
            .with("side", req.side.as_str())
            .with("type", req.order_type.as_str())
            .with("quantity", req.quantity)
            .with("price", req.price)
            .with_opt("stopPrice", req.stop_price)
            .with_opt("clientOrderId", req.client_order_id.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersQuery {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub limit: Option<u32>,
}

impl From<&AllOrdersQuery> for Params {
    fn from(query: &AllOrdersQuery) -> Self {
        Params::new()
            .with("symbol", query.symbol.as_str())
            .with_opt("orderId", query.order_id)
            .with_opt("startTime", query.start_time)
            .with_opt("endTime", query.end_time)
            .with_opt("limit", query.limit)
    }
}
