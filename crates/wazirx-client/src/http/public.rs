/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (status, tickers, depth, trades)
[POS]:    HTTP layer - public market data endpoints (no signature required)
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{Params, Result, WazirxClient};

impl WazirxClient {
    /// Test connectivity
    ///
    /// GET /v1/ping
    pub async fn ping(&self) -> Result<Value> {
        self.call("ping", None).await
    }

    /// Current server time
    ///
    /// GET /v1/time
    pub async fn server_time(&self) -> Result<Value> {
        self.call("time", None).await
    }

    /// Exchange maintenance status
    ///
    /// GET /v1/systemStatus
    pub async fn system_status(&self) -> Result<Value> {
        self.call("system_status", None).await
    }

    /// Trading rules and symbol information
    ///
    /// GET /v1/exchangeInfo
    pub async fn exchange_info(&self) -> Result<Value> {
        self.call("exchange_info", None).await
    }

    /// 24hr ticker for every market
    ///
    /// GET /v1/tickers/24hr
    pub async fn tickers(&self) -> Result<Value> {
        self.call("tickers", None).await
    }

    /// 24hr ticker for one market
    ///
    /// GET /v1/ticker/24hr?symbol={symbol}
    pub async fn ticker(&self, symbol: &str) -> Result<Value> {
        let params = Params::new().with("symbol", symbol);
        self.call("ticker", Some(&params)).await
    }

    /// Order book depth
    ///
    /// GET /v1/depth?symbol={symbol}&limit={limit}
    pub async fn depth(&self, symbol: &str, limit: Option<u32>) -> Result<Value> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.call("depth", Some(&params)).await
    }

    /// Recent trades
    ///
    /// GET /v1/trades?symbol={symbol}&limit={limit}
    pub async fn trades(&self, symbol: &str, limit: Option<u32>) -> Result<Value> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.call("trades", Some(&params)).await
    }

    /// Older trades, paged by trade id
    ///
    /// GET /v1/historicalTrades
    /// Requires: X-API-Key header + signature
    pub async fn historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<i64>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id);
        let params = self.with_request_window(params);
        self.call("historical_trades", Some(&params)).await
    }
}
