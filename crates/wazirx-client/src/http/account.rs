/*
[INPUT]:  Signed account queries
[OUTPUT]: Account details, fund balances and websocket auth tokens
[POS]:    HTTP layer - account endpoints (require API key + signature)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

// ### Account Endpoints

use serde_json::Value;

use crate::http::{Params, Result, WazirxClient};

impl WazirxClient {
    /// Account information
    ///
    /// GET /v1/account
    pub async fn account_info(&self) -> Result<Value> {
        let params = self.with_request_window(Params::new());
        self.call("account_info", Some(&params)).await
    }

    /// Fund balances per asset
    ///
    /// GET /v1/funds
    pub async fn funds_info(&self) -> Result<Value> {
        let params = self.with_request_window(Params::new());
        self.call("funds_info", Some(&params)).await
    }

    /// Create an auth token for private websocket streams
    ///
    /// POST /v1/create_auth_token
    pub async fn create_auth_token(&self) -> Result<Value> {
        let params = self.with_request_window(Params::new());
        self.call("create_auth_token", Some(&params)).await
    }
}
