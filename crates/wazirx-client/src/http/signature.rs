/*
[INPUT]:  Canonical encoded request parameters and the API secret key
[OUTPUT]: Lowercase hex HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for signed endpoints
[UPDATE]: When changing signing algorithm or signature format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{Params, Result, WazirxError};

type HmacSha256 = Hmac<Sha256>;

/// Signs encoded request parameters with the account secret key
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl RequestSigner {
    /// Create a new request signer keyed by `secret_key`
    pub fn new(secret_key: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .map_err(|e| WazirxError::Config(format!("invalid secret key: {e}")))?;
        Ok(Self { mac })
    }

    /// HMAC-SHA256 over the UTF-8 bytes of `payload`, hex encoded
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign the canonical encoding of `params` and return the encoding with
    /// `signature` appended
    pub fn sign_params(&self, params: &Params) -> String {
        let signature = self.sign(&params.encode());
        params.encode_with_signature(&signature)
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}
