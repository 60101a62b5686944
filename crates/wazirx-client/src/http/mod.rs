/*
[INPUT]:  HTTP client configuration, credentials and operation names
[OUTPUT]: HTTP responses decoded as JSON
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod params;
pub mod public;
pub mod signature;
pub mod trade;

pub use error::{Result, WazirxError};
pub use params::{ParamValue, Params, SIGNATURE_KEY};
pub use signature::RequestSigner;

pub use client::{API_KEY_HEADER, BASE_URL, ClientConfig, Credentials, WazirxClient};
