/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public WazirX client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod registry;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    ParamValue,
    Params,
    RequestSigner,
    Result,
    WazirxClient,
    WazirxError,
};

// Re-export registry types
pub use registry::{AuthClass, EndpointDescriptor, HttpMethod, Registry};

// Re-export all types
pub use types::*;
