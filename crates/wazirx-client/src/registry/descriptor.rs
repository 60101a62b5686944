/*
[INPUT]:  Raw registry entries ({client, action, endpoint, url})
[OUTPUT]: Validated, immutable endpoint descriptors
[POS]:    Registry layer - endpoint descriptor types
[UPDATE]: When adding auth classes or HTTP verbs
*/

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::Deserialize;

use crate::http::WazirxError;

/// Whether an operation needs a signature and API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthClass {
    Public,
    Signed,
}

impl AuthClass {
    pub fn is_signed(self) -> bool {
        matches!(self, AuthClass::Signed)
    }
}

impl FromStr for AuthClass {
    type Err = WazirxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "public" => Ok(AuthClass::Public),
            "signed" => Ok(AuthClass::Signed),
            other => Err(WazirxError::InvalidAuthClass {
                client: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AuthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthClass::Public => f.write_str("public"),
            AuthClass::Signed => f.write_str("signed"),
        }
    }
}

/// HTTP verbs the exchange API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Whether parameters travel in the query string rather than the body
    pub fn uses_query(self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }

    pub fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = WazirxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            other => Err(WazirxError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// Resolved transport shape of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    auth_class: AuthClass,
    http_method: HttpMethod,
    path: String,
    endpoint: String,
}

impl EndpointDescriptor {
    pub fn new(auth_class: AuthClass, http_method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            auth_class,
            http_method,
            path: path.into(),
            endpoint: String::new(),
        }
    }

    pub fn auth_class(&self) -> AuthClass {
        self.auth_class
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    /// Path appended to the API base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Descriptive endpoint name, not used when building requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Registry entry as it appears in the JSON source
#[derive(Debug, Deserialize)]
pub(crate) struct RawDescriptor {
    client: String,
    action: String,
    #[serde(default)]
    endpoint: String,
    url: String,
}

impl RawDescriptor {
    /// Validate `client` and `action` against the supported sets
    pub(crate) fn into_descriptor(self) -> Result<EndpointDescriptor, WazirxError> {
        Ok(EndpointDescriptor {
            auth_class: self.client.parse()?,
            http_method: self.action.parse()?,
            path: self.url,
            endpoint: self.endpoint,
        })
    }
}
