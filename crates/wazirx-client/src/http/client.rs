/*
[INPUT]:  Operation name, parameter bag, credentials and client configuration
[OUTPUT]: Decoded JSON responses from the WazirX REST API
[POS]:    HTTP layer - registry-driven request dispatcher
[UPDATE]: When changing request construction, headers or response handling
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request, Response, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::http::{Params, RequestSigner, Result, WazirxError};
use crate::registry::{EMBEDDED_API_MAPPER, EndpointDescriptor, HttpMethod, Registry};

/// Base URL for WazirX REST API
pub const BASE_URL: &str = "https://api.wazirx.com/sapi";

/// Header carrying the plaintext API key on signed requests
pub const API_KEY_HEADER: &str = "X-API-Key";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const DEFAULT_RECV_WINDOW_MS: i64 = 10_000;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// `recvWindow` sent with signed convenience operations, in milliseconds
    pub recv_window: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_recv_window(mut self, recv_window: i64) -> Self {
        self.recv_window = recv_window;
        self
    }
}

/// API key pair issued by the exchange
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for WazirX API
#[derive(Clone)]
pub struct WazirxClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    signer: RequestSigner,
    registry: Arc<Registry>,
    recv_window: i64,
}

impl WazirxClient {
    /// Create a new client with default configuration and the embedded registry
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, secret_key), ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// If the embedded registry fails to parse, the client still builds with
    /// an empty registry and every call returns `InvalidOperation`.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let registry = Registry::from_json_or_empty(EMBEDDED_API_MAPPER);
        Self::with_registry(credentials, config, registry)
    }

    /// Create a new client over an explicitly constructed registry
    pub fn with_registry(
        credentials: Credentials,
        config: ClientConfig,
        registry: Registry,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| WazirxError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            http_client,
            base_url,
            api_key: credentials.api_key,
            signer: RequestSigner::new(&credentials.secret_key)?,
            registry: Arc::new(registry),
            recv_window: config.recv_window,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke an operation by name.
    ///
    /// Unknown names fail with `InvalidOperation` before any request is
    /// built. Exactly one HTTP attempt is made; an empty or non-JSON response
    /// body yields an empty JSON object.
    pub async fn call(&self, name: &str, params: Option<&Params>) -> Result<Value> {
        let descriptor = self
            .registry
            .resolve(name)
            .ok_or_else(|| WazirxError::InvalidOperation {
                name: name.to_string(),
            })?;

        let empty = Params::new();
        let params = params.unwrap_or(&empty);
        let signed = descriptor.auth_class().is_signed();
        let encoded = if signed {
            self.signer.sign_params(params)
        } else {
            params.encode()
        };

        let request = self.build_request(descriptor, encoded)?;
        debug!(
            operation = name,
            method = %descriptor.http_method(),
            path = descriptor.path(),
            signed,
            "dispatching request"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(WazirxError::Transport)?;
        read_json(name, response).await
    }

    /// Add `recvWindow` and the current `timestamp` to a signed operation's parameters
    pub(crate) fn with_request_window(&self, params: Params) -> Params {
        params
            .with("recvWindow", self.recv_window)
            .with("timestamp", Utc::now())
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn build_request(&self, descriptor: &EndpointDescriptor, encoded: String) -> Result<Request> {
        let mut url = self.endpoint_url(descriptor.path())?;
        let builder = match descriptor.http_method() {
            HttpMethod::Get => {
                set_query(&mut url, &encoded);
                self.http_client.get(url)
            }
            HttpMethod::Delete => {
                set_query(&mut url, &encoded);
                self.http_client.delete(url)
            }
            HttpMethod::Post => self.http_client.post(url).body(encoded),
        };

        let builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        let builder = if descriptor.auth_class().is_signed() {
            builder.header(API_KEY_HEADER, self.api_key.as_str())
        } else {
            builder
        };

        builder
            .build()
            .map_err(|e| WazirxError::RequestConstruction(e.to_string()))
    }
}

impl fmt::Debug for WazirxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WazirxClient")
            .field("base_url", &self.base_url)
            .field("operations", &self.registry.len())
            .field("recv_window", &self.recv_window)
            .finish_non_exhaustive()
    }
}

fn set_query(url: &mut Url, encoded: &str) {
    if !encoded.is_empty() {
        url.set_query(Some(encoded));
    }
}

async fn read_json(operation: &str, response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.bytes().await.map_err(WazirxError::ResponseRead)?;
    debug!(operation, status = status.as_u16(), bytes = body.len(), "response received");

    if !status.is_success() {
        return Err(WazirxError::api_error(
            status,
            String::from_utf8_lossy(&body).into_owned(),
        ));
    }

    Ok(decode_body(operation, &body))
}

/// Decode a response body, degrading anything that is not a JSON object or
/// array to an empty object
fn decode_body(operation: &str, body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Object(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        Ok(_) => Value::Object(Map::new()),
        Err(err) => {
            warn!(operation, error = %err, "response body is not JSON, returning empty object");
            Value::Object(Map::new())
        }
    }
}
