/*
[INPUT]:  Caller-supplied request parameters (strings, integers, timestamps)
[OUTPUT]: Canonical application/x-www-form-urlencoded parameter strings
[POS]:    HTTP layer - parameter bag and deterministic encoding
[UPDATE]: When adding value types or changing the canonical text form
*/

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::form_urlencoded::Serializer;

/// Parameter key the signer owns.
pub const SIGNATURE_KEY: &str = "signature";

/// Scalar value carried in a [`Params`] bag.
///
/// `Display` is the canonical text used both for the signature input and for
/// the transmitted request: strings verbatim, integers in decimal, timestamps
/// as decimal Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::Timestamp(value) => write!(f, "{}", value.timestamp_millis()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Str(value.normalize().to_string())
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Timestamp(value)
    }
}

/// Request parameter bag.
///
/// Keys are held in ascending byte order, so two bags with the same entries
/// encode identically no matter how they were built. The `signature` key is
/// reserved: it is never emitted by [`Params::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is present
    pub fn with_opt<V: Into<ParamValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Canonical form-urlencoded representation of the bag
    pub fn encode(&self) -> String {
        self.serializer().finish()
    }

    /// Canonical encoding followed by `signature=<signature>` as the final pair
    pub fn encode_with_signature(&self, signature: &str) -> String {
        let mut serializer = self.serializer();
        serializer.append_pair(SIGNATURE_KEY, signature);
        serializer.finish()
    }

    fn serializer(&self) -> Serializer<'static, String> {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in self.iter().filter(|(key, _)| *key != SIGNATURE_KEY) {
            serializer.append_pair(key, &value.to_string());
        }
        serializer
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
