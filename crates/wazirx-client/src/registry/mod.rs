/*
[INPUT]:  JSON endpoint mapper (embedded api_mapper.json or caller-supplied)
[OUTPUT]: Immutable operation name -> endpoint descriptor lookup
[POS]:    Registry layer - leaf component, no HTTP dependencies
[UPDATE]: When the mapper format or the embedded operation set changes
*/

pub mod descriptor;

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::http::Result;
use descriptor::RawDescriptor;

pub use descriptor::{AuthClass, EndpointDescriptor, HttpMethod};

/// Endpoint mapper compiled into the crate
pub const EMBEDDED_API_MAPPER: &str = include_str!("api_mapper.json");

/// Read-only mapping from operation name to endpoint descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    descriptors: HashMap<String, EndpointDescriptor>,
}

impl Registry {
    /// Registry with no operations; every lookup fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a mapper document.
    ///
    /// Fails on malformed JSON and on any entry whose `client` or `action`
    /// is outside the supported set; a partially valid document is rejected
    /// as a whole.
    pub fn from_json(source: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawDescriptor> = serde_json::from_str(source)?;
        let descriptors = raw
            .into_iter()
            .map(|(name, entry)| Ok((name, entry.into_descriptor()?)))
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { descriptors })
    }

    /// Parse the embedded mapper
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_API_MAPPER)
    }

    /// Parse `source`, falling back to an empty registry on any error.
    ///
    /// The failure is logged, and every later call resolves to
    /// `InvalidOperation`.
    pub fn from_json_or_empty(source: &str) -> Self {
        match Self::from_json(source) {
            Ok(registry) => registry,
            Err(err) => {
                warn!(error = %err, "endpoint registry failed to load, using empty registry");
                Self::empty()
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.descriptors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Operation names in ascending order
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }
}

impl FromIterator<(String, EndpointDescriptor)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, EndpointDescriptor)>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}
