//! Sidecar override document.
//!
//! Design tools export per-layer metadata that the SVG cannot carry (the
//! declared component `type`, placeholder text, title colors, ...). The
//! document looks like:
//!
//! ```json
//! { "layers": [ { "name": "loginButton", "type": "UIButton", "title-color": "#FFFFFF" } ] }
//! ```
//!
//! Every entry is keyed by its `name`, which matches a layer id in the
//! canvas. Scalar values are kept as raw attribute strings; `null` becomes
//! an explicit null; arrays and objects are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::raw::{AttrValue, Attributes};
use crate::error::ArtboardError;

/// Key holding the layer name in every override entry.
const NAME_KEY: &str = "name";

/// Attribute overrides keyed by layer name. Read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverrideTable {
    entries: BTreeMap<String, Attributes>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides for the layer named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Attributes> {
        self.entries.get(name)
    }

    /// Adds an entry unless one with the same name already exists.
    ///
    /// Returns false when the entry was dropped as a duplicate.
    pub fn insert(&mut self, name: impl Into<String>, attrs: Attributes) -> bool {
        match self.entries.entry(name.into()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(attrs);
                true
            }
        }
    }

    pub fn with_entry(mut self, name: impl Into<String>, attrs: Attributes) -> Self {
        self.insert(name, attrs);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct OverrideDocument {
    #[serde(default)]
    layers: Vec<Map<String, Value>>,
}

/// Reads an override document from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid document.
pub fn read_overrides(path: &Path) -> Result<OverrideTable, ArtboardError> {
    let bytes = fs::read(path).map_err(ArtboardError::Io)?;
    from_overrides_slice(&bytes).map_err(|source| ArtboardError::OverridesParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an override document from a string.
pub fn from_overrides_str(json: &str) -> Result<OverrideTable, serde_json::Error> {
    let document: OverrideDocument = serde_json::from_str(json)?;
    Ok(table_from_document(document))
}

/// Parses an override document from bytes.
pub fn from_overrides_slice(bytes: &[u8]) -> Result<OverrideTable, serde_json::Error> {
    let document: OverrideDocument = serde_json::from_slice(bytes)?;
    Ok(table_from_document(document))
}

fn table_from_document(document: OverrideDocument) -> OverrideTable {
    let mut table = OverrideTable::new();

    for (index, entry) in document.layers.into_iter().enumerate() {
        let Some(name) = entry.get(NAME_KEY).and_then(Value::as_str).map(str::to_string) else {
            log::warn!("override entry {index} has no string 'name'; skipped");
            continue;
        };

        let attrs: Attributes = entry
            .into_iter()
            .filter(|(key, _)| key != NAME_KEY)
            .filter_map(|(key, value)| attr_value(&name, &key, value).map(|value| (key, value)))
            .collect();

        if !table.insert(name.clone(), attrs) {
            log::warn!("duplicate override entry for '{name}'; keeping the first");
        }
    }

    table
}

fn attr_value(layer: &str, key: &str, value: Value) -> Option<AttrValue> {
    match value {
        Value::Null => Some(AttrValue::Null),
        Value::String(text) => Some(AttrValue::Raw(text)),
        Value::Number(number) => Some(AttrValue::Raw(number.to_string())),
        Value::Bool(flag) => Some(AttrValue::Raw(flag.to_string())),
        Value::Array(_) | Value::Object(_) => {
            log::debug!("override '{layer}.{key}' is not a scalar; ignored");
            None
        }
    }
}
