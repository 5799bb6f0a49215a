//! Entry normalization
//!
//! Host entries arrive as loosely typed JSON objects. [`RawEntry`] mirrors
//! that wire shape; [`Entry`] is the normalized form every other part of
//! the workspace consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};

use crate::error::{ModelError, Result};
use crate::icon::IconRef;

/// Stable arrival-order index of an entry (0-based).
///
/// This is the only identifier ever reported back to the host. It is
/// assigned before hidden entries are dropped, so filtering never shifts
/// the index of a surviving entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EntryIndex(pub usize);

impl EntryIndex {
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EntryIndex {
    fn from(value: usize) -> Self {
        EntryIndex(value)
    }
}

/// Wire shape of one host entry. Every field is optional and loosely
/// typed; truthiness follows the host's scripting conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default)]
    pub header: Option<Value>,
    #[serde(default)]
    pub txt: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub disabled: Option<Value>,
    #[serde(default)]
    pub hidden: Option<Value>,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub is_menu_header: Option<Value>,
}

/// Normalized menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub index: EntryIndex,
    pub header: String,
    pub message: Option<String>,
    pub icon: IconRef,
    pub disabled: bool,
    /// Opaque host payload (`params` on the wire), never interpreted.
    pub payload: Option<Value>,
    pub image: Option<String>,
    pub is_header_entry: bool,
}

impl Entry {
    /// Normalize a raw entry. Returns `None` for hidden entries.
    pub fn from_raw(index: EntryIndex, raw: RawEntry) -> Option<Self> {
        if truthy(raw.hidden.as_ref()) {
            return None;
        }

        let message = text_of(raw.txt.as_ref())
            .filter(|s| !s.is_empty())
            .or_else(|| text_of(raw.text.as_ref()).filter(|s| !s.is_empty()));

        let icon = text_of(raw.icon.as_ref())
            .map(|s| IconRef::classify(&s))
            .unwrap_or_default();

        Some(Self {
            index,
            header: text_of(raw.header.as_ref()).unwrap_or_default(),
            message,
            icon,
            disabled: truthy(raw.disabled.as_ref()),
            payload: raw.params.filter(|v| !v.is_null()),
            image: text_of(raw.image.as_ref()).filter(|s| !s.is_empty()),
            is_header_entry: truthy(raw.is_menu_header.as_ref()),
        })
    }

    /// Header entries and disabled entries cannot be navigated to.
    pub fn is_navigable(&self) -> bool {
        !self.disabled && !self.is_header_entry
    }
}

/// Decode a host `data` array into normalized entries, in arrival order.
///
/// Every element must be a JSON object; hidden entries are dropped after
/// their index has been assigned.
pub fn normalize_entries(values: &[Value]) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(values.len());
    for (position, value) in values.iter().enumerate() {
        let raw = RawEntry::deserialize(value)
            .map_err(|source| ModelError::MalformedEntry { position, source })?;
        if let Some(entry) = Entry::from_raw(EntryIndex(position), raw) {
            entries.push(entry);
        } else {
            log::trace!("[Menu] entry {position} is hidden");
        }
    }
    Ok(entries)
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
