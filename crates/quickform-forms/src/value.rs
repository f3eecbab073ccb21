//! Submission value shapes.
//!
//! Each field kind captures a value of a specific shape; the wire form is
//! untagged so a serialized [`SubmissionValueMap`] matches the payloads the
//! embed runtime produces: plain strings for text-like fields and image
//! data URLs, booleans for checkboxes, and small objects for rating
//! scales, picture selections, and image pairs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use quickform_core::QuickformResult;

/// One captured answer value.
///
/// Variant order matters for untagged deserialization: the object shapes
/// have disjoint key sets, booleans are unambiguous, and strings are the
/// catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionValue {
    /// Checkbox state.
    Bool(bool),
    /// Rating selection with the range it was made against.
    Rating {
        value: i64,
        #[serde(rename = "minValue")]
        min_value: i64,
        #[serde(rename = "maxValue")]
        max_value: i64,
    },
    /// Picture-select choice.
    PictureChoice { url: String, label: String },
    /// Dual-image pair; a side is `None` until its upload is chosen.
    ImagePair {
        left: Option<String>,
        right: Option<String>,
    },
    /// Text-like input, including image-upload data URLs.
    Text(String),
}

impl SubmissionValue {
    /// Shorthand for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// The field-id-keyed collection of captured values at submit time.
///
/// Keys are ordered so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionValueMap {
    values: BTreeMap<String, SubmissionValue>,
}

impl SubmissionValueMap {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a value map from its JSON payload form.
    pub fn parse(payload: &str) -> QuickformResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Serializes the map to the JSON payload form.
    pub fn to_json(&self) -> QuickformResult<String> {
        Ok(serde_json::to_string(&self.values)?)
    }

    /// Records a value for a field, replacing any earlier capture.
    pub fn insert(&mut self, field_id: impl Into<String>, value: SubmissionValue) {
        self.values.insert(field_id.into(), value);
    }

    /// The captured value for a field, if any.
    pub fn get(&self, field_id: &str) -> Option<&SubmissionValue> {
        self.values.get(field_id)
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(field_id, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SubmissionValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, SubmissionValue)> for SubmissionValueMap {
    fn from_iter<T: IntoIterator<Item = (String, SubmissionValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
