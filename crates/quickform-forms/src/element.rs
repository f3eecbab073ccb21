//! Field instances and form content documents.
//!
//! A [`FieldInstance`] is one placed, configured field; a
//! [`FormContentDocument`] is the ordered sequence of instances that makes
//! up one form version. Documents are persisted as a JSON array and the
//! wire names (`type`, `extraAttributes`) match the persisted format, so a
//! stored document round-trips byte-compatibly.

use serde::{Deserialize, Serialize};

use quickform_core::{QuickformError, QuickformResult};

/// The closed set of field kinds.
///
/// Each tag maps to exactly one behavior contract in
/// [`registry`](crate::registry); adding a field kind means adding a
/// contract there and a branch in each renderer's exhaustive dispatch,
/// never modifying existing ones. The variant names are the wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
    /// Single-line text input.
    TextField,
    /// Large display heading (no input).
    TitleField,
    /// Secondary display heading (no input).
    SubTitleField,
    /// Display paragraph (no input).
    ParagraphField,
    /// Horizontal rule (no input).
    SeparatorField,
    /// Vertical spacing (no input).
    SpacerField,
    /// Numeric input.
    NumberField,
    /// Multi-line text input.
    TextAreaField,
    /// Date picker.
    DateField,
    /// Single-choice dropdown.
    SelectField,
    /// Boolean checkbox.
    CheckboxField,
    /// Single image upload, captured as a data URL.
    ImageUploadField,
    /// Numbered rating scale with a hidden input.
    RatingScaleField,
    /// Left/right image pair upload.
    DualImageUpload,
    /// Image grid where one option is selected.
    PictureSelectField,
}

impl FieldType {
    /// Every field kind, in palette order.
    pub const ALL: [Self; 15] = [
        Self::TextField,
        Self::TitleField,
        Self::SubTitleField,
        Self::ParagraphField,
        Self::SeparatorField,
        Self::SpacerField,
        Self::NumberField,
        Self::TextAreaField,
        Self::DateField,
        Self::SelectField,
        Self::CheckboxField,
        Self::ImageUploadField,
        Self::RatingScaleField,
        Self::DualImageUpload,
        Self::PictureSelectField,
    ];

    /// Returns the wire tag for this kind (also its serde name).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TextField => "TextField",
            Self::TitleField => "TitleField",
            Self::SubTitleField => "SubTitleField",
            Self::ParagraphField => "ParagraphField",
            Self::SeparatorField => "SeparatorField",
            Self::SpacerField => "SpacerField",
            Self::NumberField => "NumberField",
            Self::TextAreaField => "TextAreaField",
            Self::DateField => "DateField",
            Self::SelectField => "SelectField",
            Self::CheckboxField => "CheckboxField",
            Self::ImageUploadField => "ImageUploadField",
            Self::RatingScaleField => "RatingScaleField",
            Self::DualImageUpload => "DualImageUpload",
            Self::PictureSelectField => "PictureSelectField",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One placed, configured occurrence of a [`FieldType`] within a document.
///
/// The attribute bag is kept as raw JSON so unknown or newer attributes
/// survive a load/store cycle; typed views are parsed on demand via
/// [`attributes`](crate::attributes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    /// Unique within the owning document, stable across edits.
    pub id: String,
    /// The behavior contract tag.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Type-specific attribute bag, validated against the kind's schema.
    #[serde(rename = "extraAttributes", default = "empty_attributes")]
    pub extra_attributes: serde_json::Value,
}

fn empty_attributes() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl FieldInstance {
    /// Creates an instance with an empty attribute bag.
    ///
    /// Prefer [`registry::construct`](crate::registry::construct), which
    /// fills in the kind's defaults.
    pub fn new(id: impl Into<String>, kind: FieldType) -> Self {
        Self {
            id: id.into(),
            kind,
            extra_attributes: empty_attributes(),
        }
    }

    /// Looks up a string attribute, returning `""` when absent.
    pub fn attr_str(&self, name: &str) -> &str {
        self.extra_attributes
            .get(name)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
    }

    /// Looks up a boolean attribute, returning `false` when absent.
    pub fn attr_bool(&self, name: &str) -> bool {
        self.extra_attributes
            .get(name)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// Looks up an integer attribute.
    pub fn attr_i64(&self, name: &str) -> Option<i64> {
        self.extra_attributes
            .get(name)
            .and_then(serde_json::Value::as_i64)
    }

    /// Whether this field is marked required. Display-only kinds never
    /// carry the attribute and report `false`.
    pub fn required(&self) -> bool {
        self.attr_bool("required")
    }
}

/// An ordered sequence of [`FieldInstance`]s: one form version.
///
/// Order is meaningful — it is both the top-to-bottom visual layout and the
/// submission field set. Field ids are unique within a document; the
/// constructors enforce this.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormContentDocument {
    fields: Vec<FieldInstance>,
}

impl FormContentDocument {
    /// Builds a document from a field list, rejecting duplicate ids.
    pub fn new(fields: Vec<FieldInstance>) -> QuickformResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.as_str()) {
                return Err(QuickformError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Parses a document from its persisted JSON form.
    ///
    /// The content must be a JSON array of field objects; anything else is a
    /// configuration error, as is a duplicate field id.
    pub fn parse(content: &str) -> QuickformResult<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| QuickformError::MalformedContent(e.to_string()))?;
        if !value.is_array() {
            return Err(QuickformError::MalformedContent(
                "form content is not an array".to_string(),
            ));
        }
        let fields: Vec<FieldInstance> = serde_json::from_value(value)
            .map_err(|e| QuickformError::MalformedContent(e.to_string()))?;
        Self::new(fields)
    }

    /// Serializes the document to its persisted JSON form.
    pub fn to_json(&self) -> QuickformResult<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// The fields in render order.
    pub fn fields(&self) -> &[FieldInstance] {
        &self.fields
    }

    /// Looks up a field by id.
    pub fn get(&self, id: &str) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Appends a field, rejecting an id already present.
    pub fn push(&mut self, field: FieldInstance) -> QuickformResult<()> {
        if self.get(&field.id).is_some() {
            return Err(QuickformError::DuplicateFieldId(field.id));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Replaces the attribute bag of the field with the given id.
    ///
    /// Returns an error if no such field exists. This is the designer-side
    /// mutation; published documents are not edited through this API.
    pub fn update_attributes(
        &mut self,
        id: &str,
        extra_attributes: serde_json::Value,
    ) -> QuickformResult<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| QuickformError::NotFound(format!("field {id}")))?;
        field.extra_attributes = extra_attributes;
        Ok(())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FormContentDocument {
    type Item = &'a FieldInstance;
    type IntoIter = std::slice::Iter<'a, FieldInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_tags_roundtrip() {
        for kind in FieldType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.tag()));
            let back: FieldType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = serde_json::from_str::<FieldType>("\"HologramField\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_instance_wire_names() {
        let json = r#"{"id":"q1","type":"TextField","extraAttributes":{"label":"Name","required":true}}"#;
        let field: FieldInstance = serde_json::from_str(json).unwrap();
        assert_eq!(field.id, "q1");
        assert_eq!(field.kind, FieldType::TextField);
        assert_eq!(field.attr_str("label"), "Name");
        assert!(field.required());
    }

    #[test]
    fn test_instance_missing_attributes_defaults_empty() {
        let json = r#"{"id":"sep","type":"SeparatorField"}"#;
        let field: FieldInstance = serde_json::from_str(json).unwrap();
        assert!(field.extra_attributes.is_object());
        assert!(!field.required());
    }

    #[test]
    fn test_document_roundtrip_preserves_order() {
        let content = r#"[
            {"id":"a","type":"TitleField","extraAttributes":{"title":"Survey"}},
            {"id":"b","type":"TextField","extraAttributes":{"label":"Name"}},
            {"id":"c","type":"CheckboxField","extraAttributes":{"label":"Agree"}}
        ]"#;
        let doc = FormContentDocument::parse(content).unwrap();
        let json = doc.to_json().unwrap();
        let back = FormContentDocument::parse(&json).unwrap();
        assert_eq!(doc, back);
        let ids: Vec<&str> = back.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_document_rejects_non_array() {
        let result = FormContentDocument::parse(r#"{"id":"a"}"#);
        assert!(matches!(
            result,
            Err(QuickformError::MalformedContent(_))
        ));
    }

    #[test]
    fn test_document_rejects_invalid_json() {
        assert!(FormContentDocument::parse("not json").is_err());
    }

    #[test]
    fn test_document_rejects_duplicate_ids() {
        let content = r#"[
            {"id":"a","type":"TextField"},
            {"id":"a","type":"NumberField"}
        ]"#;
        let result = FormContentDocument::parse(content);
        assert!(matches!(result, Err(QuickformError::DuplicateFieldId(id)) if id == "a"));
    }

    #[test]
    fn test_document_push_rejects_duplicate() {
        let mut doc = FormContentDocument::default();
        doc.push(FieldInstance::new("a", FieldType::TextField)).unwrap();
        let result = doc.push(FieldInstance::new("a", FieldType::DateField));
        assert!(result.is_err());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_document_update_attributes() {
        let mut doc = FormContentDocument::default();
        doc.push(FieldInstance::new("a", FieldType::TextField)).unwrap();
        doc.update_attributes("a", serde_json::json!({"label": "Renamed"}))
            .unwrap();
        assert_eq!(doc.get("a").unwrap().attr_str("label"), "Renamed");
        assert!(doc
            .update_attributes("missing", serde_json::json!({}))
            .is_err());
    }

    #[test]
    fn test_empty_document_parses() {
        let doc = FormContentDocument::parse("[]").unwrap();
        assert!(doc.is_empty());
    }
}
