//! Typed attribute schemas, one per field kind.
//!
//! A [`FieldInstance`](crate::element::FieldInstance) carries its attributes
//! as a raw JSON bag; the structs here are the typed views. Each struct's
//! `Default` is the kind's construction default, `of` parses the view out
//! of an instance (missing attributes fall back to the defaults), and
//! `check` enforces the kind's schema bounds.
//!
//! Wire names are camelCase, matching the persisted documents.

use serde::{Deserialize, Deserializer, Serialize};

use quickform_core::{QuickformError, QuickformResult};

use crate::element::FieldInstance;
use crate::rating::{GradientScheme, SolidScheme};

fn check_len(name: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("{name} must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("{name} must be at most {max} characters"));
    }
    Ok(())
}

fn check_range(name: &str, value: i64, min: i64, max: i64) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{name} must be between {min} and {max}"));
    }
    Ok(())
}

fn parse<T>(instance: &FieldInstance) -> QuickformResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(instance.extra_attributes.clone()).map_err(|e| {
        QuickformError::AttributeSchema {
            field: instance.id.clone(),
            reason: e.to_string(),
        }
    })
}

fn schema_err(instance: &FieldInstance, reason: String) -> QuickformError {
    QuickformError::AttributeSchema {
        field: instance.id.clone(),
        reason,
    }
}

// ── Text-like inputs ─────────────────────────────────────────────────

/// Attributes of `TextField` and `NumberField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAttributes {
    pub label: String,
    pub helper_text: String,
    pub place_holder: String,
    pub required: bool,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            label: "Text field".to_string(),
            helper_text: "Helper text".to_string(),
            place_holder: "Value here...".to_string(),
            required: false,
        }
    }
}

impl TextAttributes {
    /// Number-field defaults (same shape, numeric placeholder).
    pub fn number_default() -> Self {
        Self {
            label: "Number field".to_string(),
            place_holder: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("placeHolder", &self.place_holder, 0, 50))
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `TitleField` and `SubTitleField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleAttributes {
    pub title: String,
}

impl Default for TitleAttributes {
    fn default() -> Self {
        Self {
            title: "Title field".to_string(),
        }
    }
}

impl TitleAttributes {
    /// Subtitle defaults.
    pub fn subtitle_default() -> Self {
        Self {
            title: "SubTitle field".to_string(),
        }
    }

    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("title", &self.title, 2, 50).map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `ParagraphField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphAttributes {
    pub text: String,
}

impl Default for ParagraphAttributes {
    fn default() -> Self {
        Self {
            text: "Text here".to_string(),
        }
    }
}

impl ParagraphAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("text", &self.text, 2, 500).map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `SpacerField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerAttributes {
    /// Height in pixels.
    pub height: i64,
}

impl Default for SpacerAttributes {
    fn default() -> Self {
        Self { height: 20 }
    }
}

impl SpacerAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_range("height", self.height, 5, 200).map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `TextAreaField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAreaAttributes {
    pub label: String,
    pub helper_text: String,
    pub place_holder: String,
    pub required: bool,
    pub rows: i64,
}

impl Default for TextAreaAttributes {
    fn default() -> Self {
        Self {
            label: "Text area".to_string(),
            helper_text: "Helper text".to_string(),
            place_holder: "Value here...".to_string(),
            required: false,
            rows: 3,
        }
    }
}

impl TextAreaAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("placeHolder", &self.place_holder, 0, 50))
            .and_then(|()| check_range("rows", self.rows, 1, 10))
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `DateField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
}

impl Default for DateAttributes {
    fn default() -> Self {
        Self {
            label: "Date field".to_string(),
            helper_text: "Pick a date".to_string(),
            required: false,
        }
    }
}

impl DateAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `SelectField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectAttributes {
    pub label: String,
    pub helper_text: String,
    pub place_holder: String,
    pub required: bool,
    pub options: Vec<String>,
}

impl Default for SelectAttributes {
    fn default() -> Self {
        Self {
            label: "Select field".to_string(),
            helper_text: "Helper text".to_string(),
            place_holder: "Value here...".to_string(),
            required: false,
            options: Vec::new(),
        }
    }
}

impl SelectAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("placeHolder", &self.place_holder, 0, 50))
            .and_then(|()| {
                self.options
                    .iter()
                    .try_for_each(|option| check_len("option", option, 1, 100))
            })
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `CheckboxField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
}

impl Default for CheckboxAttributes {
    fn default() -> Self {
        Self {
            label: "Checkbox field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
        }
    }
}

impl CheckboxAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .map_err(|reason| schema_err(instance, reason))
    }
}

// ── Media inputs ─────────────────────────────────────────────────────

/// Attributes of `ImageUploadField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageUploadAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
    /// Prompt shown inside the drop area.
    pub prompt: String,
    pub button_text: String,
    /// CSS sizing hints for the drop area.
    pub width: String,
    pub height: String,
    /// Longest edge, in pixels, the client resizes uploads down to.
    pub max_dimension: i64,
}

impl Default for ImageUploadAttributes {
    fn default() -> Self {
        Self {
            label: "Image Upload".to_string(),
            helper_text: "Upload an image file".to_string(),
            required: false,
            prompt: "Upload an image".to_string(),
            button_text: "Choose File".to_string(),
            width: "w-96".to_string(),
            height: "h-64".to_string(),
            max_dimension: 800,
        }
    }
}

impl ImageUploadAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("prompt", &self.prompt, 2, 100))
            .and_then(|()| check_len("buttonText", &self.button_text, 2, 50))
            .and_then(|()| check_range("maxDimension", self.max_dimension, 100, 2000))
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// Attributes of `RatingScaleField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingScaleAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
    pub question: String,
    pub min_label: String,
    pub mid_label: String,
    pub max_label: String,
    pub min_value: i64,
    pub max_value: i64,
    pub color_scheme: SolidScheme,
    /// Optional gradient override; the designer persists `null` (or the
    /// sentinel `"none"`) when unset.
    #[serde(deserialize_with = "deserialize_gradient")]
    pub gradient_scheme: Option<GradientScheme>,
}

impl Default for RatingScaleAttributes {
    fn default() -> Self {
        Self {
            label: "Rating Scale".to_string(),
            helper_text: "Select a value".to_string(),
            required: false,
            question: "Rate your experience".to_string(),
            min_label: "Poor".to_string(),
            mid_label: "Average".to_string(),
            max_label: "Excellent".to_string(),
            min_value: 1,
            max_value: 10,
            color_scheme: SolidScheme::Blue,
            gradient_scheme: None,
        }
    }
}

impl RatingScaleAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("question", &self.question, 2, 200))
            .and_then(|()| check_len("minLabel", &self.min_label, 1, 50))
            .and_then(|()| check_len("midLabel", &self.mid_label, 1, 50))
            .and_then(|()| check_len("maxLabel", &self.max_label, 1, 50))
            .and_then(|()| check_range("minValue", self.min_value, 0, 100))
            .and_then(|()| check_range("maxValue", self.max_value, 0, 100))
            .and_then(|()| {
                if self.min_value < self.max_value {
                    Ok(())
                } else {
                    Err("minValue must be below maxValue".to_string())
                }
            })
            .map_err(|reason| schema_err(instance, reason))
    }
}

fn deserialize_gradient<'de, D>(deserializer: D) -> Result<Option<GradientScheme>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Scheme(GradientScheme),
        Other(Option<String>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Scheme(scheme) => Ok(Some(scheme)),
        Raw::Other(None) => Ok(None),
        Raw::Other(Some(s)) if s == "none" => Ok(None),
        Raw::Other(Some(s)) => Err(serde::de::Error::custom(format!(
            "unknown gradient scheme {s}"
        ))),
    }
}

/// Attributes of `DualImageUpload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DualImageUploadAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
    pub left_label: String,
    pub right_label: String,
    pub left_prompt: String,
    pub right_prompt: String,
}

impl Default for DualImageUploadAttributes {
    fn default() -> Self {
        Self {
            label: "Dual Image Upload".to_string(),
            helper_text: "Upload two images to compare".to_string(),
            required: false,
            left_label: "Left Image".to_string(),
            right_label: "Right Image".to_string(),
            left_prompt: "Upload left image".to_string(),
            right_prompt: "Upload right image".to_string(),
        }
    }
}

impl DualImageUploadAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| check_len("leftLabel", &self.left_label, 1, 50))
            .and_then(|()| check_len("rightLabel", &self.right_label, 1, 50))
            .and_then(|()| check_len("leftPrompt", &self.left_prompt, 2, 100))
            .and_then(|()| check_len("rightPrompt", &self.right_prompt, 2, 100))
            .map_err(|reason| schema_err(instance, reason))
    }
}

/// One selectable image in a `PictureSelectField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOption {
    /// Image source URL. Older documents persisted this as `src`.
    #[serde(alias = "src")]
    pub url: String,
    #[serde(default)]
    pub label: String,
}

/// Attributes of `PictureSelectField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PictureSelectAttributes {
    pub label: String,
    pub helper_text: String,
    pub required: bool,
    pub images: Vec<ImageOption>,
}

impl Default for PictureSelectAttributes {
    fn default() -> Self {
        Self {
            label: "Picture Select".to_string(),
            helper_text: "Select one of the images".to_string(),
            required: false,
            images: vec![ImageOption {
                url: "https://placehold.co/200x200".to_string(),
                label: "Option 1".to_string(),
            }],
        }
    }
}

impl PictureSelectAttributes {
    pub fn of(instance: &FieldInstance) -> QuickformResult<Self> {
        parse(instance)
    }

    pub fn check(&self, instance: &FieldInstance) -> QuickformResult<()> {
        check_len("label", &self.label, 2, 50)
            .and_then(|()| check_len("helperText", &self.helper_text, 0, 200))
            .and_then(|()| {
                if self.images.is_empty() {
                    return Err("images must not be empty".to_string());
                }
                self.images.iter().try_for_each(|image| {
                    if image.url.is_empty() {
                        Err("image url must not be empty".to_string())
                    } else {
                        check_len("image label", &image.label, 0, 100)
                    }
                })
            })
            .map_err(|reason| schema_err(instance, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::FieldType;

    fn instance_with(kind: FieldType, attrs: serde_json::Value) -> FieldInstance {
        let mut field = FieldInstance::new("f1", kind);
        field.extra_attributes = attrs;
        field
    }

    #[test]
    fn test_text_defaults_pass_schema() {
        let attrs = TextAttributes::default();
        let field = instance_with(
            FieldType::TextField,
            serde_json::to_value(&attrs).unwrap(),
        );
        assert!(attrs.check(&field).is_ok());
    }

    #[test]
    fn test_text_partial_bag_uses_defaults() {
        let field = instance_with(FieldType::TextField, serde_json::json!({"label": "Name"}));
        let attrs = TextAttributes::of(&field).unwrap();
        assert_eq!(attrs.label, "Name");
        assert_eq!(attrs.helper_text, "Helper text");
        assert!(!attrs.required);
    }

    #[test]
    fn test_text_label_bounds() {
        let field = instance_with(FieldType::TextField, serde_json::json!({"label": "x"}));
        let attrs = TextAttributes::of(&field).unwrap();
        let err = attrs.check(&field).unwrap_err();
        assert!(err.to_string().contains("label"));

        let long = "x".repeat(51);
        let field = instance_with(FieldType::TextField, serde_json::json!({ "label": long }));
        let attrs = TextAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let attrs = TextAttributes::default();
        let value = serde_json::to_value(&attrs).unwrap();
        assert!(value.get("helperText").is_some());
        assert!(value.get("placeHolder").is_some());
        assert!(value.get("helper_text").is_none());
    }

    #[test]
    fn test_spacer_bounds() {
        let field = instance_with(FieldType::SpacerField, serde_json::json!({"height": 4}));
        let attrs = SpacerAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());

        let field = instance_with(FieldType::SpacerField, serde_json::json!({"height": 200}));
        let attrs = SpacerAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_ok());
    }

    #[test]
    fn test_image_upload_max_dimension_bounds() {
        let field = instance_with(
            FieldType::ImageUploadField,
            serde_json::json!({"maxDimension": 99}),
        );
        let attrs = ImageUploadAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());

        let field = instance_with(
            FieldType::ImageUploadField,
            serde_json::json!({"maxDimension": 2000}),
        );
        let attrs = ImageUploadAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_ok());
    }

    #[test]
    fn test_rating_scheme_parsing() {
        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"colorScheme": "amber", "gradientScheme": "satisfaction"}),
        );
        let attrs = RatingScaleAttributes::of(&field).unwrap();
        assert_eq!(attrs.color_scheme, SolidScheme::Amber);
        assert_eq!(attrs.gradient_scheme, Some(GradientScheme::Satisfaction));
    }

    #[test]
    fn test_rating_gradient_null_and_none() {
        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"gradientScheme": null}),
        );
        let attrs = RatingScaleAttributes::of(&field).unwrap();
        assert_eq!(attrs.gradient_scheme, None);

        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"gradientScheme": "none"}),
        );
        let attrs = RatingScaleAttributes::of(&field).unwrap();
        assert_eq!(attrs.gradient_scheme, None);
    }

    #[test]
    fn test_rating_unknown_scheme_rejected() {
        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"colorScheme": "chartreuse"}),
        );
        assert!(RatingScaleAttributes::of(&field).is_err());

        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"gradientScheme": "rainbow"}),
        );
        assert!(RatingScaleAttributes::of(&field).is_err());
    }

    #[test]
    fn test_rating_value_bounds() {
        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"minValue": -1}),
        );
        let attrs = RatingScaleAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());

        let field = instance_with(
            FieldType::RatingScaleField,
            serde_json::json!({"minValue": 5, "maxValue": 5}),
        );
        let attrs = RatingScaleAttributes::of(&field).unwrap();
        let err = attrs.check(&field).unwrap_err();
        assert!(err.to_string().contains("minValue must be below maxValue"));
    }

    #[test]
    fn test_picture_select_src_alias() {
        let field = instance_with(
            FieldType::PictureSelectField,
            serde_json::json!({"images": [{"src": "https://example.com/a.png", "label": "A"}]}),
        );
        let attrs = PictureSelectAttributes::of(&field).unwrap();
        assert_eq!(attrs.images[0].url, "https://example.com/a.png");
    }

    #[test]
    fn test_picture_select_requires_images() {
        let field = instance_with(
            FieldType::PictureSelectField,
            serde_json::json!({"images": []}),
        );
        let attrs = PictureSelectAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());
    }

    #[test]
    fn test_select_option_bounds() {
        let field = instance_with(
            FieldType::SelectField,
            serde_json::json!({"options": ["", "ok"]}),
        );
        let attrs = SelectAttributes::of(&field).unwrap();
        assert!(attrs.check(&field).is_err());
    }

    #[test]
    fn test_dual_image_defaults_pass_schema() {
        let attrs = DualImageUploadAttributes::default();
        let field = instance_with(
            FieldType::DualImageUpload,
            serde_json::to_value(&attrs).unwrap(),
        );
        assert!(attrs.check(&field).is_ok());
        assert_eq!(attrs.left_label, "Left Image");
        assert_eq!(attrs.right_label, "Right Image");
    }
}
