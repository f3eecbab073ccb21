//! The field-type registry: one behavior contract per field kind.
//!
//! Every operation here dispatches on [`FieldType`] in a single exhaustive
//! `match`, so adding a kind is a compile-enforced change in one place.
//! Both renderers and the validation engine consult this module by tag;
//! nothing outside it may switch on field kinds for construction,
//! validation, or schema checking.

use uuid::Uuid;

use quickform_core::QuickformResult;

use crate::attributes::{
    CheckboxAttributes, DateAttributes, DualImageUploadAttributes, ImageUploadAttributes,
    ParagraphAttributes, PictureSelectAttributes, RatingScaleAttributes, SelectAttributes,
    SpacerAttributes, TextAreaAttributes, TextAttributes, TitleAttributes,
};
use crate::element::{FieldInstance, FieldType, FormContentDocument};
use crate::value::SubmissionValue;

/// Generates a fresh field id for the designer.
pub fn new_field_id() -> String {
    Uuid::new_v4().to_string()
}

/// Constructs a new instance of the given kind with its type-specific
/// default attributes. Deterministic and total: the same `(kind, id)`
/// always yields the same instance, and the produced attribute bag
/// satisfies the kind's schema.
pub fn construct(kind: FieldType, id: impl Into<String>) -> FieldInstance {
    let mut field = FieldInstance::new(id, kind);
    let attrs = match kind {
        FieldType::TextField => to_value(&TextAttributes::default()),
        FieldType::TitleField => to_value(&TitleAttributes::default()),
        FieldType::SubTitleField => to_value(&TitleAttributes::subtitle_default()),
        FieldType::ParagraphField => to_value(&ParagraphAttributes::default()),
        FieldType::SeparatorField => serde_json::Value::Object(serde_json::Map::new()),
        FieldType::SpacerField => to_value(&SpacerAttributes::default()),
        FieldType::NumberField => to_value(&TextAttributes::number_default()),
        FieldType::TextAreaField => to_value(&TextAreaAttributes::default()),
        FieldType::DateField => to_value(&DateAttributes::default()),
        FieldType::SelectField => to_value(&SelectAttributes::default()),
        FieldType::CheckboxField => to_value(&CheckboxAttributes::default()),
        FieldType::ImageUploadField => to_value(&ImageUploadAttributes::default()),
        FieldType::RatingScaleField => to_value(&RatingScaleAttributes::default()),
        FieldType::DualImageUpload => to_value(&DualImageUploadAttributes::default()),
        FieldType::PictureSelectField => to_value(&PictureSelectAttributes::default()),
    };
    field.extra_attributes = attrs;
    field
}

fn to_value<T: serde::Serialize>(attrs: &T) -> serde_json::Value {
    // Default attribute structs serialize infallibly.
    serde_json::to_value(attrs).unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
}

/// Whether a kind captures a submission value (as opposed to being
/// display-only layout).
pub const fn is_input(kind: FieldType) -> bool {
    !matches!(
        kind,
        FieldType::TitleField
            | FieldType::SubTitleField
            | FieldType::ParagraphField
            | FieldType::SeparatorField
            | FieldType::SpacerField
    )
}

/// The designer-palette label for a kind.
pub const fn palette_label(kind: FieldType) -> &'static str {
    match kind {
        FieldType::TextField => "Text Field",
        FieldType::TitleField => "Title Field",
        FieldType::SubTitleField => "SubTitle Field",
        FieldType::ParagraphField => "Paragraph Field",
        FieldType::SeparatorField => "Separator Field",
        FieldType::SpacerField => "Spacer Field",
        FieldType::NumberField => "Number Field",
        FieldType::TextAreaField => "TextArea Field",
        FieldType::DateField => "Date Field",
        FieldType::SelectField => "Select Field",
        FieldType::CheckboxField => "Checkbox Field",
        FieldType::ImageUploadField => "Image Upload",
        FieldType::RatingScaleField => "Rating Scale",
        FieldType::DualImageUpload => "Dual Image Upload",
        FieldType::PictureSelectField => "Picture Select",
    }
}

/// Decides whether a submitted value satisfies the field.
///
/// Returns `false` only when the field is marked required and the value is
/// empty for the kind's shape; optional fields and display-only kinds
/// always pass. Emptiness is representation-specific:
///
/// - text-like kinds (and image uploads, whose value is a data URL): an
///   absent value or empty string is empty — a rating serialized as a
///   number-in-a-string like `"0"` is *not* empty;
/// - checkboxes: anything but an affirmative capture is empty;
/// - rating scales and picture selections: no selection is empty;
/// - dual image uploads: empty until both sides are captured.
pub fn validate(instance: &FieldInstance, value: Option<&SubmissionValue>) -> bool {
    if !instance.required() {
        return true;
    }
    match instance.kind {
        FieldType::TitleField
        | FieldType::SubTitleField
        | FieldType::ParagraphField
        | FieldType::SeparatorField
        | FieldType::SpacerField => true,

        FieldType::TextField
        | FieldType::NumberField
        | FieldType::TextAreaField
        | FieldType::DateField
        | FieldType::SelectField
        | FieldType::ImageUploadField => {
            matches!(value, Some(SubmissionValue::Text(s)) if !s.is_empty())
        }

        FieldType::CheckboxField => match value {
            Some(SubmissionValue::Bool(checked)) => *checked,
            Some(SubmissionValue::Text(s)) => s == "true",
            _ => false,
        },

        FieldType::RatingScaleField => match value {
            Some(SubmissionValue::Rating { .. }) => true,
            Some(SubmissionValue::Text(s)) => !s.is_empty(),
            _ => false,
        },

        FieldType::PictureSelectField => match value {
            Some(SubmissionValue::PictureChoice { url, .. }) => !url.is_empty(),
            Some(SubmissionValue::Text(s)) => !s.is_empty(),
            _ => false,
        },

        FieldType::DualImageUpload => matches!(
            value,
            Some(SubmissionValue::ImagePair {
                left: Some(left),
                right: Some(right),
            }) if !left.is_empty() && !right.is_empty()
        ),
    }
}

/// Validates an instance's attribute bag against its kind's schema.
pub fn check_attributes(instance: &FieldInstance) -> QuickformResult<()> {
    match instance.kind {
        FieldType::TextField | FieldType::NumberField => {
            TextAttributes::of(instance)?.check(instance)
        }
        FieldType::TitleField | FieldType::SubTitleField => {
            TitleAttributes::of(instance)?.check(instance)
        }
        FieldType::ParagraphField => ParagraphAttributes::of(instance)?.check(instance),
        FieldType::SeparatorField => Ok(()),
        FieldType::SpacerField => SpacerAttributes::of(instance)?.check(instance),
        FieldType::TextAreaField => TextAreaAttributes::of(instance)?.check(instance),
        FieldType::DateField => DateAttributes::of(instance)?.check(instance),
        FieldType::SelectField => SelectAttributes::of(instance)?.check(instance),
        FieldType::CheckboxField => CheckboxAttributes::of(instance)?.check(instance),
        FieldType::ImageUploadField => ImageUploadAttributes::of(instance)?.check(instance),
        FieldType::RatingScaleField => RatingScaleAttributes::of(instance)?.check(instance),
        FieldType::DualImageUpload => DualImageUploadAttributes::of(instance)?.check(instance),
        FieldType::PictureSelectField => PictureSelectAttributes::of(instance)?.check(instance),
    }
}

/// Validates every field's attribute bag in a document.
pub fn check_document(doc: &FormContentDocument) -> QuickformResult<()> {
    doc.fields().iter().try_for_each(check_attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_sets_id_and_kind() {
        for kind in FieldType::ALL {
            let field = construct(kind, "field-1");
            assert_eq!(field.id, "field-1");
            assert_eq!(field.kind, kind);
        }
    }

    #[test]
    fn test_construct_defaults_satisfy_schema() {
        for kind in FieldType::ALL {
            let field = construct(kind, "field-1");
            assert!(
                check_attributes(&field).is_ok(),
                "default attributes for {kind} fail their schema"
            );
        }
    }

    #[test]
    fn test_construct_deterministic() {
        for kind in FieldType::ALL {
            assert_eq!(construct(kind, "x"), construct(kind, "x"));
        }
    }

    #[test]
    fn test_new_field_ids_unique() {
        let a = new_field_id();
        let b = new_field_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_kinds_are_not_inputs() {
        assert!(!is_input(FieldType::TitleField));
        assert!(!is_input(FieldType::SeparatorField));
        assert!(!is_input(FieldType::SpacerField));
        assert!(is_input(FieldType::TextField));
        assert!(is_input(FieldType::RatingScaleField));
        assert!(is_input(FieldType::DualImageUpload));
    }

    fn required(kind: FieldType) -> FieldInstance {
        let mut field = construct(kind, "f");
        if let serde_json::Value::Object(map) = &mut field.extra_attributes {
            map.insert("required".to_string(), serde_json::Value::Bool(true));
        }
        field
    }

    #[test]
    fn test_optional_fields_always_pass() {
        for kind in FieldType::ALL {
            let field = construct(kind, "f");
            assert!(validate(&field, None), "{kind} optional absent");
            assert!(
                validate(&field, Some(&SubmissionValue::text(""))),
                "{kind} optional empty"
            );
        }
    }

    #[test]
    fn test_required_text_like() {
        for kind in [
            FieldType::TextField,
            FieldType::NumberField,
            FieldType::TextAreaField,
            FieldType::DateField,
            FieldType::SelectField,
            FieldType::ImageUploadField,
        ] {
            let field = required(kind);
            assert!(!validate(&field, None), "{kind} required absent");
            assert!(
                !validate(&field, Some(&SubmissionValue::text(""))),
                "{kind} required empty"
            );
            assert!(
                validate(&field, Some(&SubmissionValue::text("x"))),
                "{kind} required present"
            );
        }
    }

    #[test]
    fn test_required_checkbox() {
        let field = required(FieldType::CheckboxField);
        assert!(!validate(&field, None));
        assert!(!validate(&field, Some(&SubmissionValue::Bool(false))));
        assert!(validate(&field, Some(&SubmissionValue::Bool(true))));
        assert!(validate(&field, Some(&SubmissionValue::text("true"))));
        assert!(!validate(&field, Some(&SubmissionValue::text("false"))));
    }

    #[test]
    fn test_required_rating() {
        let field = required(FieldType::RatingScaleField);
        assert!(!validate(&field, None));
        assert!(!validate(&field, Some(&SubmissionValue::text(""))));
        // A rating of zero is a selection, not an empty value.
        assert!(validate(&field, Some(&SubmissionValue::text("0"))));
        assert!(validate(
            &field,
            Some(&SubmissionValue::Rating {
                value: 4,
                min_value: 1,
                max_value: 5,
            })
        ));
    }

    #[test]
    fn test_required_picture_select() {
        let field = required(FieldType::PictureSelectField);
        assert!(!validate(&field, None));
        assert!(!validate(
            &field,
            Some(&SubmissionValue::PictureChoice {
                url: String::new(),
                label: "x".to_string(),
            })
        ));
        assert!(validate(
            &field,
            Some(&SubmissionValue::PictureChoice {
                url: "https://example.com/a.png".to_string(),
                label: "A".to_string(),
            })
        ));
    }

    #[test]
    fn test_required_dual_image_needs_both_sides() {
        let field = required(FieldType::DualImageUpload);
        assert!(!validate(&field, None));
        assert!(!validate(
            &field,
            Some(&SubmissionValue::ImagePair {
                left: Some("data:image/png;base64,AA".to_string()),
                right: None,
            })
        ));
        assert!(validate(
            &field,
            Some(&SubmissionValue::ImagePair {
                left: Some("data:image/png;base64,AA".to_string()),
                right: Some("data:image/png;base64,BB".to_string()),
            })
        ));
    }

    #[test]
    fn test_required_display_kinds_still_pass() {
        // Display-only kinds never fail validation even with a stray
        // required attribute in the bag.
        for kind in [
            FieldType::TitleField,
            FieldType::SubTitleField,
            FieldType::ParagraphField,
            FieldType::SeparatorField,
            FieldType::SpacerField,
        ] {
            let field = required(kind);
            assert!(validate(&field, None), "{kind}");
        }
    }

    #[test]
    fn test_check_document() {
        let mut doc = FormContentDocument::default();
        doc.push(construct(FieldType::TextField, "a")).unwrap();
        doc.push(construct(FieldType::RatingScaleField, "b")).unwrap();
        assert!(check_document(&doc).is_ok());

        doc.update_attributes("a", serde_json::json!({"label": "x"}))
            .unwrap();
        assert!(check_document(&doc).is_err());
    }
}
