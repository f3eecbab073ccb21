//! Integration tests for the document model, registry contracts, and the
//! validation engine, covering:
//!
//! 1. Construction contracts for every field kind
//! 2. Document JSON round-trips
//! 3. Required/empty validation per value shape
//! 4. The rating-scale submission scenario

use quickform_forms::registry::{check_attributes, construct, is_input, validate};
use quickform_forms::validation::validate_document;
use quickform_forms::{
    FieldInstance, FieldType, FormContentDocument, SubmissionValue, SubmissionValueMap,
};

fn with_attrs(kind: FieldType, id: &str, attrs: serde_json::Value) -> FieldInstance {
    let mut field = construct(kind, id);
    field.extra_attributes = attrs;
    field
}

// ============================================================================
// Construction contracts
// ============================================================================

#[test]
fn construct_preserves_id_for_every_kind() {
    for kind in FieldType::ALL {
        let field = construct(kind, "the-id");
        assert_eq!(field.id, "the-id");
        assert_eq!(field.kind, kind);
    }
}

#[test]
fn construct_defaults_satisfy_their_own_schema() {
    for kind in FieldType::ALL {
        let field = construct(kind, "f");
        check_attributes(&field).unwrap_or_else(|e| panic!("{kind}: {e}"));
    }
}

#[test]
fn required_validation_contract_for_every_input_kind() {
    for kind in FieldType::ALL {
        if !is_input(kind) {
            continue;
        }

        let mut field = construct(kind, "f");
        if let serde_json::Value::Object(map) = &mut field.extra_attributes {
            map.insert("required".to_string(), serde_json::Value::Bool(true));
        }

        // Required and absent always fails for input kinds.
        assert!(!validate(&field, None), "{kind}: required absent");

        // A representative non-empty value always passes.
        let value = match kind {
            FieldType::CheckboxField => SubmissionValue::Bool(true),
            FieldType::RatingScaleField => SubmissionValue::Rating {
                value: 3,
                min_value: 1,
                max_value: 5,
            },
            FieldType::PictureSelectField => SubmissionValue::PictureChoice {
                url: "https://example.com/a.png".to_string(),
                label: "A".to_string(),
            },
            FieldType::DualImageUpload => SubmissionValue::ImagePair {
                left: Some("data:image/png;base64,AA".to_string()),
                right: Some("data:image/png;base64,BB".to_string()),
            },
            _ => SubmissionValue::text("value"),
        };
        assert!(validate(&field, Some(&value)), "{kind}: required present");

        // Optional fields pass either way.
        let optional = construct(kind, "f");
        assert!(validate(&optional, None), "{kind}: optional absent");
        assert!(validate(&optional, Some(&value)), "{kind}: optional present");
    }
}

// ============================================================================
// Document round-trips
// ============================================================================

#[test]
fn full_palette_document_roundtrips() {
    let fields: Vec<FieldInstance> = FieldType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| construct(*kind, format!("field-{i}")))
        .collect();
    let doc = FormContentDocument::new(fields).unwrap();

    let json = doc.to_json().unwrap();
    let back = FormContentDocument::parse(&json).unwrap();

    assert_eq!(doc, back);
    assert_eq!(back.len(), FieldType::ALL.len());
    for (original, parsed) in doc.fields().iter().zip(back.fields()) {
        assert_eq!(original.id, parsed.id);
        assert_eq!(original.kind, parsed.kind);
        assert_eq!(original.extra_attributes, parsed.extra_attributes);
    }
}

#[test]
fn persisted_wire_format_is_readable() {
    // A document as the authoring side persists it.
    let content = r#"[
        {"id":"2479","type":"TitleField","extraAttributes":{"title":"Survey"}},
        {"id":"3001","type":"RatingScaleField","extraAttributes":{
            "label":"Rating Scale","helperText":"Select a value","required":true,
            "question":"Rate your experience","minLabel":"Poor","midLabel":"Average",
            "maxLabel":"Excellent","minValue":1,"maxValue":5,
            "colorScheme":"blue","gradientScheme":null
        }}
    ]"#;
    let doc = FormContentDocument::parse(content).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.fields()[1].kind, FieldType::RatingScaleField);
    assert!(doc.fields()[1].required());
}

// ============================================================================
// The rating-scale scenario
// ============================================================================

#[test]
fn rating_scenario_no_selection_flags_field() {
    let field = with_attrs(
        FieldType::RatingScaleField,
        "q1",
        serde_json::json!({
            "label": "Rating Scale", "helperText": "Select a value",
            "required": true, "question": "Rate your experience",
            "minLabel": "Poor", "midLabel": "Average", "maxLabel": "Excellent",
            "minValue": 1, "maxValue": 5,
            "colorScheme": "blue", "gradientScheme": null,
        }),
    );
    let doc = FormContentDocument::new(vec![field]).unwrap();

    let invalid = validate_document(&doc, &SubmissionValueMap::new());
    assert_eq!(invalid.len(), 1);
    assert!(invalid.contains("q1"));
}

#[test]
fn rating_scenario_selection_marshals_exact_payload() {
    let field = with_attrs(
        FieldType::RatingScaleField,
        "q1",
        serde_json::json!({
            "required": true, "minValue": 1, "maxValue": 5,
        }),
    );
    let doc = FormContentDocument::new(vec![field]).unwrap();

    let mut values = SubmissionValueMap::new();
    values.insert(
        "q1",
        SubmissionValue::Rating {
            value: 4,
            min_value: 1,
            max_value: 5,
        },
    );

    assert!(validate_document(&doc, &values).is_empty());
    assert_eq!(
        values.to_json().unwrap(),
        r#"{"q1":{"value":4,"minValue":1,"maxValue":5}}"#
    );
}

#[test]
fn picture_select_scenario_marshals_url_and_label() {
    let mut values = SubmissionValueMap::new();
    values.insert(
        "fieldId",
        SubmissionValue::PictureChoice {
            url: "https://example.com/option2.png".to_string(),
            label: "Option 2".to_string(),
        },
    );
    assert_eq!(
        values.to_json().unwrap(),
        r#"{"fieldId":{"url":"https://example.com/option2.png","label":"Option 2"}}"#
    );
}

#[test]
fn mixed_document_reports_only_missing_required_fields() {
    let doc = FormContentDocument::new(vec![
        with_attrs(
            FieldType::TextField,
            "name",
            serde_json::json!({"label": "Name", "required": true}),
        ),
        construct(FieldType::SeparatorField, "sep"),
        with_attrs(
            FieldType::CheckboxField,
            "agree",
            serde_json::json!({"label": "Agree", "required": true}),
        ),
        construct(FieldType::TextAreaField, "notes"),
    ])
    .unwrap();

    let mut values = SubmissionValueMap::new();
    values.insert("name", SubmissionValue::text("Alice"));
    values.insert("agree", SubmissionValue::Bool(false));

    let invalid = validate_document(&doc, &values);
    assert_eq!(invalid.into_iter().collect::<Vec<_>>(), vec!["agree"]);
}
