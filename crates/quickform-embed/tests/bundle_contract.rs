//! Dual-renderer contract tests.
//!
//! The submission renderer and the embed bundle generator are independent
//! implementations of the same field-type contracts. These tests
//! instantiate every kind through both paths and assert that the observable
//! surface stays aligned: the same fields appear, the same submission
//! names are used, the same value shapes are marshalled, and the mount
//! scaffolding honors its idempotence and join-before-submit obligations.

use quickform_embed::{container_id, generate_bundle};
use quickform_forms::registry::{construct, is_input};
use quickform_forms::{FieldType, FormContentDocument};
use quickform_render::html::render_field;

fn full_palette_doc() -> FormContentDocument {
    let fields = FieldType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| construct(*kind, format!("field-{i}")))
        .collect();
    FormContentDocument::new(fields).unwrap()
}

#[test]
fn both_renderers_accept_every_kind() {
    let doc = full_palette_doc();

    // The in-runtime path renders each field.
    for field in &doc {
        render_field(field, None, false).unwrap();
    }

    // The embed path generates code for the whole document.
    let bundle = generate_bundle(1, &doc, "").unwrap();
    assert!(!bundle.is_empty());
}

#[test]
fn both_renderers_use_the_same_submission_names() {
    let doc = full_palette_doc();
    let bundle = generate_bundle(1, &doc, "").unwrap();

    for field in &doc {
        if !is_input(field.kind) {
            continue;
        }
        let page_html = render_field(field, None, false).unwrap();

        match field.kind {
            FieldType::DualImageUpload => {
                for side in ["left", "right"] {
                    let name = format!("{}_{side}", field.id);
                    assert!(page_html.contains(&format!("name=\"{name}\"")), "page {name}");
                    assert!(bundle.contains(&format!("\"{name}\"")), "bundle {name}");
                }
            }
            _ => {
                assert!(
                    page_html.contains(&format!("name=\"{}\"", field.id)),
                    "page missing {}",
                    field.id
                );
                assert!(
                    bundle.contains(&format!("\"{}\"", field.id)),
                    "bundle missing {}",
                    field.id
                );
            }
        }
    }
}

#[test]
fn rating_value_shape_matches_across_paths() {
    let mut field = construct(FieldType::RatingScaleField, "q1");
    field.extra_attributes = serde_json::json!({"minValue": 1, "maxValue": 5});
    let doc = FormContentDocument::new(vec![field.clone()]).unwrap();

    // The page renders a hidden input whose value is the numeric selection
    // as a string; the page runtime marshals {value, minValue, maxValue}.
    let page_html = render_field(&field, None, false).unwrap();
    assert!(page_html.contains("<input type=\"hidden\" name=\"q1\""));
    assert!(page_html.contains("data-qf-min=\"1\""));
    assert!(page_html.contains("data-qf-max=\"5\""));

    // The bundle marshals the identical shape.
    let bundle = generate_bundle(1, &doc, "").unwrap();
    assert!(bundle.contains("value: parseInt(hidden.value, 10), minValue: 1, maxValue: 5"));
}

#[test]
fn picture_choice_shape_matches_across_paths() {
    let mut field = construct(FieldType::PictureSelectField, "pick");
    field.extra_attributes = serde_json::json!({
        "images": [
            {"url": "https://example.com/a.png", "label": "Option 1"},
            {"url": "https://example.com/b.png", "label": "Option 2"},
        ],
    });
    let doc = FormContentDocument::new(vec![field.clone()]).unwrap();

    let page_html = render_field(&field, None, false).unwrap();
    assert!(page_html.contains("data-qf-url=\"https://example.com/b.png\""));
    assert!(page_html.contains("data-qf-label=\"Option 2\""));

    let bundle = generate_bundle(1, &doc, "").unwrap();
    assert!(bundle.contains("selected = { url: image.url, label: image.label }"));
    assert!(bundle.contains("Option 2"));
}

#[test]
fn mount_is_guarded_and_idempotent() {
    let doc = full_palette_doc();
    let bundle = generate_bundle(42, &doc, "").unwrap();

    // Container guard: missing container logs and bails, it never throws.
    let guard = bundle.find("if (!container)").unwrap();
    let mount = bundle.find("container.appendChild(form)").unwrap();
    assert!(guard < mount);
    assert!(bundle.contains("console.error"));

    // Re-evaluation clears the stale tree and skips the style injection.
    assert!(bundle.contains("container.innerHTML = ''"));
    assert!(bundle.contains("if (!document.getElementById(\"quick-form-style-42\"))"));
    assert_eq!(container_id(42), "quick-form-42");
}

#[test]
fn encodings_join_before_the_network_call() {
    // Two image fields: both encodings must resolve before fetch fires.
    let doc = FormContentDocument::new(vec![
        construct(FieldType::ImageUploadField, "img1"),
        construct(FieldType::ImageUploadField, "img2"),
    ])
    .unwrap();
    let bundle = generate_bundle(1, &doc, "").unwrap();

    // Each image collector resolves through readFile.
    assert_eq!(
        bundle
            .matches("return readFile(input.files && input.files[0]).then")
            .count(),
        2
    );

    // The fetch lives inside the Promise.all continuation.
    let join = bundle.find("Promise.all(collectors").unwrap();
    let fetch = bundle.find("return fetch(").unwrap();
    assert!(join < fetch);
}

#[test]
fn bundle_never_runs_for_unchecked_documents() {
    // Attribute bags that fail their schema abort generation entirely; no
    // partial script is produced.
    let mut bad = construct(FieldType::RatingScaleField, "q1");
    bad.extra_attributes = serde_json::json!({"minValue": 9, "maxValue": 3});
    let doc = FormContentDocument::new(vec![bad]).unwrap();
    assert!(generate_bundle(1, &doc, "").is_err());
}

#[test]
fn namespaced_identifiers_only() {
    let doc = full_palette_doc();
    let bundle = generate_bundle(7, &doc, "").unwrap();

    // Every class the bundle assigns is namespaced.
    for piece in bundle.split("el('") {
        if let Some(rest) = piece.split_once("', '") {
            let class = rest.1.split('\'').next().unwrap_or("");
            assert!(
                class.starts_with("quick-form"),
                "unnamespaced class: {class}"
            );
        }
    }
    // The injected style element id is form-scoped.
    assert!(bundle.contains("quick-form-style-7"));
}
