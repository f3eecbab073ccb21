//! # quickform Feedback Demo
//!
//! A runnable feedback-survey deployment demonstrating the quickform
//! pipeline end to end:
//!
//! - a published form content document built through the field registry
//! - the hosted submission page at `/submit/customer-feedback`
//! - the embed bundle at `/api/embed/1/js` with its copy-paste snippet
//! - the cross-origin submission sink at `/api/submit-form/1`
//!
//! ## Running
//!
//! ```bash
//! cargo run --package feedback-demo -- --addr 127.0.0.1:8000
//! ```

use std::sync::Arc;

use clap::Parser;

use quickform_core::logging::setup_logging;
use quickform_core::settings_loader;
use quickform_embed::embed_snippet;
use quickform_forms::registry::construct;
use quickform_forms::{FieldType, FormContentDocument};
use quickform_server::{app, AppState, MemoryStore, StoredForm};

#[derive(Parser)]
#[command(name = "feedback-demo", about = "Run the quickform feedback demo server")]
struct Args {
    /// Socket address to bind (overrides settings).
    #[arg(long)]
    addr: Option<String>,

    /// Optional settings TOML file.
    #[arg(long)]
    config: Option<String>,
}

/// Builds the demo survey: a title, a name field, a rating scale with a
/// satisfaction gradient, a picture choice, and an optional screenshot
/// upload.
fn demo_document() -> FormContentDocument {
    let mut doc = FormContentDocument::default();

    let mut title = construct(FieldType::TitleField, "title");
    title.extra_attributes = serde_json::json!({"title": "Customer Feedback"});
    doc.push(title).expect("unique id");

    let mut name = construct(FieldType::TextField, "name");
    name.extra_attributes = serde_json::json!({
        "label": "Your name",
        "helperText": "So we know who to thank",
        "placeHolder": "Jane Doe",
        "required": true,
    });
    doc.push(name).expect("unique id");

    let mut rating = construct(FieldType::RatingScaleField, "satisfaction");
    rating.extra_attributes = serde_json::json!({
        "label": "Satisfaction",
        "helperText": "Select a value",
        "required": true,
        "question": "How satisfied are you with the product?",
        "minLabel": "Unhappy",
        "midLabel": "Neutral",
        "maxLabel": "Delighted",
        "minValue": 1,
        "maxValue": 10,
        "colorScheme": "blue",
        "gradientScheme": "satisfaction",
    });
    doc.push(rating).expect("unique id");

    let mut picture = construct(FieldType::PictureSelectField, "favorite");
    picture.extra_attributes = serde_json::json!({
        "label": "Favorite screen",
        "helperText": "Pick the design you like best",
        "required": false,
        "images": [
            {"url": "https://placehold.co/200x200?text=A", "label": "Option 1"},
            {"url": "https://placehold.co/200x200?text=B", "label": "Option 2"},
        ],
    });
    doc.push(picture).expect("unique id");

    let mut screenshot = construct(FieldType::ImageUploadField, "screenshot");
    screenshot.extra_attributes = serde_json::json!({
        "label": "Screenshot",
        "helperText": "Optional: show us what you saw",
        "required": false,
        "prompt": "Click to upload a screenshot",
        "buttonText": "Choose File",
        "width": "w-96",
        "height": "h-64",
        "maxDimension": 800,
    });
    doc.push(screenshot).expect("unique id");

    doc
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => settings_loader::from_toml_file_with_env(path)
            .unwrap_or_else(|e| panic!("failed to load {path}: {e}")),
        None => settings_loader::from_env(),
    };
    if let Some(addr) = args.addr {
        settings.bind_addr = addr;
    }
    setup_logging(&settings);

    let doc = demo_document();
    let store = MemoryStore::new();
    store
        .insert_form(StoredForm {
            id: 1,
            name: "Customer Feedback".to_string(),
            share_url: "customer-feedback".to_string(),
            theme: "modern".to_string(),
            published: true,
            content: doc.to_json().expect("demo document serializes"),
        })
        .await;

    tracing::info!(
        "submission page: http://{}/submit/customer-feedback",
        settings.bind_addr
    );
    tracing::info!("embed snippet:\n{}", embed_snippet(&settings.base_url, 1));

    let state = AppState::new(Arc::new(store), settings);
    if let Err(err) = app::serve(state).await {
        tracing::error!(error = %err, "server exited");
        std::process::exit(1);
    }
}
