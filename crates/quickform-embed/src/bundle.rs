//! Embed bundle assembly.
//!
//! [`generate_bundle`] turns a published form's document into one
//! self-contained script: an IIFE that mounts into the form's container
//! element, injects the fixed stylesheet, builds every field through the
//! per-kind emitters, and wires validation and submission. The script
//! never throws into the host page — a missing container logs and bails,
//! and submission failures surface as an inline message.
//!
//! Mounting is idempotent: the container is cleared before the fresh tree
//! is built (dropping any previously wired listeners with it), and the
//! stylesheet element carries a deterministic id so re-evaluation never
//! stacks duplicate style blocks.

use std::fmt::Write as _;

use quickform_core::{QuickformError, QuickformResult};
use quickform_forms::registry;
use quickform_forms::FormContentDocument;

use crate::fields::{emit_field, js_str};
use crate::stylesheet::EMBED_STYLESHEET;

/// The container element id the host page must provide for a form.
pub fn container_id(form_id: i64) -> String {
    format!("quick-form-{form_id}")
}

/// The id given to the injected stylesheet element.
pub fn style_id(form_id: i64) -> String {
    format!("quick-form-style-{form_id}")
}

/// The submission endpoint a bundle posts to. An empty base URL yields a
/// relative endpoint (same-origin embedding).
pub fn submit_endpoint(base_url: &str, form_id: i64) -> String {
    format!(
        "{}/api/submit-form/{form_id}",
        base_url.trim_end_matches('/')
    )
}

/// Generates the embeddable script for a form.
///
/// Every field's attribute bag is validated against its kind's schema
/// first; a document that fails produces an error and no partial script.
pub fn generate_bundle(
    form_id: i64,
    doc: &FormContentDocument,
    base_url: &str,
) -> QuickformResult<String> {
    registry::check_document(doc).map_err(|e| match e {
        err @ QuickformError::AttributeSchema { .. } => err,
        other => QuickformError::BundleGeneration(other.to_string()),
    })?;

    let container = js_str(&container_id(form_id));
    let style = js_str(&style_id(form_id));
    let endpoint = js_str(&submit_endpoint(base_url, form_id));

    let mut out = String::new();
    let _ = write!(
        out,
        "(function () {{\n\
         \x20 'use strict';\n\
         \x20 var container = document.getElementById({container});\n\
         \x20 if (!container) {{\n\
         \x20   console.error('quickform: container not found:', {container});\n\
         \x20   return;\n\
         \x20 }}\n\
         \x20 container.innerHTML = '';\n\
         \x20 container.className = 'quick-form-container';\n\
         \x20 if (!document.getElementById({style})) {{\n\
         \x20   var style = document.createElement('style');\n\
         \x20   style.id = {style};\n\
         \x20   style.textContent = {stylesheet};\n\
         \x20   document.head.appendChild(style);\n\
         \x20 }}\n\
         \x20 var el = function (tag, cls) {{\n\
         \x20   var node = document.createElement(tag);\n\
         \x20   if (cls) {{ node.className = cls; }}\n\
         \x20   return node;\n\
         \x20 }};\n\
         \x20 var readFile = function (file) {{\n\
         \x20   if (!file) {{ return Promise.resolve(null); }}\n\
         \x20   return new Promise(function (resolve) {{\n\
         \x20     var reader = new FileReader();\n\
         \x20     reader.onload = function (e) {{ resolve(e.target.result.toString()); }};\n\
         \x20     reader.readAsDataURL(file);\n\
         \x20   }});\n\
         \x20 }};\n\
         \x20 var form = el('form', 'quick-form');\n\
         \x20 var collectors = [];\n\
         \x20 var checks = [];\n",
        stylesheet = js_str(EMBED_STYLESHEET),
    );

    for field in doc {
        emit_field(&mut out, field)?;
    }

    let _ = write!(
        out,
        "\x20 var submitWrapper = el('div', 'quick-form-field');\n\
         \x20 var errorBox = el('div', 'quick-form-error');\n\
         \x20 errorBox.style.display = 'none';\n\
         \x20 var submitBtn = el('button', 'quick-form-submit');\n\
         \x20 submitBtn.type = 'submit';\n\
         \x20 submitBtn.textContent = 'Submit';\n\
         \x20 submitWrapper.appendChild(errorBox);\n\
         \x20 submitWrapper.appendChild(submitBtn);\n\
         \x20 form.appendChild(submitWrapper);\n\
         \x20 form.addEventListener('submit', function (event) {{\n\
         \x20   event.preventDefault();\n\
         \x20   var allValid = true;\n\
         \x20   checks.forEach(function (check) {{ if (!check()) {{ allValid = false; }} }});\n\
         \x20   if (!allValid) {{\n\
         \x20     errorBox.textContent = 'Please check the form for errors.';\n\
         \x20     errorBox.style.display = 'block';\n\
         \x20     return;\n\
         \x20   }}\n\
         \x20   errorBox.style.display = 'none';\n\
         \x20   submitBtn.disabled = true;\n\
         \x20   submitBtn.textContent = 'Submitting...';\n\
         \x20   Promise.all(collectors.map(function (collect) {{ return collect(); }}))\n\
         \x20     .then(function (entries) {{\n\
         \x20       var data = {{}};\n\
         \x20       entries.forEach(function (entry) {{ if (entry) {{ data[entry[0]] = entry[1]; }} }});\n\
         \x20       return fetch({endpoint}, {{\n\
         \x20         method: 'POST',\n\
         \x20         headers: {{ 'Content-Type': 'application/json' }},\n\
         \x20         body: JSON.stringify(data)\n\
         \x20       }});\n\
         \x20     }})\n\
         \x20     .then(function (response) {{\n\
         \x20       if (!response.ok) {{ throw new Error('Submission failed: ' + response.status); }}\n\
         \x20       form.innerHTML = '<div class=\"quick-form-field\"><h2 class=\"quick-form-subtitle\">Thank you for your submission!</h2></div>';\n\
         \x20     }})\n\
         \x20     .catch(function (error) {{\n\
         \x20       console.error('quickform: submission error:', error);\n\
         \x20       submitBtn.disabled = false;\n\
         \x20       submitBtn.textContent = 'Submit';\n\
         \x20       errorBox.textContent = 'Failed to submit form. Please try again.';\n\
         \x20       errorBox.style.display = 'block';\n\
         \x20     }});\n\
         \x20 }});\n\
         \x20 container.appendChild(form);\n\
         }})();\n"
    );

    Ok(out)
}
