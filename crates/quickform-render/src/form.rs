//! The submission-form state machine.
//!
//! A [`SubmissionForm`] holds the document, the selected theme, and the
//! captured value map and error set. State lives outside the rendered
//! markup, so a re-render after a validation failure keeps every entered
//! value. Once a submission is accepted the form is terminal for its
//! lifetime; rendering yields the thank-you view and further submits are
//! rejected.

use std::collections::BTreeSet;

use quickform_core::{QuickformError, QuickformResult};
use quickform_forms::themes::{theme, Theme};
use quickform_forms::validation::validate_document;
use quickform_forms::{FormContentDocument, SubmissionValueMap};

use crate::html::render_field;
use crate::page;

/// The result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; the serialized payload is ready for the
    /// submission sink and the form is now terminal.
    Accepted {
        /// The JSON-encoded value map.
        payload: String,
    },
    /// One or more fields failed validation; the form stays interactive
    /// with the captured values intact.
    Invalid {
        /// Ids of the failing fields.
        fields: BTreeSet<String>,
    },
}

/// One in-flight submission session for a form.
pub struct SubmissionForm {
    doc: FormContentDocument,
    theme: &'static Theme,
    values: SubmissionValueMap,
    errors: BTreeSet<String>,
    submitted: bool,
}

impl SubmissionForm {
    /// Creates a fresh session for a document with the named theme
    /// (unknown names fall back to the default theme).
    pub fn new(doc: FormContentDocument, theme_name: &str) -> Self {
        Self {
            doc,
            theme: theme(theme_name),
            values: SubmissionValueMap::new(),
            errors: BTreeSet::new(),
            submitted: false,
        }
    }

    /// The document being rendered.
    pub fn document(&self) -> &FormContentDocument {
        &self.doc
    }

    /// The resolved theme.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// The captured values so far.
    pub fn values(&self) -> &SubmissionValueMap {
        &self.values
    }

    /// The error set from the latest submit attempt.
    pub fn errors(&self) -> &BTreeSet<String> {
        &self.errors
    }

    /// Whether a submission has been accepted.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Absorbs captured values. Later captures replace earlier ones per
    /// field; fields absent from `values` keep what was entered before.
    pub fn bind(&mut self, values: SubmissionValueMap) {
        for (field_id, value) in values.iter() {
            self.values.insert(field_id.clone(), value.clone());
        }
    }

    /// Runs the full validation pass and either accepts the submission or
    /// reports every failing field at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is already in its terminal state; a
    /// fresh session is required to submit again.
    pub fn submit(&mut self) -> QuickformResult<SubmitOutcome> {
        if self.submitted {
            return Err(QuickformError::BadRequest(
                "form already submitted".to_string(),
            ));
        }

        self.errors = validate_document(&self.doc, &self.values);
        if !self.errors.is_empty() {
            return Ok(SubmitOutcome::Invalid {
                fields: self.errors.clone(),
            });
        }

        let payload = self.values.to_json()?;
        self.submitted = true;
        Ok(SubmitOutcome::Accepted { payload })
    }

    /// Renders the form body: every field in document order with its
    /// current value and error styling, or the terminal view once a
    /// submission has been accepted.
    pub fn render_body(&self) -> QuickformResult<String> {
        if self.submitted {
            return Ok(page::terminal_body());
        }

        let mut body = String::new();
        for field in &self.doc {
            let value = self.values.get(&field.id);
            let invalid = self.errors.contains(&field.id);
            body.push_str(&render_field(field, value, invalid)?);
        }
        Ok(body)
    }

    /// Renders the complete submission page for this session.
    pub fn render_page(&self, submit_url: &str) -> QuickformResult<String> {
        page::render_page(self, submit_url)
    }
}
