//! The validation engine.
//!
//! A pure pass over a document and a value map, delegating per-field logic
//! to [`registry::validate`](crate::registry::validate). Failures
//! accumulate rather than short-circuiting, so every invalid field is
//! reported at once.

use std::collections::BTreeSet;

use crate::element::FormContentDocument;
use crate::registry;
use crate::value::SubmissionValueMap;

/// Returns the ids of every field whose submitted value fails its kind's
/// validation rule. An empty set means the submission is acceptable.
pub fn validate_document(
    doc: &FormContentDocument,
    values: &SubmissionValueMap,
) -> BTreeSet<String> {
    doc.fields()
        .iter()
        .filter(|field| !registry::validate(field, values.get(&field.id)))
        .map(|field| field.id.clone())
        .collect()
}
