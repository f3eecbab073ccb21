//! The copy-paste embed snippet.
//!
//! Form owners paste this block into a third-party page: a container
//! element with the form's deterministic id, and a script tag pointing at
//! the bundle endpoint. The script locates the container by id when it
//! runs, so the container must appear before the script executes.

use crate::bundle::container_id;

/// The bundle endpoint path for a form.
pub fn script_url(base_url: &str, form_id: i64) -> String {
    format!("{}/api/embed/{form_id}/js", base_url.trim_end_matches('/'))
}

/// Renders the embed snippet for a form. An empty base URL produces
/// relative script URLs for same-origin embedding.
pub fn embed_snippet(base_url: &str, form_id: i64) -> String {
    format!(
        "<!-- quickform embed -->\n\
         <div id=\"{container}\"></div>\n\
         <script src=\"{script}\" async defer></script>",
        container = container_id(form_id),
        script = script_url(base_url, form_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_url() {
        assert_eq!(script_url("", 42), "/api/embed/42/js");
        assert_eq!(
            script_url("https://forms.example.com/", 42),
            "https://forms.example.com/api/embed/42/js"
        );
    }

    #[test]
    fn test_snippet_contains_container_and_script() {
        let snippet = embed_snippet("https://forms.example.com", 42);
        assert!(snippet.contains("<div id=\"quick-form-42\"></div>"));
        assert!(snippet.contains("src=\"https://forms.example.com/api/embed/42/js\""));
        assert!(snippet.contains("async defer"));
    }
}
