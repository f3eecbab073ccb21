//! Named form themes.
//!
//! A theme is a named bundle of style references applied to a rendered
//! form. The table is immutable configuration data: loaded once, exposed
//! as a read-only lookup by name, with unknown names falling back to the
//! default theme.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The style references of one theme. Values are CSS colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyles {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub input: &'static str,
    pub primary: &'static str,
    pub primary_text: &'static str,
    pub muted: &'static str,
}

/// A named style bundle selectable per form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Lookup key (e.g. "modern").
    pub name: &'static str,
    /// Human-readable name (e.g. "Modern").
    pub display_name: &'static str,
    pub styles: ThemeStyles,
}

static THEMES: Lazy<BTreeMap<&'static str, Theme>> = Lazy::new(|| {
    let themes = [
        Theme {
            name: "default",
            display_name: "Default",
            styles: ThemeStyles {
                background: "#ffffff",
                text: "#111827",
                border: "#e5e7eb",
                input: "#d1d5db",
                primary: "#6366f1",
                primary_text: "#ffffff",
                muted: "#6b7280",
            },
        },
        Theme {
            name: "modern",
            display_name: "Modern",
            styles: ThemeStyles {
                background: "#fafafa",
                text: "#18181b",
                border: "#e4e4e7",
                input: "#d4d4d8",
                primary: "#4f46e5",
                primary_text: "#ffffff",
                muted: "#71717a",
            },
        },
        Theme {
            name: "elegant",
            display_name: "Elegant",
            styles: ThemeStyles {
                background: "#fafaf9",
                text: "#1c1917",
                border: "#e7e5e4",
                input: "#d6d3d1",
                primary: "#d97706",
                primary_text: "#ffffff",
                muted: "#78716c",
            },
        },
    ];
    themes.into_iter().map(|t| (t.name, t)).collect()
});

/// Looks up a theme by name, falling back to the default theme.
pub fn theme(name: &str) -> &'static Theme {
    THEMES
        .get(name)
        .unwrap_or_else(|| &THEMES["default"])
}

/// The available theme names, in lookup order.
pub fn theme_names() -> Vec<&'static str> {
    THEMES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_themes() {
        assert_eq!(theme("default").display_name, "Default");
        assert_eq!(theme("modern").display_name, "Modern");
        assert_eq!(theme("elegant").display_name, "Elegant");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(theme("brutalist").name, "default");
        assert_eq!(theme("").name, "default");
    }

    #[test]
    fn test_theme_names() {
        let names = theme_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"default"));
        assert!(names.contains(&"modern"));
        assert!(names.contains(&"elegant"));
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(theme("default").styles.primary, theme("elegant").styles.primary);
    }
}
