//! Rating-scale color schemes.
//!
//! A rating scale is colored either by a solid scheme (one color family for
//! every position) or a gradient scheme (three color families bucketed by
//! the normalized position within the range). The scheme tables are
//! immutable configuration data, loaded once and exposed as read-only
//! lookups.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The solid color schemes selectable on a rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SolidScheme {
    /// The designer default.
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Amber,
}

impl SolidScheme {
    /// Every solid scheme, in palette order.
    pub const ALL: [Self; 5] = [Self::Blue, Self::Green, Self::Purple, Self::Red, Self::Amber];

    /// The scheme's wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Amber => "amber",
        }
    }
}

/// The gradient color schemes selectable on a rating scale.
///
/// A gradient scheme orders three color families from the low end of the
/// scale to the high end (e.g. `severity` runs green -> yellow -> red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientScheme {
    Severity,
    Satisfaction,
    Temperature,
}

impl GradientScheme {
    /// Every gradient scheme.
    pub const ALL: [Self; 3] = [Self::Severity, Self::Satisfaction, Self::Temperature];

    /// The scheme's wire name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Satisfaction => "satisfaction",
            Self::Temperature => "temperature",
        }
    }

    /// The three color families, low position first.
    pub fn families(self) -> [&'static ColorFamily; 3] {
        let names = match self {
            Self::Severity => ["green", "yellow", "red"],
            Self::Satisfaction => ["red", "yellow", "green"],
            Self::Temperature => ["blue", "green", "red"],
        };
        names.map(family)
    }
}

/// A color family's shades used by the rating widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFamily {
    /// Family name ("blue", "yellow", ...).
    pub name: &'static str,
    /// Fill of a selected button.
    pub selected_bg: &'static str,
    /// Border of a selected button.
    pub selected_border: &'static str,
    /// Border shown on hover.
    pub hover_border: &'static str,
    /// Label text color.
    pub text: &'static str,
}

static FAMILIES: Lazy<BTreeMap<&'static str, ColorFamily>> = Lazy::new(|| {
    let families = [
        ColorFamily {
            name: "blue",
            selected_bg: "#3b82f6",
            selected_border: "#2563eb",
            hover_border: "#60a5fa",
            text: "#2563eb",
        },
        ColorFamily {
            name: "green",
            selected_bg: "#22c55e",
            selected_border: "#16a34a",
            hover_border: "#4ade80",
            text: "#16a34a",
        },
        ColorFamily {
            name: "purple",
            selected_bg: "#a855f7",
            selected_border: "#9333ea",
            hover_border: "#c084fc",
            text: "#9333ea",
        },
        ColorFamily {
            name: "red",
            selected_bg: "#ef4444",
            selected_border: "#dc2626",
            hover_border: "#f87171",
            text: "#dc2626",
        },
        ColorFamily {
            name: "amber",
            selected_bg: "#f59e0b",
            selected_border: "#d97706",
            hover_border: "#fbbf24",
            text: "#d97706",
        },
        ColorFamily {
            name: "yellow",
            selected_bg: "#eab308",
            selected_border: "#ca8a04",
            hover_border: "#facc15",
            text: "#ca8a04",
        },
    ];
    families.into_iter().map(|f| (f.name, f)).collect()
});

/// Looks up a color family by name.
///
/// # Panics
///
/// Panics if the name is not in the static table; scheme enums only produce
/// known names.
fn family(name: &'static str) -> &'static ColorFamily {
    FAMILIES
        .get(name)
        .unwrap_or_else(|| panic!("unknown color family {name}"))
}

/// Where a scale label sits (used to pick the label color under a gradient).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Start,
    Middle,
    End,
}

/// How rating buttons and labels are colored: a fixed family, or a
/// three-way bucketing of the normalized position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColorPolicy {
    Solid(SolidScheme),
    Gradient(GradientScheme),
}

impl RatingColorPolicy {
    /// Resolves the policy from the persisted attribute pair; a gradient
    /// scheme takes precedence over the solid scheme when both are set.
    pub fn from_attributes(solid: SolidScheme, gradient: Option<GradientScheme>) -> Self {
        gradient.map_or(Self::Solid(solid), Self::Gradient)
    }

    /// The color family for one scale position.
    ///
    /// Gradient bucketing: normalized position `<= 0.33` takes the first
    /// family, `<= 0.66` the second, the rest the third. A degenerate range
    /// (`max <= min`) buckets everything into the first family.
    pub fn color_for(self, value: i64, min_value: i64, max_value: i64) -> &'static ColorFamily {
        match self {
            Self::Solid(scheme) => family(scheme.name()),
            Self::Gradient(scheme) => {
                let families = scheme.families();
                if max_value <= min_value {
                    return families[0];
                }
                #[allow(clippy::cast_precision_loss)]
                let position = (value - min_value) as f64 / (max_value - min_value) as f64;
                if position <= 0.33 {
                    families[0]
                } else if position <= 0.66 {
                    families[1]
                } else {
                    families[2]
                }
            }
        }
    }

    /// The label text color for one of the three scale labels.
    pub fn label_color(self, position: LabelPosition) -> &'static str {
        match self {
            Self::Solid(scheme) => family(scheme.name()).text,
            Self::Gradient(scheme) => {
                let families = scheme.families();
                match position {
                    LabelPosition::Start => families[0].text,
                    LabelPosition::Middle => families[1].text,
                    LabelPosition::End => families[2].text,
                }
            }
        }
    }
}
