//! Global brand tokens.

use serde::{Deserialize, Serialize};

use crate::PropertySet;

/// Font family applied to every generated fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// System sans-serif.
    #[default]
    Sans,
    /// Monospace.
    Mono,
    /// Serif.
    Serif,
    /// Display face.
    Display,
}

impl FontFamily {
    /// CSS `font-family` stack.
    #[must_use]
    pub const fn css_stack(self) -> &'static str {
        match self {
            Self::Sans => "sans-serif",
            Self::Mono => "monospace",
            Self::Serif => "serif",
            Self::Display => "'Outfit', sans-serif",
        }
    }
}

/// Brand tokens. Elements may override any of these per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandKit {
    /// Primary color, the default button fill.
    pub primary: String,
    /// Secondary color, the default badge tint.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Global corner radius in pixels.
    pub radius: u32,
    /// Font family.
    pub font: FontFamily,
    /// Whether the glass overlay is applied to every fragment.
    pub glass: bool,
}

impl Default for BrandKit {
    fn default() -> Self {
        Self {
            primary: "#a855f7".to_string(),
            secondary: "#6366f1".to_string(),
            accent: "#f472b6".to_string(),
            radius: 16,
            font: FontFamily::Sans,
            glass: true,
        }
    }
}

/// Brand tokens that can be pushed down into element properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandField {
    /// `radius` ← brand radius.
    Radius,
    /// `bg` ← brand primary.
    Primary,
    /// `badgeColor` ← brand secondary.
    Secondary,
}

impl BrandField {
    /// Every syncable field.
    pub const ALL: [BrandField; 3] = [Self::Radius, Self::Primary, Self::Secondary];
}

impl BrandKit {
    /// Overwrite the given fields of `props` with brand values.
    ///
    /// One-directional: whatever the element had for those fields is lost.
    #[must_use]
    pub fn synced_props(&self, props: &PropertySet, fields: &[BrandField]) -> PropertySet {
        let mut out = props.clone();
        for field in fields {
            match field {
                BrandField::Radius => out.radius = Some(self.radius),
                BrandField::Primary => out.bg = Some(self.primary.clone()),
                BrandField::Secondary => out.badge_color = Some(self.secondary.clone()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_overwrites_only_requested_fields() {
        let brand = BrandKit {
            radius: 4,
            ..BrandKit::default()
        };
        let props = PropertySet {
            radius: Some(30),
            bg: Some("#000".into()),
            ..PropertySet::default()
        };
        let synced = brand.synced_props(&props, &[BrandField::Radius]);
        assert_eq!(synced.radius, Some(4));
        assert_eq!(synced.bg.as_deref(), Some("#000"));

        let synced = brand.synced_props(&props, &BrandField::ALL);
        assert_eq!(synced.bg.as_deref(), Some("#a855f7"));
        assert_eq!(synced.badge_color.as_deref(), Some("#6366f1"));
    }

    #[test]
    fn test_brand_defaults() {
        let brand = BrandKit::default();
        assert_eq!(brand.radius, 16);
        assert!(brand.glass);
        assert_eq!(brand.font, FontFamily::Sans);
    }
}
