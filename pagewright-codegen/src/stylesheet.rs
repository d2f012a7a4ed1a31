//! Stylesheet export: one rule per element.

use std::fmt::Write;

use pagewright_core::{BrandKit, Element};

use crate::style::{self, Declaration, ResolvedStyle};

/// First line of every generated stylesheet.
pub const HEADER: &str = "/* Generated by Pagewright */";

/// Emitted in place of rules when the document is empty.
pub const EMPTY_PLACEHOLDER: &str = "/* No elements yet */";

/// Render one rule per element, keyed by [`style::selector`].
///
/// Only fields the element sets, or that its kind or the brand resolve,
/// produce a declaration. Kind-resolved values are the exception to
/// omitting absent fields: a button always gets its fill and text color,
/// a badge its tint as text color, and a hero `text-align: center`, so
/// the stylesheet matches what the preview draws.
#[must_use]
pub fn generate<E: AsRef<Element>>(elements: &[E], brand: Option<&BrandKit>) -> String {
    let mut out = String::new();
    let _ = write!(out, "{HEADER}\n\n");

    if elements.is_empty() {
        let _ = writeln!(out, "{EMPTY_PLACEHOLDER}");
        return out;
    }

    let rules: Vec<String> = elements
        .iter()
        .map(|el| rule(el.as_ref(), brand))
        .collect();
    let _ = writeln!(out, "{}", rules.join("\n\n"));
    out
}

/// Render the rule for one element.
#[must_use]
pub fn rule(element: &Element, brand: Option<&BrandKit>) -> String {
    let declarations: Vec<_> = ResolvedStyle::new(element, brand)
        .declarations()
        .iter()
        .filter_map(Declaration::css)
        .collect();
    format!(
        "{} {{\n{}}}",
        style::selector(element),
        style::css_block(&declarations, "  ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::{ElementId, ElementKind, FontSize, PropertySet, Shadow, WidthMode};

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(
            generate::<Element>(&[], None),
            "/* Generated by Pagewright */\n\n/* No elements yet */\n"
        );
    }

    #[test]
    fn test_rule_translates_fields() {
        let el = Element {
            id: ElementId::from("ai-x1-3"),
            kind: ElementKind::Text,
            label: "Hi".to_string(),
            props: PropertySet {
                radius: Some(12),
                padding: Some(2),
                font_size: Some(FontSize::Xxl),
                width: Some(WidthMode::Half),
                blur: Some(6),
                opacity: Some(50),
                shadow: Some(Shadow::Soft),
                border_color: Some("#fff".to_string()),
                ..PropertySet::default()
            },
        };
        assert_eq!(
            rule(&el, None),
            ".el-ai-x1-3 {\n  border-radius: 12px;\n  padding: 8px;\n  border: 1px solid #fff;\n  font-size: 28px;\n  width: 50%;\n  backdrop-filter: blur(6px);\n  opacity: 0.5;\n  box-shadow: 0 4px 12px rgba(0,0,0,0.1);\n}"
        );
    }

    #[test]
    fn test_absent_fields_omitted() {
        let el = Element {
            id: ElementId::from("n"),
            kind: ElementKind::Text,
            label: String::new(),
            props: PropertySet::default(),
        };
        assert_eq!(rule(&el, None), ".el-n {\n}");
    }

    #[test]
    fn test_kind_resolved_values_are_emitted() {
        let bare = |kind| Element {
            id: ElementId::from("n"),
            kind,
            label: String::new(),
            props: PropertySet::default(),
        };
        assert_eq!(
            rule(&bare(ElementKind::Button), None),
            ".el-n {\n  background: #4f46e5;\n  color: #ffffff;\n}"
        );
        assert_eq!(
            rule(&bare(ElementKind::Badge), None),
            ".el-n {\n  color: #6366f1;\n}"
        );
        assert_eq!(
            rule(&bare(ElementKind::Hero), None),
            ".el-n {\n  text-align: center;\n}"
        );
    }
}
