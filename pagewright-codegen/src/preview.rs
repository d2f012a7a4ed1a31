//! Live preview model.
//!
//! A [`PreviewNode`] is what the editor canvas draws for one element: a tag,
//! inline declarations and the element's [`Content`]. Declarations start from
//! the same resolver the generators use and only fill in what the element
//! leaves unset, using the page theme.

use pagewright_core::{BrandKit, DocumentState, Element, ElementKind, Palette, Theme};

use crate::fragment::{tag, Content};
use crate::style::{Declaration, ResolvedStyle};

/// One element as the preview draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewNode<'a> {
    /// Component kind.
    pub kind: ElementKind,
    /// Root tag.
    pub tag: &'static str,
    /// Inline CSS declarations in application order.
    pub declarations: Vec<(&'static str, String)>,
    /// Visible content.
    pub content: Content<'a>,
}

impl PreviewNode<'_> {
    /// Value of a declaration, if present.
    #[must_use]
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Build the preview node for one element.
#[must_use]
pub fn preview<'a>(element: &'a Element, brand: Option<&BrandKit>, theme: Theme) -> PreviewNode<'a> {
    let style = ResolvedStyle::new(element, brand);
    let palette = theme.palette();

    let mut declarations: Vec<(&'static str, String)> = style
        .declarations()
        .iter()
        .filter_map(Declaration::css)
        .collect();

    let mut fill = |property: &'static str, value: String| {
        if !declarations.iter().any(|(name, _)| *name == property) {
            declarations.push((property, value));
        }
    };
    fill("border-radius", format!("{}px", style.radius()));
    fill("padding", format!("{}px", style.padding_px()));
    if let Some(bg) = surface(element.kind, &palette) {
        fill("background", bg.to_string());
    }
    fill("color", palette.text.to_string());
    fill("text-align", style.align().as_css().to_string());
    fill("font-size", format!("{}px", style.font_size().px()));
    fill("width", style.width().percent().to_string());
    fill("box-shadow", style.shadow().box_shadow().to_string());

    PreviewNode {
        kind: element.kind,
        tag: tag(element.kind),
        declarations,
        content: Content::of(element),
    }
}

/// Preview every element of a document under its own brand and theme.
#[must_use]
pub fn preview_document(state: &DocumentState) -> Vec<PreviewNode<'_>> {
    state
        .elements
        .iter()
        .map(|el| preview(el, Some(&state.brand), state.theme))
        .collect()
}

fn surface(kind: ElementKind, palette: &Palette) -> Option<&'static str> {
    match kind {
        ElementKind::Card | ElementKind::Navbar | ElementKind::Hero | ElementKind::Select => {
            Some(palette.surface)
        }
        ElementKind::Input | ElementKind::Textarea => Some(palette.border),
        ElementKind::Button
        | ElementKind::Text
        | ElementKind::Toggle
        | ElementKind::Badge
        | ElementKind::Divider
        | ElementKind::Image => None,
    }
}
