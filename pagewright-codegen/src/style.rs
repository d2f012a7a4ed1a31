//! Shared style resolution.
//!
//! Every generator and the preview resolve an element's look through
//! [`ResolvedStyle::declarations`], so a field resolves to the same value
//! whether it ends up as a stylesheet rule, a utility class or a preview
//! declaration.

use std::fmt::Write;

use pagewright_core::{
    Align, Animation, BrandKit, Element, ElementKind, FontSize, Shadow, WidthMode,
};

/// Corner radius when neither the element nor the brand sets one.
pub const DEFAULT_RADIUS: u32 = 16;

/// Padding step when the element sets none.
pub const DEFAULT_PADDING_STEP: u32 = 4;

/// Pixels per padding step.
pub const PADDING_UNIT_PX: u32 = 4;

/// Button fill when neither the element nor the brand sets one.
pub const BUTTON_FALLBACK_BG: &str = "#4f46e5";

/// Button text color when the element sets none.
pub const BUTTON_FALLBACK_FG: &str = "#ffffff";

/// Badge tint when neither the element nor the brand sets one.
pub const BADGE_FALLBACK: &str = "#6366f1";

/// Utility classes of the brand glass overlay.
pub const GLASS_CLASSES: &str = "backdrop-blur-md bg-white/5 border-white/10";

/// One resolved style field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    /// Corner radius in pixels.
    Radius(u32),
    /// Padding in pixels.
    Padding(u32),
    /// Background color.
    Background(&'a str),
    /// Gradient spec: a CSS image function or utility color stops.
    Gradient(&'a str),
    /// Text color.
    Color(&'a str),
    /// One pixel solid border in this color.
    Border(&'a str),
    /// Text alignment.
    Align(Align),
    /// Font size step.
    FontSize(FontSize),
    /// Width mode.
    Width(WidthMode),
    /// Backdrop blur in pixels.
    Blur(u32),
    /// Opacity percent.
    Opacity(u32),
    /// Shadow preset.
    Shadow(Shadow),
    /// Brand font stack.
    Font(&'static str),
    /// Entry animation and its duration in seconds.
    Animation(Animation, f32),
}

impl Declaration<'_> {
    /// CSS property and value, or `None` when the field has no plain CSS form.
    #[must_use]
    pub fn css(&self) -> Option<(&'static str, String)> {
        let pair = match *self {
            Self::Radius(px) => ("border-radius", format!("{px}px")),
            Self::Padding(px) => ("padding", format!("{px}px")),
            Self::Background(color) => ("background", color.to_string()),
            Self::Gradient(spec) => {
                if !is_css_function(spec) {
                    return None;
                }
                ("background-image", spec.to_string())
            }
            Self::Color(color) => ("color", color.to_string()),
            Self::Border(color) => ("border", format!("1px solid {color}")),
            Self::Align(align) => ("text-align", align.as_css().to_string()),
            Self::FontSize(size) => ("font-size", format!("{}px", size.px())),
            Self::Width(width) => ("width", width.percent().to_string()),
            Self::Blur(px) => ("backdrop-filter", format!("blur({px}px)")),
            Self::Opacity(percent) => ("opacity", opacity_fraction(percent)),
            Self::Shadow(shadow) => ("box-shadow", shadow.box_shadow().to_string()),
            Self::Font(stack) => ("font-family", stack.to_string()),
            Self::Animation(animation, secs) => {
                ("animation", format!("{} {secs}s ease-out", animation.name()))
            }
        };
        Some(pair)
    }

    /// Utility class expressing the same value.
    #[must_use]
    pub fn utility_class(&self) -> String {
        match *self {
            Self::Radius(px) => format!("rounded-[{px}px]"),
            Self::Padding(px) => format!("p-[{px}px]"),
            Self::Background(color) => format!("bg-[{}]", arbitrary(color)),
            Self::Gradient(spec) => {
                if is_css_function(spec) {
                    format!("bg-[{}]", arbitrary(spec))
                } else {
                    format!("bg-gradient-to-r {spec}")
                }
            }
            Self::Color(color) => format!("text-[{}]", arbitrary(color)),
            Self::Border(color) => format!("border border-[{}]", arbitrary(color)),
            Self::Align(align) => format!("text-{}", align.as_css()),
            Self::FontSize(size) => format!("text-[{}px]", size.px()),
            Self::Width(WidthMode::Half) => "w-1/2".to_string(),
            Self::Width(WidthMode::Auto | WidthMode::Full) => "w-full".to_string(),
            Self::Blur(px) => format!("backdrop-blur-[{px}px]"),
            Self::Opacity(percent) => format!("opacity-[{}]", opacity_fraction(percent)),
            Self::Shadow(Shadow::None) => "shadow-none".to_string(),
            Self::Shadow(shadow) => format!("shadow-[{}]", arbitrary(shadow.box_shadow())),
            Self::Font(stack) => format!("font-[{}]", arbitrary(stack)),
            Self::Animation(animation, secs) => {
                format!("animate-[{}_{secs}s_ease-out]", animation.name())
            }
        }
    }
}

/// Effective style values for one element under an optional brand.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStyle<'a> {
    element: &'a Element,
    brand: Option<&'a BrandKit>,
}

impl<'a> ResolvedStyle<'a> {
    /// Resolve `element` against `brand`.
    #[must_use]
    pub fn new(element: &'a Element, brand: Option<&'a BrandKit>) -> Self {
        Self { element, brand }
    }

    /// The element being resolved.
    #[must_use]
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Element radius, then brand radius, then [`DEFAULT_RADIUS`].
    #[must_use]
    pub fn radius(&self) -> u32 {
        self.explicit_radius().unwrap_or(DEFAULT_RADIUS)
    }

    fn explicit_radius(&self) -> Option<u32> {
        self.element
            .props
            .radius
            .or_else(|| self.brand.map(|b| b.radius))
    }

    /// Padding in pixels.
    #[must_use]
    pub fn padding_px(&self) -> u32 {
        self.element.props.padding.unwrap_or(DEFAULT_PADDING_STEP) * PADDING_UNIT_PX
    }

    /// Alignment, with the kind default applied.
    #[must_use]
    pub fn align(&self) -> Align {
        self.element.align()
    }

    /// Font size step.
    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.element.props.font_size.unwrap_or_default()
    }

    /// Width mode.
    #[must_use]
    pub fn width(&self) -> WidthMode {
        self.element.props.width.unwrap_or_default()
    }

    /// Shadow preset.
    #[must_use]
    pub fn shadow(&self) -> Shadow {
        self.element.props.shadow.unwrap_or_default()
    }

    /// Badge tint: badge color, background, brand secondary, fallback.
    #[must_use]
    pub fn badge_tint(&self) -> &'a str {
        let props = &self.element.props;
        props
            .badge()
            .or_else(|| props.background())
            .or_else(|| self.brand.map(|b| b.secondary.as_str()))
            .unwrap_or(BADGE_FALLBACK)
    }

    /// Background color after kind resolution.
    ///
    /// Buttons always have a fill; badges use their tint.
    #[must_use]
    pub fn background(&self) -> Option<&'a str> {
        let props = &self.element.props;
        match self.element.kind {
            ElementKind::Button => Some(
                props
                    .background()
                    .or_else(|| self.brand.map(|b| b.primary.as_str()))
                    .unwrap_or(BUTTON_FALLBACK_BG),
            ),
            ElementKind::Badge => props.badge().or_else(|| props.background()),
            _ => props.background(),
        }
    }

    /// Text color after kind resolution.
    #[must_use]
    pub fn text_color(&self) -> Option<&'a str> {
        let props = &self.element.props;
        match self.element.kind {
            ElementKind::Button => Some(props.text_color().unwrap_or(BUTTON_FALLBACK_FG)),
            ElementKind::Badge => Some(props.text_color().unwrap_or_else(|| self.badge_tint())),
            _ => props.text_color(),
        }
    }

    /// Brand font stack, when a brand is in effect.
    #[must_use]
    pub fn font_family(&self) -> Option<&'static str> {
        self.brand.map(|b| b.font.css_stack())
    }

    /// Whether the brand glass overlay applies.
    #[must_use]
    pub fn glass(&self) -> bool {
        self.brand.is_some_and(|b| b.glass)
    }

    /// Every field that is set on the element or resolved from its kind or
    /// the brand, in stylesheet order. Fields left to renderer defaults are
    /// absent.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration<'a>> {
        let props = &self.element.props;
        let mut out = Vec::new();

        if let Some(radius) = self.explicit_radius() {
            out.push(Declaration::Radius(radius));
        }
        if props.padding.is_some() {
            out.push(Declaration::Padding(self.padding_px()));
        }
        if let Some(bg) = self.background() {
            out.push(Declaration::Background(bg));
        }
        if let Some(gradient) = props.gradient_spec() {
            out.push(Declaration::Gradient(gradient));
        }
        if let Some(color) = self.text_color() {
            out.push(Declaration::Color(color));
        }
        if let Some(border) = props.border() {
            out.push(Declaration::Border(border));
        }
        if props.align.is_some() || self.align() != Align::Left {
            out.push(Declaration::Align(self.align()));
        }
        if let Some(size) = props.font_size {
            out.push(Declaration::FontSize(size));
        }
        if let Some(width) = props.width {
            out.push(Declaration::Width(width));
        }
        if let Some(blur) = props.blur_px() {
            out.push(Declaration::Blur(blur));
        }
        if let Some(opacity) = props.opacity {
            out.push(Declaration::Opacity(opacity));
        }
        if let Some(shadow) = props.shadow {
            out.push(Declaration::Shadow(shadow));
        }
        if let Some(font) = self.font_family() {
            out.push(Declaration::Font(font));
        }
        if let Some((animation, secs)) = props.entry_animation() {
            out.push(Declaration::Animation(animation, secs));
        }
        out
    }

    /// Utility classes for the element: the resolved declarations followed
    /// by the glass overlay when the brand asks for it.
    #[must_use]
    pub fn utility_classes(&self) -> String {
        let mut classes = String::new();
        for decl in self.declarations() {
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(&decl.utility_class());
        }
        if self.glass() {
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(GLASS_CLASSES);
        }
        classes
    }
}

/// Stylesheet selector for an element: `.el-` plus the id with every
/// character outside `[A-Za-z0-9]` replaced by `-`.
#[must_use]
pub fn selector(element: &Element) -> String {
    format!(".{}", class_name(element))
}

/// Class name matching [`selector`].
#[must_use]
pub fn class_name(element: &Element) -> String {
    let sanitized: String = element
        .id
        .as_str()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("el-{sanitized}")
}

/// Escape text for use as element content or an attribute value in both
/// markup and component source.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render declarations as `property: value;` lines with the given indent.
#[must_use]
pub fn css_block(declarations: &[(&'static str, String)], indent: &str) -> String {
    let mut out = String::new();
    for (property, value) in declarations {
        let _ = writeln!(out, "{indent}{property}: {value};");
    }
    out
}

fn is_css_function(spec: &str) -> bool {
    spec.contains('(')
}

fn arbitrary(value: &str) -> String {
    value.replace(' ', "_")
}

fn opacity_fraction(percent: u32) -> String {
    (f64::from(percent) / 100.0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::{ElementId, FontFamily, PropertySet};

    fn element(kind: ElementKind, props: PropertySet) -> Element {
        Element {
            id: ElementId::from("node-1"),
            kind,
            label: "Label".to_string(),
            props,
        }
    }

    #[test]
    fn test_radius_prefers_element_then_brand() {
        let brand = BrandKit {
            radius: 8,
            ..BrandKit::default()
        };
        let bare = element(ElementKind::Card, PropertySet::default());
        assert_eq!(ResolvedStyle::new(&bare, None).radius(), DEFAULT_RADIUS);
        assert_eq!(ResolvedStyle::new(&bare, Some(&brand)).radius(), 8);

        let own = element(
            ElementKind::Card,
            PropertySet {
                radius: Some(30),
                ..PropertySet::default()
            },
        );
        assert_eq!(ResolvedStyle::new(&own, Some(&brand)).radius(), 30);
    }

    #[test]
    fn test_button_fill_falls_back_through_brand() {
        let brand = BrandKit::default();
        let button = element(ElementKind::Button, PropertySet::default());
        assert_eq!(
            ResolvedStyle::new(&button, Some(&brand)).background(),
            Some("#a855f7")
        );
        assert_eq!(
            ResolvedStyle::new(&button, None).background(),
            Some(BUTTON_FALLBACK_BG)
        );
        assert_eq!(
            ResolvedStyle::new(&button, None).text_color(),
            Some(BUTTON_FALLBACK_FG)
        );
    }

    #[test]
    fn test_badge_tint_order() {
        let brand = BrandKit::default();
        let plain = element(ElementKind::Badge, PropertySet::default());
        assert_eq!(ResolvedStyle::new(&plain, None).badge_tint(), BADGE_FALLBACK);
        assert_eq!(ResolvedStyle::new(&plain, Some(&brand)).badge_tint(), "#6366f1");

        let tinted = element(
            ElementKind::Badge,
            PropertySet {
                bg: Some("#10b981".to_string()),
                badge_color: Some("#f59e0b".to_string()),
                ..PropertySet::default()
            },
        );
        let resolved = ResolvedStyle::new(&tinted, None);
        assert_eq!(resolved.badge_tint(), "#f59e0b");
        assert_eq!(resolved.background(), Some("#f59e0b"));
    }

    #[test]
    fn test_absent_fields_have_no_declaration() {
        let text = element(ElementKind::Text, PropertySet::default());
        assert!(ResolvedStyle::new(&text, None).declarations().is_empty());

        let hero = element(ElementKind::Hero, PropertySet::default());
        assert_eq!(
            ResolvedStyle::new(&hero, None).declarations(),
            vec![Declaration::Align(Align::Center)]
        );
    }

    #[test]
    fn test_zero_blur_is_omitted() {
        let text = element(
            ElementKind::Text,
            PropertySet {
                blur: Some(0),
                ..PropertySet::default()
            },
        );
        assert!(ResolvedStyle::new(&text, None).declarations().is_empty());
    }

    #[test]
    fn test_css_and_utility_agree() {
        assert_eq!(
            Declaration::Opacity(60).css(),
            Some(("opacity", "0.6".to_string()))
        );
        assert_eq!(Declaration::Opacity(60).utility_class(), "opacity-[0.6]");
        assert_eq!(
            Declaration::Padding(16).css(),
            Some(("padding", "16px".to_string()))
        );
        assert_eq!(
            Declaration::Shadow(Shadow::Glow).utility_class(),
            "shadow-[0_0_20px_rgba(168,85,247,0.4)]"
        );
        assert_eq!(
            Declaration::Gradient("linear-gradient(to right, #a855f7, #6366f1)").utility_class(),
            "bg-[linear-gradient(to_right,_#a855f7,_#6366f1)]"
        );
        assert_eq!(Declaration::Gradient("from-sky-500 to-cyan-400").css(), None);
    }

    #[test]
    fn test_glass_and_font_from_brand() {
        let brand = BrandKit {
            font: FontFamily::Mono,
            glass: true,
            ..BrandKit::default()
        };
        let text = element(ElementKind::Text, PropertySet::default());
        let classes = ResolvedStyle::new(&text, Some(&brand)).utility_classes();
        assert!(classes.contains("font-[monospace]"));
        assert!(classes.ends_with(GLASS_CLASSES));
    }

    #[test]
    fn test_selector_is_sanitized() {
        let mut el = element(ElementKind::Text, PropertySet::default());
        el.id = ElementId::from("node-ab12.3/x");
        assert_eq!(selector(&el), ".el-node-ab12-3-x");
    }

    #[test]
    fn test_escape_covers_markup_and_jsx() {
        assert_eq!(
            escape(r#"<a href="x">{y} & 'z'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#123;y&#125; &amp; &#39;z&#39;&lt;/a&gt;"
        );
    }
}
