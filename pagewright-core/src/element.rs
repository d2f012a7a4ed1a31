//! Page elements - the building blocks of a document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EditorError;

/// Unique identifier for an element.
///
/// Assigned once at creation and never reused; see [`crate::IdAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The closed set of component kinds a page can hold.
///
/// Every renderer matches on this exhaustively, so adding a kind forces
/// each generator, the preview and the registry to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Clickable button.
    Button,
    /// Single-line text input.
    Input,
    /// Multi-line text input.
    Textarea,
    /// Paragraph of text.
    Text,
    /// Drop-down select.
    Select,
    /// Labeled on/off switch.
    Toggle,
    /// Small status pill.
    Badge,
    /// Horizontal rule.
    Divider,
    /// Content card with a title.
    Card,
    /// Top navigation bar.
    Navbar,
    /// Large heading section.
    Hero,
    /// Image; the label carries the URL.
    Image,
}

/// Palette group a kind is listed under in the component picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    /// Form controls and text.
    Basic,
    /// Structural sections.
    Layout,
    /// Images and other media.
    Media,
}

impl PaletteGroup {
    /// Display name of the group.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Layout => "Layout",
            Self::Media => "Media",
        }
    }
}

impl ElementKind {
    /// All kinds in component-picker order.
    pub const ALL: [ElementKind; 12] = [
        Self::Button,
        Self::Input,
        Self::Textarea,
        Self::Text,
        Self::Select,
        Self::Toggle,
        Self::Badge,
        Self::Divider,
        Self::Card,
        Self::Navbar,
        Self::Hero,
        Self::Image,
    ];

    /// Wire name, as used in the `type` field of serialized elements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Text => "text",
            Self::Select => "select",
            Self::Toggle => "toggle",
            Self::Badge => "badge",
            Self::Divider => "divider",
            Self::Card => "card",
            Self::Navbar => "navbar",
            Self::Hero => "hero",
            Self::Image => "image",
        }
    }

    /// Human readable name shown in the component picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Textarea => "Textarea",
            Self::Text => "Text",
            Self::Select => "Select",
            Self::Toggle => "Toggle",
            Self::Badge => "Badge",
            Self::Divider => "Divider",
            Self::Card => "Card",
            Self::Navbar => "Navbar",
            Self::Hero => "Hero",
            Self::Image => "Image",
        }
    }

    /// Picker group for this kind.
    #[must_use]
    pub const fn group(self) -> PaletteGroup {
        match self {
            Self::Button
            | Self::Input
            | Self::Textarea
            | Self::Text
            | Self::Select
            | Self::Toggle
            | Self::Badge
            | Self::Divider => PaletteGroup::Basic,
            Self::Card | Self::Navbar | Self::Hero => PaletteGroup::Layout,
            Self::Image => PaletteGroup::Media,
        }
    }

    /// Label given to a freshly added element of this kind.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Button => "Click Me",
            Self::Input => "Enter value...",
            Self::Textarea => "Write something...",
            Self::Text => "Sample Text",
            Self::Select => "Choose option",
            Self::Toggle => "Enable feature",
            Self::Badge => "New",
            Self::Divider => "",
            Self::Card => "Card Title",
            Self::Navbar => "My App",
            Self::Hero => "Welcome to My App",
            Self::Image => "https://picsum.photos/600/300",
        }
    }

    /// Alignment used when an element of this kind has none set.
    #[must_use]
    pub const fn default_align(self) -> Align {
        match self {
            Self::Hero => Align::Center,
            _ => Align::Left,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| EditorError::UnknownKind(s.to_string()))
    }
}

/// Font size steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    /// 11px.
    Xs,
    /// 13px.
    Sm,
    /// 15px.
    #[default]
    Base,
    /// 18px.
    Lg,
    /// 22px.
    Xl,
    /// 28px.
    #[serde(rename = "2xl")]
    Xxl,
}

impl FontSize {
    /// Size in CSS pixels.
    #[must_use]
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 11,
            Self::Sm => 13,
            Self::Base => 15,
            Self::Lg => 18,
            Self::Xl => 22,
            Self::Xxl => 28,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl Align {
    /// CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// How wide an element is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// Natural width; laid out full width in the page column.
    Auto,
    /// Half the column.
    Half,
    /// Full column width.
    #[default]
    Full,
}

impl WidthMode {
    /// Percentage width used by the stylesheet and the preview.
    #[must_use]
    pub const fn percent(self) -> &'static str {
        match self {
            Self::Half => "50%",
            Self::Auto | Self::Full => "100%",
        }
    }
}

/// Shadow presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    /// No shadow.
    #[default]
    None,
    /// Small diffuse shadow.
    Soft,
    /// Medium shadow.
    Medium,
    /// Large dark shadow.
    Deep,
    /// Purple outer glow.
    Glow,
}

impl Shadow {
    /// Literal `box-shadow` value.
    #[must_use]
    pub const fn box_shadow(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Soft => "0 4px 12px rgba(0,0,0,0.1)",
            Self::Medium => "0 12px 24px rgba(0,0,0,0.2)",
            Self::Deep => "0 24px 48px rgba(0,0,0,0.4)",
            Self::Glow => "0 0 20px rgba(168,85,247,0.4)",
        }
    }
}

/// Entry animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Animation {
    /// Appears immediately.
    #[default]
    None,
    /// Opacity 0 to 1.
    FadeIn,
    /// Fades in while rising 20px.
    SlideUp,
    /// Fades in while scaling from 0.8.
    ScalePop,
    /// Fades in with a small rotation and scale.
    RotateIn,
}

impl Animation {
    /// Keyframes name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FadeIn => "fadeIn",
            Self::SlideUp => "slideUp",
            Self::ScalePop => "scalePop",
            Self::RotateIn => "rotateIn",
        }
    }
}

/// Page column layout, serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Columns {
    /// Single column.
    #[default]
    One,
    /// Two columns.
    Two,
    /// Three columns.
    Three,
}

impl TryFrom<u8> for Columns {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(format!("columns must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<Columns> for u8 {
    fn from(columns: Columns) -> Self {
        match columns {
            Columns::One => 1,
            Columns::Two => 2,
            Columns::Three => 3,
        }
    }
}

/// Sparse visual properties of an element.
///
/// Absent fields fall back to per-renderer defaults. Empty color strings,
/// which older saved documents contain, are treated as absent by the
/// accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySet {
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Border color; a 1px solid border is drawn when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Font size step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    /// Text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Corner radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Padding step; one step is 4px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    /// Width mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthMode>,
    /// Explicit image URL, preferred over the label for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Badge tint color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
    /// Column count for the element's own content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Columns>,
    /// Backdrop blur radius in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<u32>,
    /// Opacity percent, 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u32>,
    /// Shadow preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Gradient spec, either a CSS gradient function or utility tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    /// Entry animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    /// Entry animation duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f32>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl PropertySet {
    /// Properties given to every element created from the editor.
    #[must_use]
    pub fn editor_defaults() -> Self {
        Self {
            font_size: Some(FontSize::Base),
            align: Some(Align::Left),
            radius: Some(16),
            padding: Some(4),
            width: Some(WidthMode::Full),
            blur: Some(0),
            opacity: Some(100),
            shadow: Some(Shadow::None),
            animation: Some(Animation::None),
            animation_duration: Some(0.5),
            ..Self::default()
        }
    }

    /// Overlay every field that is set in `patch` onto a copy of `self`.
    #[must_use]
    pub fn merged(&self, patch: &PropertySet) -> Self {
        fn pick<T: Clone>(base: Option<&T>, over: Option<&T>) -> Option<T> {
            over.or(base).cloned()
        }

        Self {
            bg: pick(self.bg.as_ref(), patch.bg.as_ref()),
            color: pick(self.color.as_ref(), patch.color.as_ref()),
            border_color: pick(self.border_color.as_ref(), patch.border_color.as_ref()),
            font_size: pick(self.font_size.as_ref(), patch.font_size.as_ref()),
            align: pick(self.align.as_ref(), patch.align.as_ref()),
            radius: pick(self.radius.as_ref(), patch.radius.as_ref()),
            padding: pick(self.padding.as_ref(), patch.padding.as_ref()),
            width: pick(self.width.as_ref(), patch.width.as_ref()),
            image_url: pick(self.image_url.as_ref(), patch.image_url.as_ref()),
            badge_color: pick(self.badge_color.as_ref(), patch.badge_color.as_ref()),
            columns: pick(self.columns.as_ref(), patch.columns.as_ref()),
            blur: pick(self.blur.as_ref(), patch.blur.as_ref()),
            opacity: pick(self.opacity.as_ref(), patch.opacity.as_ref()),
            shadow: pick(self.shadow.as_ref(), patch.shadow.as_ref()),
            gradient: pick(self.gradient.as_ref(), patch.gradient.as_ref()),
            animation: pick(self.animation.as_ref(), patch.animation.as_ref()),
            animation_duration: pick(self.animation_duration.as_ref(), patch.animation_duration.as_ref()),
        }
    }

    /// Background color, if set and non-empty.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        non_empty(self.bg.as_ref())
    }

    /// Text color, if set and non-empty.
    #[must_use]
    pub fn text_color(&self) -> Option<&str> {
        non_empty(self.color.as_ref())
    }

    /// Border color, if set and non-empty.
    #[must_use]
    pub fn border(&self) -> Option<&str> {
        non_empty(self.border_color.as_ref())
    }

    /// Gradient spec, if set and non-empty.
    #[must_use]
    pub fn gradient_spec(&self) -> Option<&str> {
        non_empty(self.gradient.as_ref())
    }

    /// Image URL, if set and non-empty.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        non_empty(self.image_url.as_ref())
    }

    /// Badge color, if set and non-empty.
    #[must_use]
    pub fn badge(&self) -> Option<&str> {
        non_empty(self.badge_color.as_ref())
    }

    /// Blur radius, if set and non-zero.
    #[must_use]
    pub fn blur_px(&self) -> Option<u32> {
        self.blur.filter(|b| *b > 0)
    }

    /// Entry animation with its duration, if one other than `none` is set.
    #[must_use]
    pub fn entry_animation(&self) -> Option<(Animation, f32)> {
        self.animation
            .filter(|a| *a != Animation::None)
            .map(|a| (a, self.animation_duration.unwrap_or(0.5)))
    }
}

/// A page element: a typed component with a label and visual properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Component kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Visible text, placeholder or image URL depending on the kind.
    #[serde(default)]
    pub label: String,
    /// Visual properties.
    #[serde(default)]
    pub props: PropertySet,
}

impl Element {
    /// Create an element with the kind's default label and editor defaults.
    #[must_use]
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            label: kind.default_label().to_string(),
            props: PropertySet::editor_defaults(),
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Overlay a property patch.
    #[must_use]
    pub fn with_props(mut self, patch: &PropertySet) -> Self {
        self.props = self.props.merged(patch);
        self
    }

    /// A full copy of this element carrying a new id.
    #[must_use]
    pub fn duplicate_as(&self, id: ElementId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    /// Alignment after applying the kind default.
    #[must_use]
    pub fn align(&self) -> Align {
        self.props.align.unwrap_or(self.kind.default_align())
    }

    /// Image source: the explicit image URL, falling back to the label.
    #[must_use]
    pub fn image_source(&self) -> &str {
        self.props.image().unwrap_or(&self.label)
    }
}

impl AsRef<Element> for Element {
    fn as_ref(&self) -> &Element {
        self
    }
}
