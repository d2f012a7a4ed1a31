//! Element blueprints, insertable templates and premade projects.
//!
//! A [`Blueprint`] is an element without an id: a kind, a label and a
//! property patch over the editor defaults. Templates and premades are
//! fixed lists of blueprints; ids are allocated when they are instantiated,
//! so inserting the same template twice never produces duplicate ids.

use std::fmt;
use std::str::FromStr;

use crate::ids::{IdAllocator, IdScope};
use crate::ElementKind as K;
use crate::{
    Align, Animation, BrandKit, Columns, EditorError, Element, ElementKind, FontFamily, FontSize,
    PropertySet, Shadow, Theme, WidthMode,
};

/// An element waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    /// Component kind.
    pub kind: ElementKind,
    /// Label.
    pub label: String,
    /// Patch applied over [`PropertySet::editor_defaults`].
    pub patch: PropertySet,
}

impl Blueprint {
    /// A blueprint with no property overrides.
    #[must_use]
    pub fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            patch: PropertySet::default(),
        }
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, bg: &str) -> Self {
        self.patch.bg = Some(bg.to_string());
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: &str) -> Self {
        self.patch.color = Some(color.to_string());
        self
    }

    /// Set the border color.
    #[must_use]
    pub fn border(mut self, color: &str) -> Self {
        self.patch.border_color = Some(color.to_string());
        self
    }

    /// Set the gradient spec.
    #[must_use]
    pub fn gradient(mut self, gradient: &str) -> Self {
        self.patch.gradient = Some(gradient.to_string());
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.patch.align = Some(align);
        self
    }

    /// Set the font size.
    #[must_use]
    pub fn font_size(mut self, size: FontSize) -> Self {
        self.patch.font_size = Some(size);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.patch.radius = Some(radius);
        self
    }

    /// Set the padding step.
    #[must_use]
    pub fn padding(mut self, padding: u32) -> Self {
        self.patch.padding = Some(padding);
        self
    }

    /// Set the width mode.
    #[must_use]
    pub fn width(mut self, width: WidthMode) -> Self {
        self.patch.width = Some(width);
        self
    }

    /// Set the backdrop blur.
    #[must_use]
    pub fn blur(mut self, blur: u32) -> Self {
        self.patch.blur = Some(blur);
        self
    }

    /// Set the opacity percent.
    #[must_use]
    pub fn opacity(mut self, opacity: u32) -> Self {
        self.patch.opacity = Some(opacity);
        self
    }

    /// Set the shadow preset.
    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.patch.shadow = Some(shadow);
        self
    }

    /// Set the entry animation.
    #[must_use]
    pub fn animation(mut self, animation: Animation) -> Self {
        self.patch.animation = Some(animation);
        self
    }

    /// Create the element, drawing its id from `ids`.
    pub fn instantiate(&self, ids: &mut IdAllocator, scope: IdScope) -> Element {
        Element::new(ids.next(scope), self.kind)
            .with_label(self.label.clone())
            .with_props(&self.patch)
    }
}

/// Instantiate a list of blueprints in order.
pub fn instantiate_all(
    blueprints: &[Blueprint],
    ids: &mut IdAllocator,
    scope: IdScope,
) -> Vec<Element> {
    blueprints
        .iter()
        .map(|b| b.instantiate(ids, scope))
        .collect()
}

/// Section templates appended to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Heading, plan card and call to action.
    PricingTable,
    /// Blurred glowing navigation bar.
    GlassNavbar,
    /// Gradient hero with a slide-up entrance.
    ProHero,
}

impl Template {
    /// All templates in picker order.
    pub const ALL: [Template; 3] = [Self::PricingTable, Self::GlassNavbar, Self::ProHero];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PricingTable => "Pricing Table",
            Self::GlassNavbar => "Glass Navbar",
            Self::ProHero => "Pro Hero",
        }
    }

    /// The elements this template inserts.
    #[must_use]
    pub fn blueprints(self) -> Vec<Blueprint> {
        match self {
            Self::PricingTable => vec![
                Blueprint::new(K::Hero, "Choose Your Plan")
                    .align(Align::Center)
                    .shadow(Shadow::Soft),
                Blueprint::new(K::Card, "Starter - $9")
                    .shadow(Shadow::Medium)
                    .blur(5)
                    .bg("rgba(255,255,255,0.05)"),
                Blueprint::new(K::Button, "Get Started").radius(30),
            ],
            Self::GlassNavbar => vec![Blueprint::new(K::Navbar, "ARCHITECT AI")
                .blur(15)
                .bg("rgba(255,255,255,0.03)")
                .shadow(Shadow::Glow)
                .radius(0)],
            Self::ProHero => vec![Blueprint::new(K::Hero, "Design the Future")
                .gradient("from-purple-600 to-blue-600")
                .color("#fff")
                .animation(Animation::SlideUp)],
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| matches_name(t.name(), s))
            .ok_or_else(|| EditorError::TemplateNotFound(s.to_string()))
    }
}

/// Complete starter pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Premade {
    /// SaaS landing with a glowing navbar.
    SaasPowerUp,
    /// Glass product page.
    GlassStorefront,
    /// Personal portfolio.
    ProPortfolio,
    /// Event registration page.
    EventLanding,
    /// Crypto staking dashboard.
    CryptoDashboard,
    /// Terminal-style news page.
    NewsTerminal,
    /// Spa booking page.
    OceanicSpa,
    /// Light serif blog.
    MinimalistBlog,
    /// Neon purple page.
    PurpleNight,
    /// Glass admin panel.
    GlassAdmin,
}

impl Premade {
    /// All premades in gallery order.
    pub const ALL: [Premade; 10] = [
        Self::SaasPowerUp,
        Self::GlassStorefront,
        Self::ProPortfolio,
        Self::EventLanding,
        Self::CryptoDashboard,
        Self::NewsTerminal,
        Self::OceanicSpa,
        Self::MinimalistBlog,
        Self::PurpleNight,
        Self::GlassAdmin,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SaasPowerUp => "SaaS Power-Up",
            Self::GlassStorefront => "Glass Storefront",
            Self::ProPortfolio => "Pro Portfolio",
            Self::EventLanding => "Event Landing",
            Self::CryptoDashboard => "Crypto Dashboard",
            Self::NewsTerminal => "News Terminal",
            Self::OceanicSpa => "Oceanic Spa",
            Self::MinimalistBlog => "Minimalist Blog",
            Self::PurpleNight => "Purple Night",
            Self::GlassAdmin => "Glass Admin",
        }
    }

    /// Page palette.
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::GlassStorefront => Theme::Glass,
            Self::CryptoDashboard => Theme::Sunset,
            Self::OceanicSpa => Theme::Ocean,
            Self::MinimalistBlog => Theme::Light,
            Self::PurpleNight => Theme::Purple,
            Self::SaasPowerUp
            | Self::ProPortfolio
            | Self::EventLanding
            | Self::NewsTerminal
            | Self::GlassAdmin => Theme::Dark,
        }
    }

    /// Page column layout.
    #[must_use]
    pub const fn columns(self) -> Columns {
        Columns::One
    }

    /// Brand tokens the page was designed with.
    ///
    /// Loading a premade keeps the editor's own brand; these are offered
    /// for display and for explicit adoption.
    #[must_use]
    pub fn brand(self) -> BrandKit {
        let (primary, secondary, accent, radius, font, glass) = match self {
            Self::SaasPowerUp => ("#a855f7", "#6366f1", "#f472b6", 16, FontFamily::Sans, true),
            Self::GlassStorefront => ("#0ea5e9", "#0284c7", "#f472b6", 24, FontFamily::Sans, true),
            Self::ProPortfolio => ("#fbbf24", "#f59e0b", "#fff", 12, FontFamily::Display, true),
            Self::EventLanding => ("#f43f5e", "#e11d48", "#fff", 20, FontFamily::Display, true),
            Self::CryptoDashboard => ("#f97316", "#ea580c", "#fff", 10, FontFamily::Mono, true),
            Self::NewsTerminal => ("#ef4444", "#333", "#fff", 4, FontFamily::Mono, false),
            Self::OceanicSpa => ("#0891b2", "#0e7490", "#fff", 40, FontFamily::Serif, true),
            Self::MinimalistBlog => ("#111", "#444", "#000", 0, FontFamily::Serif, false),
            Self::PurpleNight => ("#a855f7", "#7e22ce", "#fff", 32, FontFamily::Display, true),
            Self::GlassAdmin => ("#3b82f6", "#1e40af", "#60a5fa", 12, FontFamily::Sans, true),
        };
        BrandKit {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            radius,
            font,
            glass,
        }
    }

    /// The page's elements.
    #[must_use]
    pub fn blueprints(self) -> Vec<Blueprint> {
        match self {
            Self::SaasPowerUp => vec![
                Blueprint::new(K::Navbar, "NEURAL-LINK")
                    .blur(12)
                    .shadow(Shadow::Glow),
                Blueprint::new(K::Hero, "Scale Beyond Limits")
                    .font_size(FontSize::Xxl)
                    .align(Align::Center),
                Blueprint::new(K::Card, "Ready to sync?").shadow(Shadow::Soft),
                Blueprint::new(K::Button, "Get Started").bg("#a855f7"),
            ],
            Self::GlassStorefront => vec![
                Blueprint::new(K::Navbar, "MODERN-MINT").blur(20),
                Blueprint::new(K::Card, "Premium Watch").shadow(Shadow::Deep),
                Blueprint::new(K::Badge, "Limited Edition"),
                Blueprint::new(K::Button, "Buy Now").bg("#0ea5e9"),
            ],
            Self::ProPortfolio => vec![
                Blueprint::new(K::Hero, "Creative Architect")
                    .align(Align::Center)
                    .font_size(FontSize::Xxl),
                Blueprint::new(K::Card, "Project Alpha").shadow(Shadow::Medium),
                Blueprint::new(K::Card, "Project Beta").shadow(Shadow::Medium),
                Blueprint::new(K::Button, "Contact Me")
                    .bg("#fbbf24")
                    .border("#fff"),
            ],
            Self::EventLanding => vec![
                Blueprint::new(K::Navbar, "GEN-Z CON")
                    .bg("#f43f5e")
                    .shadow(Shadow::Soft),
                Blueprint::new(K::Hero, "The Future is Here").align(Align::Center),
                Blueprint::new(K::Button, "Register Now").bg("#f43f5e"),
            ],
            Self::CryptoDashboard => vec![
                Blueprint::new(K::Hero, "Yield Master").gradient("from-orange-500 to-rose-500"),
                Blueprint::new(K::Card, "Staking Pool").shadow(Shadow::Deep),
                Blueprint::new(K::Button, "Connect Wallet").bg("#f97316"),
            ],
            Self::NewsTerminal => vec![
                Blueprint::new(K::Navbar, "DEV CHRONICLE")
                    .bg("#000")
                    .border("#333"),
                Blueprint::new(K::Badge, "Breaking News").bg("#ef4444"),
                Blueprint::new(K::Card, "AI becomes sentient").shadow(Shadow::Medium),
            ],
            Self::OceanicSpa => vec![
                Blueprint::new(K::Hero, "Breathe Deeply")
                    .font_size(FontSize::Xxl)
                    .align(Align::Center),
                Blueprint::new(K::Card, "Detox Treatment").padding(24),
                Blueprint::new(K::Button, "Book Now").bg("#06b6d4"),
            ],
            Self::MinimalistBlog => vec![
                Blueprint::new(K::Navbar, "THOUGHTS").color("#000"),
                Blueprint::new(K::Text, "A collection of stories.")
                    .font_size(FontSize::Xl)
                    .align(Align::Left),
                Blueprint::new(K::Divider, ""),
            ],
            Self::PurpleNight => vec![
                Blueprint::new(K::Navbar, "NEON").bg("#581c87"),
                Blueprint::new(K::Card, "Cyber Deck").shadow(Shadow::Glow),
                Blueprint::new(K::Button, "Enter Matrix")
                    .bg("#a855f7")
                    .shadow(Shadow::Glow),
            ],
            Self::GlassAdmin => vec![
                Blueprint::new(K::Navbar, "OS-LINK").blur(16),
                Blueprint::new(K::Card, "System Health").shadow(Shadow::Soft),
                Blueprint::new(K::Badge, "Online").bg("#10b981"),
            ],
        }
    }
}

impl fmt::Display for Premade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Premade {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| matches_name(p.name(), s))
            .ok_or_else(|| EditorError::PremadeNotFound(s.to_string()))
    }
}

/// Case-insensitive name match that also accepts a kebab-case slug.
fn matches_name(name: &str, query: &str) -> bool {
    let query = query.trim();
    name.eq_ignore_ascii_case(query) || slug(name) == slug(query)
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
