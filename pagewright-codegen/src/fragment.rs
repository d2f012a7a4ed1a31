//! Per-kind element fragments.
//!
//! The markup and component generators embed exactly these fragments and
//! differ only in the surrounding shell. The preview reads the same
//! [`Content`] so visible text, placeholders and image sources agree.

use pagewright_core::{BrandKit, Element, ElementKind};

use crate::style::{class_name, escape, ResolvedStyle};

/// Body copy under a card heading.
pub const CARD_BODY: &str = "Sample content for this card component.";

/// Tagline under a hero heading.
pub const HERO_TAGLINE: &str =
    "Experience the next generation of digital architecture with our neural-driven design system.";

/// Links shown on the right of a navbar.
pub const NAV_LINKS: [&str; 2] = ["Home", "About"];

/// What an element shows, independent of how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// Visible text.
    Text(&'a str),
    /// Empty field with placeholder text.
    Placeholder(&'a str),
    /// Dropdown with a single option.
    Choice(&'a str),
    /// Labeled switch.
    Switch(&'a str),
    /// Horizontal rule, no content.
    Rule,
    /// Heading followed by fixed body copy.
    Section {
        /// Heading text.
        heading: &'a str,
        /// Body copy.
        body: &'static str,
    },
    /// Brand name followed by links.
    Navigation {
        /// Brand text.
        title: &'a str,
        /// Link labels.
        links: &'static [&'static str],
    },
    /// Image with alternative text.
    Picture {
        /// Image URL, used verbatim.
        src: &'a str,
        /// Alternative text.
        alt: &'a str,
    },
}

impl<'a> Content<'a> {
    /// Content of `element`.
    #[must_use]
    pub fn of(element: &'a Element) -> Self {
        let label = element.label.as_str();
        match element.kind {
            ElementKind::Button | ElementKind::Text | ElementKind::Badge => Self::Text(label),
            ElementKind::Input | ElementKind::Textarea => Self::Placeholder(label),
            ElementKind::Select => Self::Choice(label),
            ElementKind::Toggle => Self::Switch(label),
            ElementKind::Divider => Self::Rule,
            ElementKind::Card => Self::Section {
                heading: label,
                body: CARD_BODY,
            },
            ElementKind::Hero => Self::Section {
                heading: label,
                body: HERO_TAGLINE,
            },
            ElementKind::Navbar => Self::Navigation {
                title: label,
                links: &NAV_LINKS,
            },
            ElementKind::Image => Self::Picture {
                src: element.image_source(),
                alt: label,
            },
        }
    }

    /// The label as the reader sees it: text, placeholder, option, heading
    /// or alt text. `None` for a rule.
    #[must_use]
    pub fn primary_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text)
            | Self::Placeholder(text)
            | Self::Choice(text)
            | Self::Switch(text) => Some(text),
            Self::Rule => None,
            Self::Section { heading, .. } => Some(heading),
            Self::Navigation { title, .. } => Some(title),
            Self::Picture { alt, .. } => Some(alt),
        }
    }
}

/// Root tag of an element's fragment and preview node.
#[must_use]
pub const fn tag(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Button => "button",
        ElementKind::Input => "input",
        ElementKind::Textarea => "textarea",
        ElementKind::Text => "p",
        ElementKind::Select => "select",
        ElementKind::Toggle => "label",
        ElementKind::Badge => "span",
        ElementKind::Divider => "hr",
        ElementKind::Card => "div",
        ElementKind::Navbar => "nav",
        ElementKind::Hero => "section",
        ElementKind::Image => "img",
    }
}

fn base_classes(element: &Element) -> &'static str {
    match element.kind {
        ElementKind::Button => "font-bold transition-all hover:opacity-90",
        ElementKind::Input | ElementKind::Textarea | ElementKind::Select => {
            "w-full border border-white/10 bg-white/5 outline-none"
        }
        ElementKind::Text => "",
        ElementKind::Toggle => "flex items-center gap-2",
        ElementKind::Badge => "inline-block px-2 py-1 text-xs font-medium",
        ElementKind::Divider => "border-white/10 my-4",
        ElementKind::Card => "border border-white/10 bg-white/5",
        ElementKind::Navbar => {
            "w-full border-b border-white/10 bg-white/5 flex items-center justify-between"
        }
        ElementKind::Hero => {
            if element.props.gradient_spec().is_some() {
                "w-full py-20 border border-white/10"
            } else {
                "w-full py-20 border border-white/10 bg-gradient-to-br from-white/5 to-white/0"
            }
        }
        ElementKind::Image => "h-auto object-cover border border-white/10",
    }
}

/// Full class attribute value: element class, kind classes, resolved
/// utility classes.
#[must_use]
pub fn class_list(element: &Element, brand: Option<&BrandKit>) -> String {
    let style = ResolvedStyle::new(element, brand);
    [
        class_name(element),
        base_classes(element).to_string(),
        style.utility_classes(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Render one element.
///
/// Multi-line fragments use two-space nesting and no leading indent; the
/// shell indents every line.
#[must_use]
pub fn render(element: &Element, brand: Option<&BrandKit>) -> String {
    let class = escape(&class_list(element, brand));
    let tag = tag(element.kind);

    match Content::of(element) {
        Content::Text(text) => format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape(text)),
        Content::Placeholder(text) => {
            let placeholder = escape(text);
            if element.kind == ElementKind::Textarea {
                format!(r#"<textarea class="{class}" placeholder="{placeholder}"></textarea>"#)
            } else {
                format!(r#"<input class="{class}" placeholder="{placeholder}" />"#)
            }
        }
        Content::Choice(text) => format!(
            "<select class=\"{class}\">\n  <option>{}</option>\n</select>",
            escape(text)
        ),
        Content::Switch(text) => format!(
            "<label class=\"{class}\">\n  <span class=\"w-10 h-6 rounded-full bg-white/20\"></span>\n  <span>{}</span>\n</label>",
            escape(text)
        ),
        Content::Rule => format!(r#"<hr class="{class}" />"#),
        Content::Section { heading, body } => {
            let (heading_tag, heading_class, body_class) = if element.kind == ElementKind::Hero {
                ("h1", "text-4xl font-black mb-4", "text-xl opacity-70 max-w-2xl mx-auto")
            } else {
                ("h3", "text-lg font-bold mb-2", "text-sm opacity-60")
            };
            format!(
                "<{tag} class=\"{class}\">\n  <{heading_tag} class=\"{heading_class}\">{}</{heading_tag}>\n  <p class=\"{body_class}\">{body}</p>\n</{tag}>",
                escape(heading)
            )
        }
        Content::Navigation { title, links } => {
            let mut out = format!(
                "<nav class=\"{class}\">\n  <span class=\"font-bold text-xl\">{}</span>\n  <div class=\"flex gap-4\">\n",
                escape(title)
            );
            for link in links {
                out.push_str("    <span class=\"text-sm opacity-60\">");
                out.push_str(link);
                out.push_str("</span>\n");
            }
            out.push_str("  </div>\n</nav>");
            out
        }
        Content::Picture { src, alt } => format!(
            r#"<img class="{class}" src="{}" alt="{}" />"#,
            escape(src),
            escape(alt)
        ),
    }
}

/// Render every element in order, indent each line by `indent` and join
/// fragments with a blank line.
#[must_use]
pub fn render_all<E: AsRef<Element>>(
    elements: &[E],
    brand: Option<&BrandKit>,
    indent: &str,
) -> String {
    elements
        .iter()
        .map(|el| indent_lines(&render(el.as_ref(), brand), indent))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn indent_lines(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
