//! Export format dispatch.
//!
//! Each [`ExportFormat`] selects one generator over the current document.
//! Copy and download both operate on the resulting [`Export::contents`].

use std::fmt;
use std::str::FromStr;

use pagewright_core::DocumentState;

use crate::error::{CodegenError, CodegenResult};
use crate::{component, markup, structured, stylesheet};

/// Base name of downloaded exports.
pub const FILE_STEM: &str = "pagewright-export";

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Component source (`.tsx`).
    #[default]
    Component,
    /// Standalone markup page (`.html`).
    Markup,
    /// Structured data (`.json`).
    Structured,
    /// Stylesheet (`.css`).
    Stylesheet,
}

impl ExportFormat {
    /// All formats in picker order.
    pub const ALL: [ExportFormat; 4] = [
        Self::Component,
        Self::Markup,
        Self::Structured,
        Self::Stylesheet,
    ];

    /// Format name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Markup => "markup",
            Self::Structured => "structured",
            Self::Stylesheet => "stylesheet",
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Component => "tsx",
            Self::Markup => "html",
            Self::Structured => "json",
            Self::Stylesheet => "css",
        }
    }

    /// Download file name.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{FILE_STEM}.{}", self.extension())
    }

    /// Run this format's generator over `state`, with its brand.
    #[must_use]
    pub fn render(self, state: &DocumentState) -> String {
        tracing::debug!(
            format = self.name(),
            elements = state.len(),
            "Rendering export"
        );
        let brand = Some(&state.brand);
        match self {
            Self::Component => component::generate(&state.elements, brand),
            Self::Markup => markup::generate(&state.elements, brand),
            Self::Structured => structured::generate(state),
            Self::Stylesheet => stylesheet::generate(&state.elements, brand),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = CodegenError;

    /// Accepts a format name or its file extension.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == wanted || f.extension() == wanted)
            .ok_or_else(|| CodegenError::UnknownFormat(s.to_string()))
    }
}

/// A rendered export ready to copy or save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Format it was rendered in.
    pub format: ExportFormat,
    /// Suggested download name.
    pub file_name: String,
    /// Generated text.
    pub contents: String,
}

/// Render `state` in `format`.
#[must_use]
pub fn export(state: &DocumentState, format: ExportFormat) -> Export {
    Export {
        format,
        file_name: format.file_name(),
        contents: format.render(state),
    }
}

/// Render `state` in the format named by `name`.
///
/// # Errors
///
/// Returns [`CodegenError::UnknownFormat`] if `name` is neither a format
/// name nor an extension.
pub fn export_named(state: &DocumentState, name: &str) -> CodegenResult<Export> {
    Ok(export(state, name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::{Element, ElementId, ElementKind};

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Component.file_name(), "pagewright-export.tsx");
        assert_eq!(ExportFormat::Markup.file_name(), "pagewright-export.html");
        assert_eq!(ExportFormat::Structured.file_name(), "pagewright-export.json");
        assert_eq!(ExportFormat::Stylesheet.file_name(), "pagewright-export.css");
    }

    #[test]
    fn test_parse_by_name_or_extension() {
        assert_eq!(
            "markup".parse::<ExportFormat>().expect("name"),
            ExportFormat::Markup
        );
        assert_eq!(
            ".CSS".parse::<ExportFormat>().expect("ext"),
            ExportFormat::Stylesheet
        );
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(CodegenError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_each_format_selects_its_generator() {
        let state = DocumentState::new()
            .with_appended(Element::new(ElementId::from("x"), ElementKind::Button));
        assert!(ExportFormat::Markup.render(&state).starts_with("<!DOCTYPE html>"));
        assert!(ExportFormat::Component
            .render(&state)
            .starts_with("// Generated by Pagewright"));
        assert!(ExportFormat::Stylesheet.render(&state).contains(".el-x {"));
        assert!(ExportFormat::Structured
            .render(&state)
            .contains("\"elements\""));
    }

    #[test]
    fn test_export_named() {
        let state = DocumentState::new();
        let out = export_named(&state, "json").expect("json export");
        assert_eq!(out.format, ExportFormat::Structured);
        assert_eq!(out.file_name, "pagewright-export.json");
        assert!(export_named(&state, "docx").is_err());
    }
}
