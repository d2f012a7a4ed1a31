//! Structured-data interchange format for export and import.
//!
//! The exported blob carries `elements`, `theme` and `columns`. Import
//! requires only `elements`; the other fields keep the current document's
//! values when absent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{BrandKit, Columns, DocumentState, EditorError, EditorResult, Element, Theme};

/// Borrowed view of a document in export form.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    /// Elements in render order.
    pub elements: &'a [Arc<Element>],
    /// Page palette.
    pub theme: Theme,
    /// Page column layout.
    pub columns: Columns,
}

impl<'a> From<&'a DocumentState> for ExportDocument<'a> {
    fn from(state: &'a DocumentState) -> Self {
        Self {
            elements: &state.elements,
            theme: state.theme,
            columns: state.columns,
        }
    }
}

impl ExportDocument<'_> {
    /// Pretty-printed JSON with two-space indentation.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        // Every field is a plain enum, string or number.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// A parsed import payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportDocument {
    /// Elements to load.
    pub elements: Vec<Element>,
    /// Palette, if the payload has one.
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Column layout, if the payload has one.
    #[serde(default)]
    pub columns: Option<Columns>,
    /// Brand tokens, if the payload has them.
    #[serde(default)]
    pub brand: Option<BrandKit>,
}

impl ImportDocument {
    /// Parse an import payload.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidImport`] if the text is not JSON or the
    /// elements do not match the element schema, and
    /// [`EditorError::MissingElements`] if the payload is not an object with
    /// an `elements` field.
    pub fn parse(text: &str) -> EditorResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        let has_elements = value
            .as_object()
            .and_then(|obj| obj.get("elements"))
            .is_some_and(|elements| !elements.is_null());
        if !has_elements {
            return Err(EditorError::MissingElements);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The document this payload produces when loaded over `current`.
    #[must_use]
    pub fn apply_to(self, current: &DocumentState) -> DocumentState {
        DocumentState {
            elements: self.elements.into_iter().map(Arc::new).collect(),
            theme: self.theme.unwrap_or(current.theme),
            columns: self.columns.unwrap_or(current.columns),
            brand: self.brand.unwrap_or_else(|| current.brand.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementId, ElementKind};

    #[test]
    fn test_export_has_only_document_fields() {
        let state = DocumentState::new()
            .with_appended(Element::new(ElementId::from("n1"), ElementKind::Badge))
            .with_theme(Theme::Sunset);
        let json = ExportDocument::from(&state).to_json_pretty();
        let value: Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["theme"], "sunset");
        assert_eq!(value["columns"], 1);
        assert_eq!(value["elements"][0]["type"], "badge");
        assert!(value.get("brand").is_none());
        assert!(json.contains("\n  \"elements\""));
    }

    #[test]
    fn test_round_trip_restores_document() {
        let state = DocumentState::new()
            .with_batch(vec![
                Element::new(ElementId::from("a"), ElementKind::Hero).with_label("Hi"),
                Element::new(ElementId::from("b"), ElementKind::Image),
            ])
            .with_theme(Theme::Ocean)
            .with_columns(Columns::Three);
        let json = ExportDocument::from(&state).to_json_pretty();

        let imported = ImportDocument::parse(&json)
            .expect("parse")
            .apply_to(&DocumentState::new());
        assert_eq!(imported, state);
    }

    #[test]
    fn test_missing_elements_is_rejected() {
        assert!(matches!(
            ImportDocument::parse(r#"{ "theme": "dark" }"#),
            Err(EditorError::MissingElements)
        ));
        assert!(matches!(
            ImportDocument::parse(r#"{ "elements": null }"#),
            Err(EditorError::MissingElements)
        ));
        assert!(matches!(
            ImportDocument::parse("[1, 2]"),
            Err(EditorError::MissingElements)
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            ImportDocument::parse("{ not json"),
            Err(EditorError::InvalidImport(_))
        ));
        assert!(matches!(
            ImportDocument::parse(r#"{ "elements": [{ "id": "x", "type": "carousel" }] }"#),
            Err(EditorError::InvalidImport(_))
        ));
    }

    #[test]
    fn test_absent_settings_keep_current_values() {
        let current = DocumentState::new()
            .with_theme(Theme::Purple)
            .with_columns(Columns::Two);
        let imported = ImportDocument::parse(r#"{ "elements": [] }"#)
            .expect("parse")
            .apply_to(&current);
        assert_eq!(imported.theme, Theme::Purple);
        assert_eq!(imported.columns, Columns::Two);
        assert_eq!(imported.brand, current.brand);
    }
}
