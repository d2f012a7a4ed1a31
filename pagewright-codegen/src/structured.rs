//! Structured-data export and its inverse.

use pagewright_core::{DocumentState, EditorResult, ExportDocument, ImportDocument};

/// Serialize `elements`, `theme` and `columns` as pretty JSON.
#[must_use]
pub fn generate(state: &DocumentState) -> String {
    ExportDocument::from(state).to_json_pretty()
}

/// Load a structured-data blob over `current`.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or lacks `elements`;
/// `current` is never modified.
pub fn import(text: &str, current: &DocumentState) -> EditorResult<DocumentState> {
    Ok(ImportDocument::parse(text)?.apply_to(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::{
        Columns, EditorError, Element, ElementId, ElementKind, PropertySet, Shadow, Theme,
    };

    fn sample() -> DocumentState {
        DocumentState::new()
            .with_appended(Element::new(ElementId::from("n-1"), ElementKind::Hero))
            .with_appended(
                Element::new(ElementId::from("n-2"), ElementKind::Badge).with_props(&PropertySet {
                    badge_color: Some("#f59e0b".to_string()),
                    shadow: Some(Shadow::Glow),
                    ..PropertySet::default()
                }),
            )
            .with_theme(Theme::Sunset)
            .with_columns(Columns::Three)
    }

    #[test]
    fn test_round_trip() {
        let state = sample();
        let json = generate(&state);
        let restored = import(&json, &DocumentState::new()).expect("import");
        assert_eq!(restored.elements, state.elements);
        assert_eq!(restored.theme, Theme::Sunset);
        assert_eq!(restored.columns, Columns::Three);
    }

    #[test]
    fn test_wire_names() {
        let json = generate(&sample());
        assert!(json.contains("\"type\": \"badge\""));
        assert!(json.contains("\"badgeColor\": \"#f59e0b\""));
        assert!(json.contains("\"columns\": 3"));
        assert!(!json.contains("brand"));
    }

    #[test]
    fn test_missing_elements_is_an_error() {
        let current = sample();
        let err = import("{\"theme\": \"dark\"}", &current).expect_err("no elements");
        assert!(matches!(err, EditorError::MissingElements));
        assert!(import("not json", &current).is_err());
    }
}
