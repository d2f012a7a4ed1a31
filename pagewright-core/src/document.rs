//! The document: an ordered element list plus page-wide settings.
//!
//! Every mutation returns a new [`DocumentState`] and never modifies the
//! receiver. Elements are held behind `Arc`, so a new state shares every
//! element it did not touch with the state it was derived from. Mutations
//! that reference an unknown id return `None` so the caller can skip the
//! history commit entirely.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lifecycle::{self, Direction};
use crate::{BrandField, BrandKit, Columns, Element, ElementId, PropertySet, Theme};

/// The unit of undo/redo, persistence and project snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentState {
    /// Elements in render order.
    pub elements: Vec<Arc<Element>>,
    /// Page palette.
    #[serde(default)]
    pub theme: Theme,
    /// Page column layout.
    #[serde(default)]
    pub columns: Columns,
    /// Brand tokens; defaulted when loading documents saved without them.
    #[serde(default)]
    pub brand: BrandKit,
}

impl DocumentState {
    /// Create an empty document with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the element with the given id.
    #[must_use]
    pub fn position(&self, id: &ElementId) -> Option<usize> {
        lifecycle::position(&self.elements, |e| e.id == *id)
    }

    /// Get an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.position(id).map(|i| self.elements[i].as_ref())
    }

    /// Check if an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.position(id).is_some()
    }

    /// Element ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|e| &e.id)
    }

    fn with_elements(&self, elements: Vec<Arc<Element>>) -> Self {
        Self {
            elements,
            ..self.clone()
        }
    }

    /// Append one element.
    #[must_use]
    pub fn with_appended(&self, element: Element) -> Self {
        self.with_batch(vec![element])
    }

    /// Append a batch of elements in order.
    #[must_use]
    pub fn with_batch(&self, batch: Vec<Element>) -> Self {
        let mut elements = self.elements.clone();
        elements.extend(batch.into_iter().map(Arc::new));
        self.with_elements(elements)
    }

    /// Replace the label of one element.
    #[must_use]
    pub fn with_label(&self, id: &ElementId, label: &str) -> Option<Self> {
        let index = self.position(id)?;
        let updated = self.elements[index].as_ref().clone().with_label(label);
        Some(self.with_elements(lifecycle::replace_at(
            &self.elements,
            index,
            Arc::new(updated),
        )))
    }

    /// Merge a property patch into one element.
    #[must_use]
    pub fn with_props(&self, id: &ElementId, patch: &PropertySet) -> Option<Self> {
        let index = self.position(id)?;
        let updated = self.elements[index].as_ref().clone().with_props(patch);
        Some(self.with_elements(lifecycle::replace_at(
            &self.elements,
            index,
            Arc::new(updated),
        )))
    }

    /// Merge a property patch into every element.
    #[must_use]
    pub fn with_props_everywhere(&self, patch: &PropertySet) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|e| Arc::new(e.as_ref().clone().with_props(patch)))
            .collect();
        self.with_elements(elements)
    }

    /// Remove one element.
    #[must_use]
    pub fn without(&self, id: &ElementId) -> Option<Self> {
        let index = self.position(id)?;
        Some(self.with_elements(lifecycle::remove_at(&self.elements, index)))
    }

    /// Insert a copy of `id` carrying `new_id` directly after it.
    #[must_use]
    pub fn with_duplicate(&self, id: &ElementId, new_id: ElementId) -> Option<Self> {
        let index = self.position(id)?;
        let copy = self.elements[index].duplicate_as(new_id);
        Some(self.with_elements(lifecycle::insert_after(
            &self.elements,
            index,
            Arc::new(copy),
        )))
    }

    /// Swap one element with its neighbor.
    ///
    /// `None` when the id is unknown or the element is already at that end.
    #[must_use]
    pub fn with_moved(&self, id: &ElementId, direction: Direction) -> Option<Self> {
        let index = self.position(id)?;
        lifecycle::swap_neighbor(&self.elements, index, direction).map(|e| self.with_elements(e))
    }

    /// Move `from` to the current index of `to` (remove, then insert).
    ///
    /// `None` when either id is unknown or both are the same element.
    #[must_use]
    pub fn with_reordered(&self, from: &ElementId, to: &ElementId) -> Option<Self> {
        let from_index = self.position(from)?;
        let to_index = self.position(to)?;
        if from_index == to_index {
            return None;
        }
        Some(self.with_elements(lifecycle::array_move(
            &self.elements,
            from_index,
            to_index,
        )))
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    /// Replace the column layout.
    #[must_use]
    pub fn with_columns(&self, columns: Columns) -> Self {
        Self {
            columns,
            ..self.clone()
        }
    }

    /// Replace the brand tokens.
    #[must_use]
    pub fn with_brand(&self, brand: BrandKit) -> Self {
        Self {
            brand,
            ..self.clone()
        }
    }

    /// Push brand tokens into every element's properties.
    #[must_use]
    pub fn with_brand_synced(&self, fields: &[BrandField]) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|e| {
                let mut element = e.as_ref().clone();
                element.props = self.brand.synced_props(&element.props, fields);
                Arc::new(element)
            })
            .collect();
        self.with_elements(elements)
    }

    /// Remove every element, keeping theme, columns and brand.
    #[must_use]
    pub fn cleared(&self) -> Self {
        self.with_elements(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;

    fn doc_with(ids: &[&str]) -> DocumentState {
        let batch = ids
            .iter()
            .map(|id| Element::new(ElementId::from(*id), ElementKind::Text).with_label(*id))
            .collect();
        DocumentState::new().with_batch(batch)
    }

    fn order(doc: &DocumentState) -> Vec<&str> {
        doc.ids().map(ElementId::as_str).collect()
    }

    #[test]
    fn test_update_label_shares_untouched_elements() {
        let doc = doc_with(&["a", "b", "c"]);
        let next = doc
            .with_label(&ElementId::from("b"), "bee")
            .expect("b exists");

        assert_eq!(next.elements[1].label, "bee");
        assert!(Arc::ptr_eq(&doc.elements[0], &next.elements[0]));
        assert!(Arc::ptr_eq(&doc.elements[2], &next.elements[2]));
        assert!(!Arc::ptr_eq(&doc.elements[1], &next.elements[1]));
        // receiver untouched
        assert_eq!(doc.elements[1].label, "b");
    }

    #[test]
    fn test_missing_id_is_none() {
        let doc = doc_with(&["a"]);
        let ghost = ElementId::from("ghost");
        assert!(doc.with_label(&ghost, "x").is_none());
        assert!(doc.with_props(&ghost, &PropertySet::default()).is_none());
        assert!(doc.without(&ghost).is_none());
        assert!(doc.with_duplicate(&ghost, ElementId::from("n")).is_none());
        assert!(doc.with_moved(&ghost, Direction::Up).is_none());
        assert!(doc
            .with_reordered(&ghost, &ElementId::from("a"))
            .is_none());
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let doc = doc_with(&["a", "b", "c"]);
        let next = doc
            .with_duplicate(&ElementId::from("a"), ElementId::from("a2"))
            .expect("a exists");
        assert_eq!(order(&next), vec!["a", "a2", "b", "c"]);
        assert_eq!(next.elements[1].label, "a");
        assert_eq!(next.elements[1].kind, ElementKind::Text);

        let restored = next.without(&ElementId::from("a2")).expect("a2 exists");
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_move_is_bounded_swap() {
        let doc = doc_with(&["a", "b", "c"]);
        assert!(doc.with_moved(&ElementId::from("a"), Direction::Up).is_none());
        assert!(doc
            .with_moved(&ElementId::from("c"), Direction::Down)
            .is_none());
        let next = doc
            .with_moved(&ElementId::from("b"), Direction::Down)
            .expect("in bounds");
        assert_eq!(order(&next), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_reorder_is_array_move() {
        let doc = doc_with(&["a", "b", "c", "d"]);
        let next = doc
            .with_reordered(&ElementId::from("a"), &ElementId::from("c"))
            .expect("both exist");
        assert_eq!(order(&next), vec!["b", "c", "a", "d"]);

        let back = next
            .with_reordered(&ElementId::from("c"), &ElementId::from("a"))
            .expect("both exist");
        assert_eq!(order(&back), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_reorder_onto_self_is_none() {
        let doc = doc_with(&["a", "b"]);
        assert!(doc
            .with_reordered(&ElementId::from("a"), &ElementId::from("a"))
            .is_none());
    }

    #[test]
    fn test_brand_sync_rewrites_every_element() {
        let doc = doc_with(&["a", "b"]).with_brand(BrandKit {
            radius: 2,
            ..BrandKit::default()
        });
        let synced = doc.with_brand_synced(&[BrandField::Radius]);
        assert!(synced.elements.iter().all(|e| e.props.radius == Some(2)));
    }

    #[test]
    fn test_missing_brand_defaults_on_load() {
        let json = r#"{ "elements": [], "theme": "ocean", "columns": 2 }"#;
        let doc: DocumentState = serde_json::from_str(json).expect("parse");
        assert_eq!(doc.theme, Theme::Ocean);
        assert_eq!(doc.columns, Columns::Two);
        assert_eq!(doc.brand, BrandKit::default());
    }
}
