//! Ephemeral view state.
//!
//! Selection, zoom and open panels belong to the editing session only. They
//! are never part of an undo step, a persisted document or a project.

use serde::{Deserialize, Serialize};

use crate::{DocumentState, ElementId};

/// Smallest zoom factor.
pub const MIN_ZOOM: f32 = 0.3;

/// Largest zoom factor.
pub const MAX_ZOOM: f32 = 2.5;

/// Zoom change per step.
pub const ZOOM_STEP: f32 = 0.1;

/// Transient panels that overlay the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// Prompt synthesis input.
    Prompt,
    /// Theme picker.
    Themes,
    /// Saved projects list.
    Projects,
}

/// The editing session's view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Selected element, if any.
    pub selected: Option<ElementId>,
    /// Canvas zoom factor.
    pub zoom: f32,
    /// Open transient panels.
    open_panels: Vec<Panel>,
}

impl ViewState {
    /// Create a view with nothing selected at 100% zoom.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            zoom: 1.0,
            open_panels: Vec::new(),
        }
    }

    /// Select an element.
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Check if `id` is the selected element.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Drop the selection if it no longer exists in `state`.
    pub fn reconcile(&mut self, state: &DocumentState) {
        if let Some(id) = &self.selected {
            if !state.contains(id) {
                self.selected = None;
            }
        }
    }

    /// Zoom in one step, rounded to one decimal, capped at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.zoom = round_tenth(self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Zoom out one step, rounded to one decimal, floored at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.zoom = round_tenth(self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Reset zoom to 100%.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Open a panel.
    pub fn open(&mut self, panel: Panel) {
        if !self.open_panels.contains(&panel) {
            self.open_panels.push(panel);
        }
    }

    /// Close a panel.
    pub fn close(&mut self, panel: Panel) {
        self.open_panels.retain(|p| *p != panel);
    }

    /// Check if a panel is open.
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        self.open_panels.contains(&panel)
    }

    /// Clear the selection and close every transient panel.
    pub fn escape(&mut self) {
        self.selected = None;
        self.open_panels.clear();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
