//! The editing session.
//!
//! [`Editor`] is the single writer for the document. Every mutation builds
//! the next [`DocumentState`] and goes through [`Editor::commit`], which
//! records the replaced state in history and mirrors the new one to the
//! store. Mutations that change nothing (unknown id, boundary move, blank
//! prompt) never reach `commit` and leave history untouched.

use std::time::Instant;

use crate::assistant::{Command, Conversation};
use crate::ids::{IdAllocator, IdScope};
use crate::keys::{self, KeyPress, Shortcut};
use crate::lifecycle::Direction;
use crate::schema::{ExportDocument, ImportDocument};
use crate::store::{StateStore, PROJECTS_FILE, STATE_FILE};
use crate::synthesis;
use crate::templates::{instantiate_all, Premade, Template};
use crate::view::{Panel, ViewState};
use crate::{
    Align, BrandField, BrandKit, Columns, DocumentState, EditorError, EditorResult, Element,
    ElementId, ElementKind, History, ProjectCatalog, PropertySet, Theme,
};

/// Name given to a project before the user picks one.
pub const DEFAULT_PROJECT_NAME: &str = "My Project";

/// An editing session over one document.
#[derive(Debug)]
pub struct Editor {
    state: DocumentState,
    history: History<DocumentState>,
    view: ViewState,
    ids: IdAllocator,
    store: StateStore,
    projects: ProjectCatalog,
    project_name: String,
    chat: Conversation,
}

impl Editor {
    /// Create an editor over an empty document with no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(StateStore::new())
    }

    /// Create an editor backed by `store`.
    ///
    /// The persisted document and projects are loaded if present. A
    /// document or project file that can't be read is moved aside with
    /// [`StateStore::set_aside`] and replaced by defaults; persistence is
    /// never allowed to block editing.
    #[must_use]
    pub fn with_store(store: StateStore) -> Self {
        let state = match store.load_state() {
            Ok(state) => state.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to load saved document, starting empty: {e}");
                let _ = store.set_aside(STATE_FILE);
                DocumentState::default()
            }
        };
        let projects = store.load_projects().unwrap_or_else(|e| {
            tracing::warn!("Failed to load saved projects: {e}");
            let _ = store.set_aside(PROJECTS_FILE);
            ProjectCatalog::default()
        });
        Self {
            state,
            history: History::new(),
            view: ViewState::new(),
            ids: IdAllocator::new(),
            store,
            projects,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            chat: Conversation::new(),
        }
    }

    /// Replace the id allocator.
    #[must_use]
    pub fn with_ids(mut self, ids: IdAllocator) -> Self {
        self.ids = ids;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The current document.
    #[must_use]
    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// The undo/redo history.
    #[must_use]
    pub fn history(&self) -> &History<DocumentState> {
        &self.history
    }

    /// The view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable view state.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Saved projects.
    #[must_use]
    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    /// Name the current project saves under.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Rename the current project.
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// The assistant conversation.
    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.chat
    }

    /// The selected element, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Element> {
        self.view
            .selected
            .as_ref()
            .and_then(|id| self.state.element(id))
    }

    // -----------------------------------------------------------------------
    // Commit path
    // -----------------------------------------------------------------------

    /// Make `next` the current document as one undo step.
    ///
    /// Returns `false` without touching history when `next` equals the
    /// current document.
    pub fn commit(&mut self, next: DocumentState) -> bool {
        if next == self.state {
            return false;
        }
        let previous = std::mem::replace(&mut self.state, next);
        self.history.commit(previous);
        tracing::debug!(
            elements = self.state.len(),
            undo_levels = self.history.undo_levels(),
            "Committed document"
        );
        self.store.persist_state(&self.state);
        true
    }

    fn commit_some(&mut self, next: Option<DocumentState>) -> bool {
        next.is_some_and(|next| self.commit(next))
    }

    /// Step back one commit.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.state) {
            return false;
        }
        tracing::debug!(redo_levels = self.history.redo_levels(), "Undo");
        self.view.reconcile(&self.state);
        self.store.persist_state(&self.state);
        true
    }

    /// Step forward one undone commit.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.state) {
            return false;
        }
        tracing::debug!(undo_levels = self.history.undo_levels(), "Redo");
        self.view.reconcile(&self.state);
        self.store.persist_state(&self.state);
        true
    }

    // -----------------------------------------------------------------------
    // Element operations
    // -----------------------------------------------------------------------

    /// Append a new element of `kind` and select it.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.ids.next(IdScope::Node);
        let next = self.state.with_appended(Element::new(id.clone(), kind));
        self.commit(next);
        self.view.select(id.clone());
        id
    }

    /// Replace an element's label.
    pub fn update_label(&mut self, id: &ElementId, label: &str) -> bool {
        let next = self.state.with_label(id, label);
        self.commit_some(next)
    }

    /// Merge a property patch into an element.
    pub fn update_props(&mut self, id: &ElementId, patch: &PropertySet) -> bool {
        let next = self.state.with_props(id, patch);
        self.commit_some(next)
    }

    /// Remove an element, clearing the selection if it was selected.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        let next = self.state.without(id);
        let deleted = self.commit_some(next);
        if deleted && self.view.is_selected(id) {
            self.view.deselect();
        }
        deleted
    }

    /// Insert a copy of an element directly after it.
    ///
    /// Returns the copy's id, or `None` if `id` is unknown.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        if !self.state.contains(id) {
            return None;
        }
        let new_id = self.ids.next(IdScope::Node);
        let next = self.state.with_duplicate(id, new_id.clone());
        self.commit_some(next).then_some(new_id)
    }

    /// Swap an element with its neighbor.
    pub fn move_element(&mut self, id: &ElementId, direction: Direction) -> bool {
        let next = self.state.with_moved(id, direction);
        self.commit_some(next)
    }

    /// Move `from` to the index of `to`, as a drag-and-drop does on drop.
    pub fn reorder(&mut self, from: &ElementId, to: &ElementId) -> bool {
        let next = self.state.with_reordered(from, to);
        self.commit_some(next)
    }

    /// Remove every element.
    pub fn clear_canvas(&mut self) -> bool {
        let next = self.state.cleared();
        self.view.deselect();
        self.commit(next)
    }

    /// Append a batch of elements as one undo step.
    pub fn add_template_batch(&mut self, batch: Vec<Element>) -> bool {
        if batch.is_empty() {
            return false;
        }
        let next = self.state.with_batch(batch);
        self.commit(next)
    }

    /// Append a template with fresh ids. Returns the new ids.
    pub fn insert_template(&mut self, template: Template) -> Vec<ElementId> {
        let batch = instantiate_all(&template.blueprints(), &mut self.ids, IdScope::Template);
        let ids = batch.iter().map(|e| e.id.clone()).collect();
        self.add_template_batch(batch);
        ids
    }

    /// Synthesize elements from a prompt and append them as one undo step.
    ///
    /// Blank prompts do nothing. Returns the new ids.
    pub fn synthesize(&mut self, prompt: &str) -> Vec<ElementId> {
        if prompt.trim().is_empty() {
            return Vec::new();
        }
        let batch = synthesis::synthesize(prompt, &mut self.ids);
        let ids = batch.iter().map(|e| e.id.clone()).collect();
        self.add_template_batch(batch);
        self.view.close(Panel::Prompt);
        ids
    }

    // -----------------------------------------------------------------------
    // Page settings
    // -----------------------------------------------------------------------

    /// Switch the page palette.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        let next = self.state.with_theme(theme);
        self.view.close(Panel::Themes);
        self.commit(next)
    }

    /// Switch the column layout.
    pub fn set_columns(&mut self, columns: Columns) -> bool {
        let next = self.state.with_columns(columns);
        self.commit(next)
    }

    /// Replace the brand tokens.
    pub fn set_brand(&mut self, brand: BrandKit) -> bool {
        let next = self.state.with_brand(brand);
        self.commit(next)
    }

    /// Overwrite element properties from brand tokens.
    pub fn sync_brand(&mut self, fields: &[BrandField]) -> bool {
        let next = self.state.with_brand_synced(fields);
        self.commit(next)
    }

    /// Replace elements, theme and columns with a premade page.
    ///
    /// The brand is kept. The page becomes the current project name.
    pub fn load_premade(&mut self, premade: Premade) -> bool {
        let elements = instantiate_all(&premade.blueprints(), &mut self.ids, IdScope::Template);
        let next = DocumentState {
            elements: Vec::new(),
            theme: premade.theme(),
            columns: premade.columns(),
            brand: self.state.brand.clone(),
        }
        .with_batch(elements);
        self.project_name = premade.name().to_string();
        self.view.deselect();
        self.commit(next)
    }

    // -----------------------------------------------------------------------
    // Import / export
    // -----------------------------------------------------------------------

    /// Structured-data export of the current document.
    #[must_use]
    pub fn export_json(&self) -> String {
        ExportDocument::from(&self.state).to_json_pretty()
    }

    /// Replace the document with an imported payload as one undo step.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidImport`] or
    /// [`EditorError::MissingElements`] for a bad payload; the document is
    /// unchanged in that case.
    pub fn import_json(&mut self, text: &str) -> EditorResult<()> {
        let next = ImportDocument::parse(text)?.apply_to(&self.state);
        self.view.deselect();
        self.commit(next);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Save the current document under the current project name.
    pub fn save_project(&mut self) {
        let name = self.project_name.clone();
        self.projects.save(&name, self.state.clone());
        self.store.persist_projects(&self.projects);
    }

    /// Load a saved project as one undo step.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ProjectNotFound`] if no project has this name.
    pub fn load_project(&mut self, name: &str) -> EditorResult<()> {
        let state = self
            .projects
            .get(name)
            .map(|p| p.state.clone())
            .ok_or_else(|| EditorError::ProjectNotFound(name.to_string()))?;
        self.project_name = name.to_string();
        self.view.escape();
        self.commit(state);
        Ok(())
    }

    /// Delete a saved project.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ProjectNotFound`] if no project has this name.
    pub fn delete_project(&mut self, name: &str) -> EditorResult<()> {
        if !self.projects.remove(name) {
            return Err(EditorError::ProjectNotFound(name.to_string()));
        }
        self.store.persist_projects(&self.projects);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Assistant
    // -----------------------------------------------------------------------

    /// Send a chat message; its reply is resolved later.
    pub fn send_chat(&mut self, text: &str, now: Instant) -> bool {
        self.chat.send(text, now)
    }

    /// Resolve every reply due at `now` against the current document.
    ///
    /// Returns the number of replies resolved.
    pub fn resolve_replies(&mut self, now: Instant) -> usize {
        let due = self.chat.take_due(now);
        self.answer(due.into_iter().map(|r| r.input))
    }

    /// Resolve every queued reply immediately.
    pub fn resolve_all_replies(&mut self) -> usize {
        let due = self.chat.take_all();
        self.answer(due.into_iter().map(|r| r.input))
    }

    fn answer(&mut self, inputs: impl Iterator<Item = String>) -> usize {
        let mut count = 0;
        for input in inputs {
            let command = Command::interpret(&input);
            self.apply_command(command);
            self.chat.reply(command.reply());
            count += 1;
        }
        count
    }

    /// Apply an assistant command to the current document.
    pub fn apply_command(&mut self, command: Command) -> bool {
        tracing::debug!("Assistant command: {command:?}");
        match command {
            Command::Recolor(swatch) => {
                let patch = PropertySet {
                    bg: Some(swatch.hex().to_string()),
                    ..PropertySet::default()
                };
                let next = self.state.with_props_everywhere(&patch);
                self.commit(next)
            }
            Command::CenterAll => {
                let patch = PropertySet {
                    align: Some(Align::Center),
                    ..PropertySet::default()
                };
                let next = self.state.with_props_everywhere(&patch);
                self.commit(next)
            }
            Command::Clear => self.clear_canvas(),
            Command::SetTheme(theme) => self.set_theme(theme),
            Command::Help => false,
        }
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Handle a key press. Returns the shortcut that fired, if any.
    pub fn apply_shortcut(&mut self, press: &KeyPress, typing: bool) -> Option<Shortcut> {
        let shortcut = keys::resolve(press, typing)?;
        match shortcut {
            Shortcut::Undo => {
                self.undo();
            }
            Shortcut::Redo => {
                self.redo();
            }
            Shortcut::Duplicate => {
                if let Some(id) = self.view.selected.clone() {
                    self.duplicate_element(&id);
                }
            }
            Shortcut::SaveProject => self.save_project(),
            Shortcut::DeleteSelected => {
                if let Some(id) = self.view.selected.clone() {
                    self.delete_element(&id);
                }
            }
            Shortcut::Escape => self.view.escape(),
            Shortcut::ZoomIn => self.view.zoom_in(),
            Shortcut::ZoomOut => self.view.zoom_out(),
            Shortcut::ZoomReset => self.view.reset_zoom(),
        }
        Some(shortcut)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
