//! Named project snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::current_timestamp_ms;
use crate::DocumentState;

/// A named, timestamped snapshot of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Name the project is keyed by.
    pub name: String,
    /// The saved document.
    pub state: DocumentState,
    /// Save time, Unix milliseconds.
    pub saved_at: u64,
}

/// Saved projects keyed by name, oldest save first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Save `state` under `name`, replacing any project with the same name.
    ///
    /// The saved project moves to the end of the collection.
    pub fn save(&mut self, name: &str, state: DocumentState) -> &Project {
        self.projects.retain(|p| p.name != name);
        self.projects.push(Project {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            state,
            saved_at: current_timestamp_ms(),
        });
        tracing::debug!("Saved project {name}");
        &self.projects[self.projects.len() - 1]
    }

    /// Get a project by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Remove a project by name. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.name != name);
        self.projects.len() != before
    }

    /// Project names in save order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// Iterate over projects in save order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Number of saved projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if no projects are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
