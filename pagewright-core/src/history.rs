//! # Undo/Redo History
//!
//! Bounded linear history of full document snapshots.
//!
//! ## Design
//!
//! - Every committed mutation pushes the state it replaced onto `past`
//! - Committing clears `future`; a new edit invalidates everything undone
//! - Undo moves the current state to the front of `future`
//! - Redo moves the current state back onto `past`
//! - Undo and redo never commit
//!
//! Snapshots are whole states rather than inverse operations. With
//! elements held behind `Arc`, a snapshot costs one pointer per element.
//!
//! ## Example
//!
//! ```
//! use pagewright_core::History;
//!
//! let mut history = History::new();
//! let mut current = 1;
//!
//! history.commit(current);
//! current = 2;
//!
//! assert!(history.undo(&mut current));
//! assert_eq!(current, 1);
//! assert!(history.redo(&mut current));
//! assert_eq!(current, 2);
//! ```

use std::collections::VecDeque;

/// Maximum number of undo levels.
pub const HISTORY_LIMIT: usize = 50;

/// Undo/redo stacks.
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Prior states, most recent last.
    past: VecDeque<T>,
    /// Undone states, next redo first.
    future: VecDeque<T>,
    /// Maximum length of `past`.
    limit: usize,
}

impl<T> History<T> {
    /// Create a history holding at most [`HISTORY_LIMIT`] undo levels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Create a history with a custom undo depth (at least one level).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record `previous` as the state a new mutation replaced.
    pub fn commit(&mut self, previous: T) {
        self.push_past(previous);
        self.future.clear();
    }

    /// Step back: the most recent past state becomes `current`.
    ///
    /// Returns `false` and leaves `current` alone when there is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(current, previous);
        self.future.push_front(undone);
        true
    }

    /// Step forward: the next future state becomes `current`.
    ///
    /// Returns `false` and leaves `current` alone when there is nothing to redo.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.push_past(replaced);
        true
    }

    fn push_past(&mut self, state: T) {
        self.past.push_back(state);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo levels available.
    #[must_use]
    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    /// Number of redo levels available.
    #[must_use]
    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Maximum number of undo levels.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
