//! Element id allocation.
//!
//! Every creation path (manual add, duplicate, template insert, premade load,
//! prompt synthesis) draws from one monotonically increasing counter, so ids
//! never collide across paths. The scope only changes the prefix.

use uuid::Uuid;

use crate::ElementId;

/// Which creation path an id is allocated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScope {
    /// Added or duplicated from the editor.
    Node,
    /// Inserted from a template or premade project.
    Template,
    /// Produced by prompt synthesis.
    Synthesis,
}

impl IdScope {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Template => "tpl",
            Self::Synthesis => "ai",
        }
    }
}

/// Session-scoped id counter.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    session: String,
    counter: u64,
}

impl IdAllocator {
    /// Create an allocator with a random session tag.
    #[must_use]
    pub fn new() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self::with_session(&tag[..8])
    }

    /// Create an allocator with a fixed session tag.
    #[must_use]
    pub fn with_session(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            counter: 0,
        }
    }

    /// Allocate the next id.
    pub fn next(&mut self, scope: IdScope) -> ElementId {
        self.counter += 1;
        ElementId::new(format!(
            "{}-{}-{}",
            scope.prefix(),
            self.session,
            self.counter
        ))
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter
    }

    /// Session tag embedded in every id.
    #[must_use]
    pub fn session(&self) -> &str {
        &self.session
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
