//! # Pagewright Core
//!
//! Document model and editing engine for the Pagewright page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Editor                    │
//! ├─────────────────────────────────────────────┤
//! │  Document Store  │  History                 │
//! │  - Elements      │  - Bounded undo (50)     │
//! │  - Theme/columns │  - Redo                  │
//! │  - Brand kit     │  - Full-state snapshots  │
//! ├─────────────────────────────────────────────┤
//! │  Lifecycle       │  Synthesis / Assistant   │
//! │  - Duplicate     │  - Prompt intents        │
//! │  - Move / drag   │  - Chat commands         │
//! ├─────────────────────────────────────────────┤
//! │  Templates · Projects · Persistence · View  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every mutation produces a new [`DocumentState`] and passes through
//! [`Editor::commit`], the single writer path. Code generation over the
//! resulting document lives in `pagewright-codegen`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assistant;
pub mod brand;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod ids;
pub mod keys;
pub mod lifecycle;
pub mod project;
pub mod schema;
pub mod store;
pub mod synthesis;
pub mod templates;
pub mod theme;
pub mod view;

pub use assistant::{ChatMessage, Command, Conversation, PendingReply, Role, Swatch};
pub use brand::{BrandField, BrandKit, FontFamily};
pub use document::DocumentState;
pub use editor::Editor;
pub use element::{
    Align, Animation, Columns, Element, ElementId, ElementKind, FontSize, PaletteGroup,
    PropertySet, Shadow, WidthMode,
};
pub use error::{EditorError, EditorResult};
pub use history::{History, HISTORY_LIMIT};
pub use ids::{IdAllocator, IdScope};
pub use keys::{KeyModifiers, KeyPress, Shortcut};
pub use lifecycle::Direction;
pub use project::{Project, ProjectCatalog};
pub use schema::{ExportDocument, ImportDocument};
pub use store::{StateStore, StoreError};
pub use synthesis::Intent;
pub use templates::{Blueprint, Premade, Template};
pub use theme::{Palette, Theme};
pub use view::{Panel, ViewState};

/// Pagewright core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
