//! # Pagewright Codegen
//!
//! Turns a page document into text, in lock-step with the live preview.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │        ResolvedStyle (element, brand)       │
//! ├───────────────┬───────────────┬─────────────┤
//! │ Fragments     │ Stylesheet    │ Preview     │
//! │ - markup      │ - one rule    │ - tag       │
//! │ - component   │   per element │ - inline    │
//! ├───────────────┴───────────────┴─────────────┤
//! │  Structured data (serde, lossless)          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every generator is a pure function of the element list and an optional
//! brand. [`ExportFormat`] picks one for a whole document.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod component;
pub mod error;
pub mod export;
pub mod fragment;
pub mod markup;
pub mod preview;
pub mod structured;
pub mod style;
pub mod stylesheet;

pub use error::{CodegenError, CodegenResult};
pub use export::{export, export_named, Export, ExportFormat};
pub use fragment::Content;
pub use preview::{preview, preview_document, PreviewNode};
pub use style::{Declaration, ResolvedStyle};
