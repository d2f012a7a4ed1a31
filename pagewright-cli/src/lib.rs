//! # Pagewright CLI
//!
//! Command-line front end over a persisted Pagewright editing session.
//!
//! Each invocation loads the saved document from the data directory,
//! applies one operation and lets the editor persist the result.
//!
//! ## Usage
//!
//! ```bash
//! pagewright add button
//! pagewright prompt "build me a dashboard"
//! pagewright export --format html --output page.html
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Data directory and project name resolved from the arguments
//! - `Session` - Runs one `CliCommand` against a store-backed `Editor`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod session;

pub use session::Session;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pagewright_core::{editor::DEFAULT_PROJECT_NAME, BrandField, Direction, FontFamily};

/// Data directory used when neither `--data-dir` nor the environment sets one.
pub const DEFAULT_DATA_DIR: &str = ".pagewright";

/// Command-line arguments for pagewright.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagewright")]
#[command(about = "Assemble pages from typed components and export them as code")]
#[command(version)]
pub struct CliArgs {
    /// Directory holding the saved document and projects
    #[arg(long, env = "PAGEWRIGHT_DATA_DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

    /// Project name used by `save` when none is given
    #[arg(long, env = "PAGEWRIGHT_PROJECT", global = true)]
    pub project: Option<String>,

    /// Operation to run
    #[command(subcommand)]
    pub command: CliCommand,
}

/// One editor operation.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Append a component (button, input, textarea, text, select, toggle,
    /// badge, divider, card, navbar, hero, image)
    Add {
        /// Component kind
        kind: String,
    },
    /// Replace an element's label
    Label {
        /// Element id
        id: String,
        /// New label
        text: String,
    },
    /// Remove an element
    Delete {
        /// Element id
        id: String,
    },
    /// Insert a copy right after an element
    Duplicate {
        /// Element id
        id: String,
    },
    /// Swap an element with its neighbor
    Move {
        /// Element id
        id: String,
        /// Direction to move
        #[arg(value_enum)]
        direction: MoveArg,
    },
    /// Move an element to another element's position
    Reorder {
        /// Element to move
        from: String,
        /// Element whose position it takes
        to: String,
    },
    /// Generate elements from a description
    Prompt {
        /// Free-form description
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Ask the design assistant
    Chat {
        /// Message
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Append a template (pricing-table, glass-navbar, pro-hero)
    Template {
        /// Template name
        name: String,
    },
    /// Replace the page with a premade project
    Premade {
        /// Premade name
        name: String,
    },
    /// Switch the page palette
    Theme {
        /// Theme name
        name: String,
    },
    /// Set the column layout (1, 2 or 3)
    Columns {
        /// Column count
        count: u8,
    },
    /// Remove every element
    Clear,
    /// Edit brand tokens
    Brand {
        /// Primary color
        #[arg(long)]
        primary: Option<String>,
        /// Secondary color
        #[arg(long)]
        secondary: Option<String>,
        /// Accent color
        #[arg(long)]
        accent: Option<String>,
        /// Corner radius in pixels
        #[arg(long)]
        radius: Option<u32>,
        /// Font family
        #[arg(long, value_enum)]
        font: Option<FontArg>,
        /// Glass overlay on or off
        #[arg(long)]
        glass: Option<bool>,
    },
    /// Write brand tokens into every element
    SyncBrand {
        /// Fields to sync; all when omitted
        #[arg(long = "field", value_enum)]
        fields: Vec<SyncFieldArg>,
    },
    /// Print or write the page in one export format
    Export {
        /// component|tsx, markup|html, structured|json, stylesheet|css
        #[arg(long, short, default_value = "component")]
        format: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace the page with a structured-data file
    Import {
        /// JSON file with at least `elements`
        file: PathBuf,
    },
    /// Save the page as a named project
    Save {
        /// Project name
        name: Option<String>,
    },
    /// Load a saved project
    Load {
        /// Project name
        name: String,
    },
    /// List saved projects
    Projects,
    /// Delete a saved project
    DeleteProject {
        /// Project name
        name: String,
    },
    /// List the page's elements
    List,
}

/// `move` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoveArg {
    /// Toward the start.
    Up,
    /// Toward the end.
    Down,
}

impl From<MoveArg> for Direction {
    fn from(arg: MoveArg) -> Self {
        match arg {
            MoveArg::Up => Self::Up,
            MoveArg::Down => Self::Down,
        }
    }
}

/// `brand --font` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FontArg {
    /// System sans-serif.
    Sans,
    /// Monospace.
    Mono,
    /// Serif.
    Serif,
    /// Display face.
    Display,
}

impl From<FontArg> for FontFamily {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Sans => Self::Sans,
            FontArg::Mono => Self::Mono,
            FontArg::Serif => Self::Serif,
            FontArg::Display => Self::Display,
        }
    }
}

/// `sync-brand --field` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyncFieldArg {
    /// Brand radius into `radius`.
    Radius,
    /// Brand primary into `bg`.
    Primary,
    /// Brand secondary into `badgeColor`.
    Secondary,
}

impl From<SyncFieldArg> for BrandField {
    fn from(arg: SyncFieldArg) -> Self {
        match arg {
            SyncFieldArg::Radius => Self::Radius,
            SyncFieldArg::Primary => Self::Primary,
            SyncFieldArg::Secondary => Self::Secondary,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the document and projects are persisted.
    pub data_dir: PathBuf,
    /// Default project name for `save`.
    pub project: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            project: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            data_dir: args.data_dir,
            project: args
                .project
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        }
    }
}
