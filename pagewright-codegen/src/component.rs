//! Component-source export.

use std::fmt::Write;

use pagewright_core::{BrandKit, Element};

use crate::fragment;

/// First line of every generated component.
pub const HEADER: &str = "// Generated by Pagewright";

const FRAGMENT_INDENT: &str = "      ";

/// Render `elements` inside a minimal component function.
///
/// The fragments are byte-identical to those in [`crate::markup::generate`];
/// only the shell differs.
#[must_use]
pub fn generate<E: AsRef<Element>>(elements: &[E], brand: Option<&BrandKit>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    out.push_str("import React from 'react';\n\n");
    out.push_str("export default function App() {\n");
    out.push_str("  return (\n");
    out.push_str("    <div className=\"p-8 space-y-6 bg-[#0a0a0b] min-h-screen text-white\">\n");

    let body = fragment::render_all(elements, brand, FRAGMENT_INDENT);
    if !body.is_empty() {
        let _ = writeln!(out, "{body}");
    }

    out.push_str("    </div>\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}
