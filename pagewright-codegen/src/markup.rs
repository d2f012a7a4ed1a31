//! Standalone markup document.

use std::fmt::Write;

use pagewright_core::{BrandKit, Element};

use crate::fragment;

/// Document title of the exported page.
pub const TITLE: &str = "Pagewright Export";

const FRAGMENT_INDENT: &str = "    ";

/// Render `elements` into a standalone markup document.
///
/// Fragments appear in order inside `<main>`, separated by blank lines. An
/// empty list yields the same shell with an empty `<main>`.
#[must_use]
pub fn generate<E: AsRef<Element>>(elements: &[E], brand: Option<&BrandKit>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"UTF-8\" />\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    let _ = writeln!(out, "  <title>{TITLE}</title>");
    out.push_str("  <script src=\"https://cdn.tailwindcss.com\"></script>\n");
    out.push_str(
        "  <style>body { background: #0a0a0b; color: #fff; font-family: sans-serif; }</style>\n",
    );
    out.push_str("</head>\n");
    out.push_str("<body class=\"p-8\">\n");
    out.push_str("  <main class=\"space-y-6\">\n");

    let body = fragment::render_all(elements, brand, FRAGMENT_INDENT);
    if !body.is_empty() {
        let _ = writeln!(out, "{body}");
    }

    out.push_str("  </main>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_core::{ElementId, ElementKind};

    #[test]
    fn test_empty_document_has_empty_main() {
        let html = generate::<Element>(&[], None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Pagewright Export</title>"));
        assert!(html.contains("<main class=\"space-y-6\">\n  </main>"));
    }

    #[test]
    fn test_fragments_in_order() {
        let elements = vec![
            Element::new(ElementId::from("a"), ElementKind::Navbar),
            Element::new(ElementId::from("b"), ElementKind::Button),
        ];
        let html = generate(&elements, None);
        let nav = html.find("<nav ").expect("navbar fragment");
        let button = html.find("<button ").expect("button fragment");
        assert!(nav < button);
        assert!(html.contains("</nav>\n\n    <button "));
    }
}
