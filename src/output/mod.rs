//! Rendering: publication cards, the per-year SVG chart, and page assembly.

pub mod list;
pub mod page;
mod page_template;
pub mod svg;

pub use list::{ListRenderer, TypeFilter};
pub use page::{PageTemplate, render_page};

/// Escape HTML special characters.
///
/// Applied to every user-supplied text field before insertion; the input
/// data is untrusted.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
