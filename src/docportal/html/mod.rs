//! # Renderer
//!
//! Record → HTML fragment functions ([`cards`]) and the slot abstraction
//! over the host page ([`page`]). The templates are fixed strings; all
//! interpolated field text is HTML-escaped. Rendering never fails: missing
//! optional fields degrade to omitted markup, and an empty record slice
//! renders to an empty string.

pub mod cards;
pub mod page;

/// Minimal HTML escaping for interpolated text and attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
