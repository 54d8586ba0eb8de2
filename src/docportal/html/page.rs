use std::collections::{HashMap, HashSet};

/// Named insertion points of the host pages, matching the element ids the
/// portal's HTML declares.
pub mod slots {
    pub const STAT_PROTOCOLOS: &str = "stat-protocolos";
    pub const STAT_PROCEDIMIENTOS: &str = "stat-procedimientos";
    pub const STAT_MATRICES: &str = "stat-matrices";
    pub const STAT_OTROS: &str = "stat-otros";
    pub const QUICK_ACCESS: &str = "quickAccessCards";
    pub const PROTOCOLOS_LIST: &str = "protocolosList";
    pub const PROCEDIMIENTOS_LIST: &str = "procedimientosList";
    pub const MATRICES_LIST: &str = "matricesList";
    pub const SEARCH_RESULTS: &str = "searchResults";
    pub const RESOURCES_GRID: &str = "resourcesGrid";
}

const MARKER_OPEN: &str = "<!-- slot:";
const MARKER_CLOSE: &str = " -->";

/// Abstract render target: a set of named insertion points in a
/// host-provided page. Writing to a slot the host does not declare is a
/// no-op.
pub trait RenderTarget {
    fn set_slot(&mut self, name: &str, html: String);
}

/// In-memory render target. Either accepts any slot name (fragment
/// rendering) or only the slots a host template declares via
/// `<!-- slot:NAME -->` markers.
#[derive(Debug, Default)]
pub struct PageSlots {
    known: Option<HashSet<String>>,
    filled: HashMap<String, String>,
}

impl PageSlots {
    /// A target that accepts every slot name.
    pub fn new() -> Self {
        Self::default()
    }

    /// A target restricted to the given slot names.
    pub fn with_slots<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: Some(names.into_iter().map(Into::into).collect()),
            filled: HashMap::new(),
        }
    }

    /// A target restricted to the `<!-- slot:NAME -->` markers found in a
    /// host template.
    pub fn from_template(template: &str) -> Self {
        Self::with_slots(scan_markers(template))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.filled.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    /// Names of the filled slots, sorted for stable output.
    pub fn filled_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filled.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Splice the filled slots into a host template, replacing each
    /// `<!-- slot:NAME -->` marker. Markers without content are removed.
    pub fn apply(&self, template: &str) -> String {
        let mut out = template.to_string();
        for name in scan_markers(template) {
            let marker = format!("{}{}{}", MARKER_OPEN, name, MARKER_CLOSE);
            let content = self.get(&name).unwrap_or("");
            out = out.replace(&marker, content);
        }
        out
    }
}

impl RenderTarget for PageSlots {
    fn set_slot(&mut self, name: &str, html: String) {
        if let Some(known) = &self.known {
            if !known.contains(name) {
                return;
            }
        }
        self.filled.insert(name.to_string(), html);
    }
}

fn scan_markers(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(MARKER_OPEN) {
        rest = &rest[start + MARKER_OPEN.len()..];
        if let Some(end) = rest.find(MARKER_CLOSE) {
            let name = &rest[..end];
            if !name.is_empty() && !name.contains(char::is_whitespace) {
                names.push(name.to_string());
            }
            rest = &rest[end + MARKER_CLOSE.len()..];
        } else {
            break;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_target_accepts_any_slot() {
        let mut page = PageSlots::new();
        page.set_slot(slots::SEARCH_RESULTS, "<p>hit</p>".to_string());
        assert_eq!(page.get(slots::SEARCH_RESULTS), Some("<p>hit</p>"));
    }

    #[test]
    fn unknown_slot_on_restricted_target_is_a_noop() {
        let mut page = PageSlots::with_slots([slots::RESOURCES_GRID]);
        page.set_slot(slots::SEARCH_RESULTS, "dropped".to_string());
        page.set_slot(slots::RESOURCES_GRID, "kept".to_string());
        assert_eq!(page.get(slots::SEARCH_RESULTS), None);
        assert_eq!(page.get(slots::RESOURCES_GRID), Some("kept"));
    }

    #[test]
    fn scans_markers_from_template() {
        let template = "<header></header>\n<!-- slot:quickAccessCards -->\n<!-- slot:searchResults -->";
        let mut page = PageSlots::from_template(template);
        page.set_slot(slots::QUICK_ACCESS, "cards".to_string());
        page.set_slot(slots::RESOURCES_GRID, "not declared".to_string());
        assert_eq!(page.get(slots::QUICK_ACCESS), Some("cards"));
        assert_eq!(page.get(slots::RESOURCES_GRID), None);
    }

    #[test]
    fn apply_replaces_markers_and_clears_unfilled_ones() {
        let template = "<main><!-- slot:searchResults --></main><aside><!-- slot:resourcesGrid --></aside>";
        let mut page = PageSlots::from_template(template);
        page.set_slot(slots::SEARCH_RESULTS, "<p>uno</p>".to_string());

        let html = page.apply(template);
        assert_eq!(html, "<main><p>uno</p></main><aside></aside>");
    }

    #[test]
    fn overwriting_a_slot_keeps_the_latest_content() {
        let mut page = PageSlots::new();
        page.set_slot(slots::SEARCH_RESULTS, "old".to_string());
        page.set_slot(slots::SEARCH_RESULTS, String::new());
        assert_eq!(page.get(slots::SEARCH_RESULTS), Some(""));
    }
}
