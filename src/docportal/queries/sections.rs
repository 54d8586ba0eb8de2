use crate::model::{Document, Section};

/// Documents belonging to one section, in collection order.
pub fn in_section(docs: &[Document], section: Section) -> Vec<Document> {
    docs.iter()
        .filter(|doc| doc.section == section)
        .cloned()
        .collect()
}

/// Documents flagged critical, shown as the quick-access cards.
pub fn critical(docs: &[Document]) -> Vec<Document> {
    docs.iter().filter(|doc| doc.critical).cloned().collect()
}
