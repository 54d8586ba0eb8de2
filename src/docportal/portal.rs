//! The page-view facade. A [`Portal`] is instantiated once per page view:
//! it loads the two collections through a [`DataSource`], owns them for the
//! lifetime of the view, and drives every render into a [`RenderTarget`].
//! Queries never mutate the loaded collections; they hand back derived
//! copies.

use crate::html::cards;
use crate::html::page::{slots, RenderTarget};
use crate::model::{Document, Resource, Section};
use crate::queries::filter::{self, ResourceFilter};
use crate::queries::{search, sections, stats};
use crate::source::DataSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Structured diagnostic emitted by the portal, printed by whichever host
/// embeds it. Load failures surface here instead of crashing the page.
#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

pub struct Portal {
    documents: Vec<Document>,
    resources: Vec<Resource>,
    messages: Vec<Message>,
}

impl Portal {
    /// Load both collections. The loads are independent: a failure degrades
    /// that collection to empty and records a warning, and the other
    /// collection is unaffected.
    pub fn load<S: DataSource>(source: &S) -> Self {
        let mut messages = Vec::new();

        let documents = match source.load_documents() {
            Ok(docs) => docs,
            Err(e) => {
                messages.push(Message::warning(format!("Error loading documents: {}", e)));
                Vec::new()
            }
        };

        let resources = match source.load_resources() {
            Ok(res) => res,
            Err(e) => {
                messages.push(Message::warning(format!("Error loading resources: {}", e)));
                Vec::new()
            }
        };

        Self {
            documents,
            resources,
            messages,
        }
    }

    /// Build a portal from already-loaded collections (embedding hosts,
    /// tests).
    pub fn from_collections(documents: Vec<Document>, resources: Vec<Resource>) -> Self {
        Self {
            documents,
            resources,
            messages: Vec::new(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn section_stats(&self) -> stats::SectionStats {
        stats::run(&self.documents)
    }

    pub fn search(&self, query: &str) -> Vec<Document> {
        search::run(&self.documents, query)
    }

    pub fn filter_resources(&self, filter: &ResourceFilter) -> Vec<Resource> {
        filter::run(&self.resources, filter)
    }

    /// Home page pipeline: section counters, quick-access cards for
    /// critical documents, and the three per-section card lists.
    pub fn initialize_home<T: RenderTarget>(&self, page: &mut T) {
        let counts = self.section_stats();
        page.set_slot(slots::STAT_PROTOCOLOS, counts.protocolos.to_string());
        page.set_slot(slots::STAT_PROCEDIMIENTOS, counts.procedimientos.to_string());
        page.set_slot(slots::STAT_MATRICES, counts.matrices.to_string());
        page.set_slot(slots::STAT_OTROS, counts.otros.to_string());

        page.set_slot(
            slots::QUICK_ACCESS,
            cards::doc_cards(&sections::critical(&self.documents)),
        );
        page.set_slot(
            slots::PROTOCOLOS_LIST,
            cards::doc_cards(&sections::in_section(&self.documents, Section::Protocolos)),
        );
        page.set_slot(
            slots::PROCEDIMIENTOS_LIST,
            cards::doc_cards(&sections::in_section(
                &self.documents,
                Section::Procedimientos,
            )),
        );
        page.set_slot(
            slots::MATRICES_LIST,
            cards::doc_cards(&sections::in_section(&self.documents, Section::Matrices)),
        );
    }

    /// Search panel pipeline: an empty query clears the panel, zero hits
    /// render the no-results message, anything else renders result items.
    pub fn render_search<T: RenderTarget>(&self, page: &mut T, query: &str) {
        if query.trim().is_empty() {
            page.set_slot(slots::SEARCH_RESULTS, String::new());
            return;
        }

        let hits = self.search(query);
        let html = if hits.is_empty() {
            cards::NO_RESULTS.to_string()
        } else {
            cards::search_results(&hits)
        };
        page.set_slot(slots::SEARCH_RESULTS, html);
    }

    /// Tag-chip click path on the home page: search with the tag as query.
    pub fn search_by_tag<T: RenderTarget>(&self, page: &mut T, tag: &str) {
        self.render_search(page, tag);
    }

    /// Resources grid pipeline. `ResourceFilter::default()` renders the
    /// full, unfiltered list (the cleared-filters state).
    pub fn render_resources<T: RenderTarget>(&self, page: &mut T, filter: &ResourceFilter) {
        page.set_slot(
            slots::RESOURCES_GRID,
            cards::resource_cards(&self.filter_resources(filter)),
        );
    }

    /// Tag-chip click path on the resources page: exact tag membership.
    pub fn resources_by_tag<T: RenderTarget>(&self, page: &mut T, tag: &str) {
        page.set_slot(
            slots::RESOURCES_GRID,
            cards::resource_cards(&filter::by_tag(&self.resources, tag)),
        );
    }
}
