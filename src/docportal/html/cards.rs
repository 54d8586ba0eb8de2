use super::escape;
use crate::model::{Document, Resource};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shown when a search matches nothing.
pub const NO_RESULTS: &str =
    "<p>No se encontraron documentos que coincidan con tu búsqueda.</p>";

/// Full card for a document, used on the home page sections and the
/// quick-access panel. The Área span is omitted when the document has no
/// area.
pub fn doc_card(doc: &Document) -> String {
    let area = doc
        .area
        .as_deref()
        .map(|a| format!("<span><strong>Área:</strong> {}</span>", escape(a)))
        .unwrap_or_default();

    format!(
        concat!(
            "<div class=\"doc-card\">\n",
            "  <h3><a href=\"{url}\">{title}</a></h3>\n",
            "  <div class=\"doc-meta\">\n",
            "    <span><strong>Versión:</strong> {version}</span>\n",
            "    <span><strong>Actualizado:</strong> {updated}</span>\n",
            "    {area}\n",
            "  </div>\n",
            "  <p class=\"doc-summary\">{summary}</p>\n",
            "  <div class=\"doc-tags\">{tags}</div>\n",
            "</div>\n"
        ),
        url = escape(&doc.url),
        title = escape(&doc.title),
        version = escape(&doc.version),
        updated = doc.updated.format(DATE_FORMAT),
        area = area,
        summary = escape(&doc.summary),
        tags = tag_chips(&doc.tags),
    )
}

pub fn doc_cards(docs: &[Document]) -> String {
    docs.iter().map(doc_card).collect()
}

/// Compact result item for the search panel.
pub fn search_result(doc: &Document) -> String {
    format!(
        concat!(
            "<div class=\"search-result-item\">\n",
            "  <h3><a href=\"{url}\">{title}</a></h3>\n",
            "  <div class=\"search-result-meta\">{section} • Versión {version} • {updated}</div>\n",
            "  <p>{summary}</p>\n",
            "</div>\n"
        ),
        url = escape(&doc.url),
        title = escape(&doc.title),
        section = doc.section,
        version = escape(&doc.version),
        updated = doc.updated.format(DATE_FORMAT),
        summary = escape(&doc.summary),
    )
}

pub fn search_results(docs: &[Document]) -> String {
    docs.iter().map(search_result).collect()
}

/// Card for a resource, with the related-document links ("Ninguno" when
/// there are none) and the open action.
pub fn resource_card(res: &Resource) -> String {
    let related = if res.related.is_empty() {
        "Ninguno".to_string()
    } else {
        res.related
            .iter()
            .map(|doc| format!("<a href=\"{}\">{}</a>", escape(&doc.url), escape(&doc.title)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        concat!(
            "<div class=\"resource-card\" data-type=\"{kind}\" data-area=\"{area}\">\n",
            "  <div class=\"resource-header\">\n",
            "    <h3>{title}</h3>\n",
            "    <span class=\"resource-type\">{kind}</span>\n",
            "  </div>\n",
            "  <div class=\"resource-meta\"><strong>Área:</strong> {area} • <strong>Fecha:</strong> {date}</div>\n",
            "  <div class=\"resource-tags\">{tags}</div>\n",
            "  <div class=\"resource-related\"><strong>Documentos relacionados:</strong> {related}</div>\n",
            "  <div class=\"resource-actions\">\n",
            "    <a href=\"{file_path}\" class=\"btn btn-primary\" target=\"_blank\">Abrir recurso</a>\n",
            "  </div>\n",
            "</div>\n"
        ),
        kind = escape(&res.kind),
        area = escape(&res.area),
        title = escape(&res.title),
        date = res.date.format(DATE_FORMAT),
        tags = tag_chips(&res.tags),
        related = related,
        file_path = escape(&res.file_path),
    )
}

pub fn resource_cards(resources: &[Resource]) -> String {
    resources.iter().map(resource_card).collect()
}

// Tag chips carry the tag in a data attribute; the host page wires up the
// click-to-search behavior.
fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            format!(
                "<span class=\"tag\" data-tag=\"{0}\">{0}</span>",
                escape(tag)
            )
        })
        .collect()
}
