use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed sections of the portal. Anything the data files invent beyond the
/// three known sections lands in `Otros`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Protocolos,
    Procedimientos,
    Matrices,
    #[serde(other)]
    Otros,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Protocolos => "protocolos",
            Section::Procedimientos => "procedimientos",
            Section::Matrices => "matrices",
            Section::Otros => "otros",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy/protocol record, one card on the portal home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub section: Section,
    pub version: String,
    pub updated: NaiveDate,
    #[serde(default)]
    pub area: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub critical: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A supplementary file record shown on the resources page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub area: String,
    pub date: NaiveDate,
    pub file_path: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "related_docs")]
    pub related: Vec<RelatedDoc>,
}

/// A title+url pair linking a resource back to a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedDoc {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_deserializes_known_values() {
        let s: Section = serde_json::from_str("\"protocolos\"").unwrap();
        assert_eq!(s, Section::Protocolos);
        let s: Section = serde_json::from_str("\"matrices\"").unwrap();
        assert_eq!(s, Section::Matrices);
    }

    #[test]
    fn section_unknown_value_falls_back_to_otros() {
        let s: Section = serde_json::from_str("\"formularios\"").unwrap();
        assert_eq!(s, Section::Otros);
    }

    #[test]
    fn document_optional_fields_default() {
        let json = r#"{
            "title": "Plan de emergencia",
            "url": "/docs/plan-emergencia.html",
            "section": "protocolos",
            "version": "2.1",
            "updated": "2024-03-18",
            "summary": "Actuación ante emergencias."
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.area, None);
        assert!(!doc.critical);
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn resource_renames_type_and_related_docs() {
        let json = r#"{
            "title": "Plantilla de auditoría",
            "type": "plantilla",
            "area": "Calidad",
            "date": "2024-01-09",
            "file_path": "/files/plantilla-auditoria.xlsx",
            "tags": ["auditoria"],
            "related_docs": [{"title": "Protocolo de auditoría", "url": "/docs/auditoria.html"}]
        }"#;
        let res: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(res.kind, "plantilla");
        assert_eq!(res.related.len(), 1);
        assert_eq!(res.related[0].title, "Protocolo de auditoría");
    }
}
