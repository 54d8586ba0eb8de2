//! Pure query logic over the loaded collections. Every function here takes
//! slices and returns fresh `Vec`s; nothing in this module performs I/O or
//! mutates its input.

pub mod filter;
pub mod search;
pub mod sections;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Document, RelatedDoc, Resource, Section};
    use chrono::NaiveDate;

    pub fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    pub fn doc(title: &str, section: Section, tags: &[&str]) -> Document {
        Document {
            title: title.to_string(),
            url: format!("/docs/{}.html", title.to_lowercase().replace(' ', "-")),
            section,
            version: "1.0".to_string(),
            updated: date("2024-03-01"),
            area: None,
            summary: String::new(),
            critical: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn resource(title: &str, kind: &str, area: &str, tags: &[&str]) -> Resource {
        Resource {
            title: title.to_string(),
            kind: kind.to_string(),
            area: area.to_string(),
            date: date("2024-01-15"),
            file_path: format!("/files/{}.pdf", title.to_lowercase().replace(' ', "-")),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            related: Vec::new(),
        }
    }

    pub fn related(title: &str, url: &str) -> RelatedDoc {
        RelatedDoc {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}
