use crate::model::Document;

/// Case-insensitive substring search over title, summary, tags, and area.
///
/// Returns all matches in collection order. Callers decide what an empty
/// query means (the portal clears the results panel for it).
pub fn run(docs: &[Document], query: &str) -> Vec<Document> {
    let q = query.trim().to_lowercase();
    docs.iter()
        .filter(|doc| matches(doc, &q))
        .cloned()
        .collect()
}

fn matches(doc: &Document, q: &str) -> bool {
    doc.title.to_lowercase().contains(q)
        || doc.summary.to_lowercase().contains(q)
        || doc.tags.iter().any(|tag| tag.to_lowercase().contains(q))
        || doc
            .area
            .as_deref()
            .map_or(false, |area| area.to_lowercase().contains(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::queries::fixtures::doc;

    #[test]
    fn matches_title_case_insensitively() {
        let docs = vec![doc("Fire Safety", Section::Protocolos, &["safety", "fire"])];
        let hits = run(&docs, "FIRE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Fire Safety");
    }

    #[test]
    fn matches_tags_and_area() {
        let mut d = doc("Plan anual", Section::Matrices, &["planificacion"]);
        d.area = Some("Calidad".to_string());
        let docs = vec![d];

        assert_eq!(run(&docs, "planif").len(), 1);
        assert_eq!(run(&docs, "calidad").len(), 1);
    }

    #[test]
    fn matches_summary() {
        let mut d = doc("Acta tipo", Section::Otros, &[]);
        d.summary = "Modelo de acta para reuniones de comité.".to_string();
        assert_eq!(run(&[d], "comité").len(), 1);
    }

    #[test]
    fn no_hits_for_unrelated_query() {
        let docs = vec![doc("Fire Safety", Section::Protocolos, &["safety", "fire"])];
        assert!(run(&docs, "water").is_empty());
    }

    #[test]
    fn every_hit_contains_the_query_somewhere() {
        let docs = vec![
            doc("Control de accesos", Section::Protocolos, &["seguridad"]),
            doc("Acceso a historiales", Section::Procedimientos, &[]),
            doc("Matriz de riesgos", Section::Matrices, &["riesgos"]),
        ];
        let hits = run(&docs, "acceso");
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            let hay = format!(
                "{} {} {} {}",
                hit.title,
                hit.summary,
                hit.tags.join(" "),
                hit.area.as_deref().unwrap_or("")
            );
            assert!(hay.to_lowercase().contains("acceso"));
        }
    }

    #[test]
    fn preserves_collection_order() {
        let docs = vec![
            doc("B seguridad", Section::Otros, &[]),
            doc("A seguridad", Section::Otros, &[]),
        ];
        let hits = run(&docs, "seguridad");
        assert_eq!(hits[0].title, "B seguridad");
        assert_eq!(hits[1].title, "A seguridad");
    }
}
