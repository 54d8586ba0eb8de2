use crate::model::{Document, Section};

/// Per-section document counts for the home page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionStats {
    pub protocolos: usize,
    pub procedimientos: usize,
    pub matrices: usize,
    pub otros: usize,
}

impl SectionStats {
    pub fn total(&self) -> usize {
        self.protocolos + self.procedimientos + self.matrices + self.otros
    }
}

pub fn run(docs: &[Document]) -> SectionStats {
    let mut stats = SectionStats::default();
    for doc in docs {
        match doc.section {
            Section::Protocolos => stats.protocolos += 1,
            Section::Procedimientos => stats.procedimientos += 1,
            Section::Matrices => stats.matrices += 1,
            Section::Otros => stats.otros += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures::doc;

    #[test]
    fn counts_each_section() {
        let docs = vec![
            doc("A", Section::Protocolos, &[]),
            doc("B", Section::Protocolos, &[]),
            doc("C", Section::Procedimientos, &[]),
            doc("D", Section::Matrices, &[]),
            doc("E", Section::Otros, &[]),
        ];
        let stats = run(&docs);
        assert_eq!(stats.protocolos, 2);
        assert_eq!(stats.procedimientos, 1);
        assert_eq!(stats.matrices, 1);
        assert_eq!(stats.otros, 1);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        assert_eq!(run(&[]), SectionStats::default());
    }
}
