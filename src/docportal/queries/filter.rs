use crate::model::Resource;

/// Resource filter state: exact-match categories plus an optional free-text
/// query. `Default` is the cleared state and matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub kind: Option<String>,
    pub area: Option<String>,
    pub query: Option<String>,
}

impl ResourceFilter {
    pub fn is_clear(&self) -> bool {
        self.kind.is_none() && self.area.is_none() && self.effective_query().is_none()
    }

    fn effective_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

/// Intersection of whichever filters are set: exact match on type and area,
/// substring match (case-insensitive) over title and tags for the query.
pub fn run(resources: &[Resource], filter: &ResourceFilter) -> Vec<Resource> {
    let query = filter.effective_query();
    resources
        .iter()
        .filter(|res| {
            filter.kind.as_deref().map_or(true, |k| res.kind == k)
                && filter.area.as_deref().map_or(true, |a| res.area == a)
                && query.as_deref().map_or(true, |q| text_match(res, q))
        })
        .cloned()
        .collect()
}

/// Exact tag membership, the tag-chip click path.
pub fn by_tag(resources: &[Resource], tag: &str) -> Vec<Resource> {
    resources
        .iter()
        .filter(|res| res.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

fn text_match(res: &Resource, q: &str) -> bool {
    res.title.to_lowercase().contains(q)
        || res.tags.iter().any(|tag| tag.to_lowercase().contains(q))
}
