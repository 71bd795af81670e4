use meridian_search::SortKey;

/// Paging and ordering options shared by list and search endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Vec<SortKey>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Appends one sort key; keys render in call order, e.g. `CODE,-DATE`.
    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort.push(key);
        self
    }

    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if !self.sort.is_empty() {
            let rendered: Vec<String> = self.sort.iter().map(ToString::to_string).collect();
            pairs.push(("sort".to_string(), rendered.join(",")));
        }
        pairs
    }
}
