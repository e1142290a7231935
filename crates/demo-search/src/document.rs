//! Searchable documents, queries and results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result cap applied when a query does not set one
pub const DEFAULT_LIMIT: usize = 10;

/// A searchable document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document id
    pub id: u32,
    /// Title, matched by search
    pub title: String,
    /// Description, matched by search
    pub description: String,
    /// Category label
    pub category: String,
}

impl Document {
    /// Create document
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    /// Whether `needle` (already lowercased) occurs in title or description
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Text to look for; blank matches everything
    pub term: String,
    /// Maximum number of results; `0` means unlimited
    pub limit: usize,
}

impl SearchQuery {
    /// Query for `term` with the default limit
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// With result limit
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

/// A matching document stamped with the search time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Document id
    pub id: u32,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Category label
    pub category: String,
    /// When the search ran
    pub found_at: DateTime<Utc>,
}

impl SearchResult {
    pub(crate) fn from_document(doc: &Document, found_at: DateTime<Utc>) -> Self {
        Self {
            id: doc.id,
            title: doc.title.clone(),
            description: doc.description.clone(),
            category: doc.category.clone(),
            found_at,
        }
    }
}

/// Built-in corpus
#[must_use]
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(1, "Document One", "First sample document", "docs"),
        Document::new(2, "Document Two", "Second sample document", "docs"),
        Document::new(3, "Report Alpha", "Quarterly report", "reports"),
        Document::new(4, "Report Beta", "Annual summary", "reports"),
        Document::new(5, "Policy Document", "Company policies", "policy"),
    ]
}
