//! Search service with query history

use crate::document::{sample_documents, Document, SearchQuery, SearchResult};
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;

/// Default number of entries returned by [`SearchService::recent_queries`]
pub const DEFAULT_RECENT: usize = 10;

/// In-memory search over a fixed document list
///
/// The corpus is immutable after construction; only the query history is
/// shared mutable state.
#[derive(Debug)]
pub struct SearchService {
    documents: Vec<Document>,
    history: Mutex<Vec<String>>,
}

impl SearchService {
    /// Create service over the built-in sample corpus
    #[must_use]
    pub fn new() -> Self {
        Self::with_documents(sample_documents())
    }

    /// Create service over an explicit corpus
    #[must_use]
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Corpus being searched
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Run a query and record it in the history
    ///
    /// A blank term returns every document. Otherwise a document matches
    /// when its title or description contains the term, ignoring case.
    /// Surrounding whitespace is part of a non-blank term.
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        tracing::info!(term = %query.term, "Executing search");

        let now = Utc::now();
        self.history.lock().push(format!(
            "[{}] Search: {}",
            now.to_rfc3339_opts(SecondsFormat::Micros, true),
            query.term
        ));

        let match_all = query.term.trim().is_empty();
        let needle = query.term.to_lowercase();
        let limit = if query.limit == 0 {
            usize::MAX
        } else {
            query.limit
        };

        self.documents
            .iter()
            .filter(|doc| match_all || doc.matches(&needle))
            .take(limit)
            .map(|doc| SearchResult::from_document(doc, now))
            .collect()
    }

    /// Last `count` history entries, oldest first
    pub fn recent_queries(&self, count: usize) -> Vec<String> {
        let history = self.history.lock();
        let start = history.len().saturating_sub(count);
        history[start..].to_vec()
    }

    /// Number of queries executed
    pub fn total_query_count(&self) -> usize {
        self.history.lock().len()
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_term_returns_everything() {
        let service = SearchService::new();
        assert_eq!(service.search(&SearchQuery::new("")).len(), 5);
        assert_eq!(service.search(&SearchQuery::new("   ")).len(), 5);
    }

    #[test]
    fn term_matches_case_insensitively() {
        let service = SearchService::new();
        let results = service.search(&SearchQuery::new("DOCUMENT"));
        let ids: Vec<u32> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn description_only_match() {
        let service = SearchService::new();
        let results = service.search(&SearchQuery::new("quarterly"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Report Alpha");
    }

    #[test]
    fn padded_term_is_matched_verbatim() {
        let service = SearchService::new();
        assert!(service.search(&SearchQuery::new("alpha ")).is_empty());
        assert!(service.search(&SearchQuery::new(" alpha")).is_empty());

        let titles: Vec<String> = service
            .search(&SearchQuery::new("report "))
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Report Alpha", "Report Beta"]);
        assert!(service.recent_queries(1)[0].ends_with("Search: report "));
    }

    #[test]
    fn limit_truncates_and_zero_is_unlimited() {
        let service = SearchService::new();
        assert_eq!(service.search(&SearchQuery::new("").with_limit(2)).len(), 2);
        assert_eq!(service.search(&SearchQuery::new("").with_limit(0)).len(), 5);
    }

    #[test]
    fn history_records_every_query() {
        let service = SearchService::new();
        service.search(&SearchQuery::new("alpha"));
        service.search(&SearchQuery::new("nothing-matches"));

        assert_eq!(service.total_query_count(), 2);
        let recent = service.recent_queries(DEFAULT_RECENT);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("] Search: alpha"));
        assert!(recent[1].ends_with("] Search: nothing-matches"));
    }

    #[test]
    fn recent_queries_takes_the_tail() {
        let service = SearchService::new();
        for term in ["a", "b", "c", "d"] {
            service.search(&SearchQuery::new(term));
        }
        let recent = service.recent_queries(2);
        assert!(recent[0].ends_with("Search: c"));
        assert!(recent[1].ends_with("Search: d"));
        assert!(service.recent_queries(0).is_empty());
    }
}
