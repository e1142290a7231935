//! Search service behaviour over custom corpora

use demo_search::{SearchQuery, SearchService};
use demo_test_utils::search_service_with;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_results_keep_corpus_order() {
    let service = search_service_with(&["beta notes", "alpha notes", "gamma"]);
    let titles: Vec<String> = service
        .search(&SearchQuery::new("notes"))
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["beta notes", "alpha notes"]);
}

#[test]
fn test_results_share_one_timestamp() {
    let service = SearchService::new();
    let results = service.search(&SearchQuery::default());
    assert!(results.windows(2).all(|w| w[0].found_at == w[1].found_at));
}

#[test]
fn test_trailing_space_is_part_of_term() {
    let service = search_service_with(&["alpha", "alpha beta"]);
    let titles: Vec<String> = service
        .search(&SearchQuery::new("alpha "))
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["alpha beta"]);
    assert_eq!(service.search(&SearchQuery::new(" \t ")).len(), 2);
}

#[test]
fn test_empty_corpus() {
    let service = search_service_with(&[]);
    assert!(service.search(&SearchQuery::default()).is_empty());
    assert_eq!(service.total_query_count(), 1);
}

#[test]
fn test_concurrent_searches_are_all_recorded() {
    let service = Arc::new(SearchService::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..25 {
                    service.search(&SearchQuery::new(format!("t{i}")));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(service.total_query_count(), 100);
    assert_eq!(service.recent_queries(1000).len(), 100);
}

proptest! {
    #[test]
    fn prop_results_never_exceed_limit(term in "[a-z ]{0,6}", limit in 1usize..8) {
        let service = SearchService::new();
        let results = service.search(&SearchQuery::new(term).with_limit(limit));
        prop_assert!(results.len() <= limit);
    }

    #[test]
    fn prop_every_result_contains_term(term in "[a-zA-Z]{1,4}") {
        let service = SearchService::new();
        let needle = term.to_lowercase();
        for r in service.search(&SearchQuery::new(term).with_limit(0)) {
            prop_assert!(
                r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn prop_recent_is_bounded(queries in 0usize..20, count in 0usize..30) {
        let service = SearchService::new();
        for _ in 0..queries {
            service.search(&SearchQuery::default());
        }
        prop_assert_eq!(service.recent_queries(count).len(), queries.min(count));
    }
}
