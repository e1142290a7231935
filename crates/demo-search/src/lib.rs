//! Demo Search Service
//!
//! Case-insensitive filtering over an in-memory document list, with every
//! query recorded in a lock-guarded history for auditing.
//!
//! # Example
//!
//! ```rust
//! use demo_search::{SearchQuery, SearchService};
//!
//! let service = SearchService::new();
//! let results = service.search(&SearchQuery::new("report"));
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(service.total_query_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod service;

pub use document::{sample_documents, Document, SearchQuery, SearchResult, DEFAULT_LIMIT};
pub use service::{SearchService, DEFAULT_RECENT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
