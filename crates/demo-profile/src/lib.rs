//! Demo Profile Store
//!
//! In-memory user profiles with name-addressed, allow-listed field updates.
//!
//! # Core Concepts
//!
//! - [`ProfileStore`]: Lock-guarded mapping from user id to [`Profile`]
//! - [`ProfileField`]: The allow-list of externally updatable fields
//! - [`FieldSpec`]: Dispatch table entry (typed parser + typed setter)
//! - [`ProfileAction`]: Request action the web tier calls with query parameters
//! - [`Clock`]: Time source seam ([`SystemClock`], [`ManualClock`])
//!
//! # Example
//!
//! ```rust
//! use demo_profile::{ProfileStore, StoreConfig};
//!
//! let store = ProfileStore::new(StoreConfig::default());
//!
//! let profile = store.update_field("alice", "Age", "42")?;
//! assert_eq!(profile.age(), 42);
//!
//! assert!(store.update_field("alice", "ssn", "123").is_err());
//! # Ok::<(), demo_profile::ProfileError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;

// Re-exports
pub use action::{ProfileAction, ProfilePage, ProfileQuery, UpdateOutcome, UPDATE_ACTION};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{SeedProfile, StoreConfig, DEFAULT_USER_ID};
pub use error::{ProfileError, ProfileResult};
pub use fields::{Assignment, FieldSpec, ProfileField};
pub use model::{Profile, ProfileStats};
pub use store::ProfileStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
