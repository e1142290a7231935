//! Store configuration
//!
//! Loaded by the host from TOML; every field has a default so a partial
//! file (or none at all) is valid.

use serde::{Deserialize, Serialize};

/// Identifier substituted for empty or blank user ids
pub const DEFAULT_USER_ID: &str = "default-user";

/// Profile store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Identifier used when the caller supplies none
    pub default_user_id: String,
    /// Whether to create the default user's profile at startup
    pub seed_default_profile: bool,
    /// Values for the seeded profile
    pub seed: SeedProfile,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default user id
    #[inline]
    #[must_use]
    pub fn with_default_user_id(mut self, id: impl Into<String>) -> Self {
        self.default_user_id = id.into();
        self
    }

    /// Default user id, or [`DEFAULT_USER_ID`] when the configured one is blank
    #[must_use]
    pub fn effective_default_user_id(&self) -> &str {
        if self.default_user_id.trim().is_empty() {
            DEFAULT_USER_ID
        } else {
            &self.default_user_id
        }
    }

    /// With seeding toggled
    #[inline]
    #[must_use]
    pub fn with_seed_default_profile(mut self, seed: bool) -> Self {
        self.seed_default_profile = seed;
        self
    }

    /// With seed profile values
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: SeedProfile) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_user_id: DEFAULT_USER_ID.to_string(),
            seed_default_profile: true,
            seed: SeedProfile::default(),
        }
    }
}

/// Field values for the profile seeded at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedProfile {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    pub age: i32,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Country
    pub country: String,
    /// Favorite color
    pub favorite_color: String,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            age: 25,
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            country: "USA".to_string(),
            favorite_color: "Blue".to_string(),
        }
    }
}
