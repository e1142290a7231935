//! Profile record and store statistics

use crate::config::SeedProfile;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const DEFAULT_NAME: &str = "Default User";
const DEFAULT_EMAIL: &str = "user@example.com";
const DEFAULT_AGE: i32 = 25;

/// One user's demographic data
///
/// Instances handed out by the store are snapshots; changing one does not
/// change the stored record. Fields are only writable inside this crate,
/// through the field dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) age: i32,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) country: String,
    pub(crate) favorite_color: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) is_active: bool,
}

impl Profile {
    /// Create a profile with default field values
    #[must_use]
    pub fn new(id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            age: DEFAULT_AGE,
            city: String::new(),
            state: String::new(),
            country: String::new(),
            favorite_color: String::new(),
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    /// Create a profile populated from seed values
    #[must_use]
    pub fn seeded(id: impl Into<String>, seed: &SeedProfile, now: DateTime<Utc>) -> Self {
        Self {
            name: seed.name.clone(),
            email: seed.email.clone(),
            age: seed.age,
            city: seed.city.clone(),
            state: seed.state.clone(),
            country: seed.country.clone(),
            favorite_color: seed.favorite_color.clone(),
            ..Self::new(id, now)
        }
    }

    /// User identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in years
    #[inline]
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// City
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region
    #[inline]
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Country
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Favorite color
    #[inline]
    #[must_use]
    pub fn favorite_color(&self) -> &str {
        &self.favorite_color
    }

    /// Creation time
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last successful mutation
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the profile counts as active
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Advance `updated_at`, strictly, even if the clock stalled or went back
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// Store-wide counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    /// Distinct identifiers ever created
    pub total_profiles: usize,
    /// Profiles whose active flag is set
    pub active_profiles: usize,
}
