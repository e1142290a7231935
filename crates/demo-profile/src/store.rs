//! In-memory profile store
//!
//! Provides [`ProfileStore`]: a single mutex around a `HashMap` from user id
//! to [`Profile`]. Every public operation takes the lock once, so each call
//! is atomic with respect to every other call.

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::ProfileResult;
use crate::fields::FieldSpec;
use crate::model::{Profile, ProfileStats};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Lock-guarded mapping from user id to profile
///
/// Owned by the host process and shared with request handlers through an
/// `Arc`. Profiles are created lazily on first access and never removed.
#[derive(Debug)]
pub struct ProfileStore {
    profiles: Mutex<HashMap<String, Profile>>,
    default_user_id: String,
    clock: Arc<dyn Clock>,
}

impl ProfileStore {
    /// Create store on the system clock
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create store on an explicit clock
    ///
    /// A blank configured default id falls back to
    /// [`DEFAULT_USER_ID`](crate::DEFAULT_USER_ID).
    #[must_use]
    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        let default_user_id = config.effective_default_user_id().to_string();

        let mut profiles = HashMap::new();
        if config.seed_default_profile {
            let seeded = Profile::seeded(&default_user_id, &config.seed, clock.now());
            profiles.insert(default_user_id.clone(), seeded);
        }

        Self {
            profiles: Mutex::new(profiles),
            default_user_id,
            clock,
        }
    }

    /// Identifier used for empty or blank user ids
    #[inline]
    #[must_use]
    pub fn default_user_id(&self) -> &str {
        &self.default_user_id
    }

    /// Get profile, creating a default one if the id is new
    pub fn get_profile(&self, user_id: &str) -> Profile {
        let now = self.clock.now();
        let mut profiles = self.profiles.lock();
        self.resolve(&mut profiles, user_id, now).clone()
    }

    /// Update one allow-listed field by name
    ///
    /// The field name is matched case-insensitively. The name and the value
    /// are both checked before the lock is taken, so a rejected call leaves
    /// the store exactly as it was.
    ///
    /// # Errors
    /// - [`ProfileError::Validation`](crate::ProfileError::Validation) if
    ///   `field_name` is not allow-listed
    /// - [`ProfileError::Conversion`](crate::ProfileError::Conversion) if
    ///   `raw_value` does not convert to the field's type
    pub fn update_field(
        &self,
        user_id: &str,
        field_name: &str,
        raw_value: &str,
    ) -> ProfileResult<Profile> {
        let assignment = FieldSpec::lookup(field_name)?.prepare(raw_value)?;

        let now = self.clock.now();
        let mut profiles = self.profiles.lock();
        let profile = self.resolve(&mut profiles, user_id, now);
        assignment.apply(profile);
        profile.touch(now);
        Ok(profile.clone())
    }

    /// Set or clear the active flag
    pub fn set_active(&self, user_id: &str, active: bool) -> Profile {
        let now = self.clock.now();
        let mut profiles = self.profiles.lock();
        let profile = self.resolve(&mut profiles, user_id, now);
        profile.is_active = active;
        profile.touch(now);
        profile.clone()
    }

    /// Count profiles; never creates any
    pub fn get_stats(&self) -> ProfileStats {
        let profiles = self.profiles.lock();
        ProfileStats {
            total_profiles: profiles.len(),
            active_profiles: profiles.values().filter(|p| p.is_active).count(),
        }
    }

    /// Check for a profile without creating one
    pub fn contains(&self, user_id: &str) -> bool {
        let key = self.resolve_id(user_id);
        self.profiles.lock().contains_key(key)
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.lock().len()
    }

    /// Whether the store holds no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.lock().is_empty()
    }

    fn resolve_id<'a>(&'a self, user_id: &'a str) -> &'a str {
        if user_id.trim().is_empty() {
            &self.default_user_id
        } else {
            user_id
        }
    }

    fn resolve<'m>(
        &self,
        profiles: &'m mut HashMap<String, Profile>,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> &'m mut Profile {
        let id = self.resolve_id(user_id);
        profiles
            .entry(id.to_string())
            .or_insert_with(|| Profile::new(id, now))
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
