//! Profile page request action
//!
//! The web tier's profile page passes three optional query parameters:
//! `action`, `field` and `value`. A mutation happens only when `action` is
//! exactly [`UPDATE_ACTION`]. Update failures are rendered into the page
//! message instead of being returned as errors.

use crate::error::ProfileError;
use crate::fields::ProfileField;
use crate::model::{Profile, ProfileStats};
use crate::store::ProfileStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `action` value that triggers a field update
pub const UPDATE_ACTION: &str = "update";

/// Query parameters of the profile page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileQuery {
    /// Requested action; only [`UPDATE_ACTION`] mutates
    #[serde(default)]
    pub action: Option<String>,
    /// Field to change
    #[serde(default)]
    pub field: Option<String>,
    /// New value as a string
    #[serde(default)]
    pub value: Option<String>,
}

impl ProfileQuery {
    /// Query that only views the profile
    #[inline]
    #[must_use]
    pub fn view() -> Self {
        Self::default()
    }

    /// Query that updates `field` to `value`
    #[must_use]
    pub fn update(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action: Some(UPDATE_ACTION.to_string()),
            field: Some(field.into()),
            value: Some(value.into()),
        }
    }

    /// Whether this query asks for a mutation
    #[inline]
    #[must_use]
    pub fn is_update(&self) -> bool {
        self.action.as_deref() == Some(UPDATE_ACTION)
    }
}

/// What happened to the requested update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// No update was asked for
    NotRequested,
    /// Field was written
    Updated {
        /// Field that changed
        field: ProfileField,
    },
    /// Update was refused; the page message says why
    Rejected,
}

impl UpdateOutcome {
    /// Whether the update was refused
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Data the profile view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    /// Profile after any update
    pub profile: Profile,
    /// Store counters after any update
    pub stats: ProfileStats,
    /// Confirmation or error text for the user
    pub message: Option<String>,
    /// Result of the requested update
    pub outcome: UpdateOutcome,
}

/// Handler behind the profile page
#[derive(Debug, Clone)]
pub struct ProfileAction {
    store: Arc<ProfileStore>,
}

impl ProfileAction {
    /// Create handler over a shared store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<ProfileStore> {
        &self.store
    }

    /// Run the action and build the page
    ///
    /// After a successful update the page shows the snapshot taken under the
    /// same lock as the write, not a later read.
    pub fn handle(&self, user_id: &str, query: &ProfileQuery) -> ProfilePage {
        let attempt = if query.is_update() {
            self.apply_update(user_id, query)
        } else {
            UpdateAttempt::not_requested()
        };

        ProfilePage {
            profile: attempt
                .profile
                .unwrap_or_else(|| self.store.get_profile(user_id)),
            stats: self.store.get_stats(),
            message: attempt.message,
            outcome: attempt.outcome,
        }
    }

    fn apply_update(&self, user_id: &str, query: &ProfileQuery) -> UpdateAttempt {
        let Some(field) = query.field.as_deref() else {
            tracing::warn!(user_id, "Update requested without a field");
            return UpdateAttempt::rejected("No field specified for update.".to_string());
        };
        let value = query.value.as_deref().unwrap_or_default();

        tracing::info!(user_id, field, "Updating profile field");

        let result = field.parse::<ProfileField>().and_then(|field| {
            self.store
                .update_field(user_id, field.name(), value)
                .map(|profile| (field, profile))
        });

        match result {
            Ok((field, profile)) => UpdateAttempt {
                outcome: UpdateOutcome::Updated { field },
                message: Some(format!("Updated {field}.")),
                profile: Some(profile),
            },
            Err(err) => {
                log_rejection(user_id, &err);
                UpdateAttempt::rejected(err.to_string())
            }
        }
    }
}

/// Update result before the page is assembled
struct UpdateAttempt {
    outcome: UpdateOutcome,
    message: Option<String>,
    /// Snapshot returned by the store on success
    profile: Option<Profile>,
}

impl UpdateAttempt {
    fn not_requested() -> Self {
        Self {
            outcome: UpdateOutcome::NotRequested,
            message: None,
            profile: None,
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            outcome: UpdateOutcome::Rejected,
            message: Some(message),
            profile: None,
        }
    }
}

fn log_rejection(user_id: &str, err: &ProfileError) {
    match err {
        ProfileError::Validation { field } => {
            tracing::warn!(user_id, field = %field, "Rejected update of non-updatable field");
        }
        ProfileError::Conversion { field, value, .. } => {
            tracing::warn!(user_id, field = %field, value = %value, "Rejected unconvertible value");
        }
    }
}
