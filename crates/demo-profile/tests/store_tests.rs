//! Profile store behaviour through the public API
//!
//! Lazy creation, allow-list enforcement, conversions, statistics and
//! concurrent access.

use chrono::Duration;
use demo_profile::{ProfileError, ProfileField, ProfileStats, StoreConfig, DEFAULT_USER_ID};
use demo_test_utils::{empty_store, seeded_store, store_with_config, store_with_profiles, t0};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_seeded_default_profile() {
    let (store, _) = seeded_store();
    let p = store.get_profile("");

    assert_eq!(p.id(), DEFAULT_USER_ID);
    assert_eq!(p.name(), "Demo User");
    assert_eq!(p.email(), "demo@example.com");
    assert_eq!(p.city(), "Seattle");
    assert_eq!(p.state(), "WA");
    assert_eq!(p.country(), "USA");
    assert_eq!(p.created_at(), t0());
}

#[test]
fn test_blank_configured_default_id_uses_fixed_default() {
    let (store, _) = store_with_config(StoreConfig::new().with_default_user_id(""));
    let p = store.get_profile("");

    assert_eq!(p.id(), DEFAULT_USER_ID);
    assert_eq!(p.name(), "Demo User");
    assert!(store.contains(DEFAULT_USER_ID));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_update_age() {
    let (store, clock) = empty_store();
    let before = store.get_profile("u");

    clock.advance(Duration::minutes(1));
    let after = store.update_field("u", "Age", "42").unwrap();

    assert_eq!(after.age(), 42);
    assert_eq!(after.updated_at(), t0() + Duration::minutes(1));
    assert!(after.updated_at() > before.updated_at());
}

#[test]
fn test_reject_ssn() {
    let (store, _) = empty_store();
    let before = store.get_profile("u");

    let err = store.update_field("u", "ssn", "123").unwrap_err();
    assert!(matches!(err, ProfileError::Validation { ref field } if field == "ssn"));
    assert_eq!(store.get_profile("u"), before);
}

#[test]
fn test_reject_non_numeric_age() {
    let (store, _) = empty_store();
    let before = store.get_profile("u");

    let err = store.update_field("u", "Age", "not-a-number").unwrap_err();
    assert!(err.is_conversion());
    assert_eq!(store.get_profile("u"), before);
}

#[test]
fn test_stats_three_profiles_one_inactive() {
    let store = store_with_profiles(&["a", "b", "c"]);
    store.set_active("b", false);

    assert_eq!(
        store.get_stats(),
        ProfileStats {
            total_profiles: 3,
            active_profiles: 2,
        }
    );
}

#[test]
fn test_stats_do_not_create() {
    let (store, _) = empty_store();
    for _ in 0..3 {
        store.get_stats();
    }
    assert!(store.is_empty());
}

#[test]
fn test_timestamps_survive_clock_going_backwards() {
    let (store, clock) = empty_store();
    clock.advance(Duration::hours(1));
    let created = store.get_profile("u");

    clock.set(t0());
    let updated = store.update_field("u", "City", "Oslo").unwrap();

    assert!(updated.created_at() <= updated.updated_at());
    assert!(updated.updated_at() > created.updated_at());
}

#[test]
fn test_concurrent_updates_to_distinct_fields_are_not_lost() {
    let (store, _) = empty_store();
    store.get_profile("shared");

    let writes: Vec<(ProfileField, String)> = vec![
        (ProfileField::Name, "Pat".to_string()),
        (ProfileField::Email, "pat@example.com".to_string()),
        (ProfileField::Age, "51".to_string()),
        (ProfileField::City, "Lyon".to_string()),
        (ProfileField::State, "ARA".to_string()),
        (ProfileField::Country, "France".to_string()),
        (ProfileField::FavoriteColor, "Green".to_string()),
    ];

    let handles: Vec<_> = writes
        .into_iter()
        .map(|(field, value)| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    store.update_field("shared", field.name(), &value).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let p = store.get_profile("shared");
    assert_eq!(p.name(), "Pat");
    assert_eq!(p.email(), "pat@example.com");
    assert_eq!(p.age(), 51);
    assert_eq!(p.city(), "Lyon");
    assert_eq!(p.state(), "ARA");
    assert_eq!(p.country(), "France");
    assert_eq!(p.favorite_color(), "Green");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_lazy_creation_is_unique() {
    let (store, _) = empty_store();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    store.get_profile(&format!("user-{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.get_stats().total_profiles, 50);
}

proptest! {
    #[test]
    fn prop_unseen_id_gets_defaults(id in "[a-z0-9-]{1,16}") {
        let (store, _) = empty_store();
        let p = store.get_profile(&id);

        prop_assert_eq!(p.id(), id.as_str());
        prop_assert_eq!(p.name(), "Default User");
        prop_assert_eq!(p.email(), "user@example.com");
        prop_assert_eq!(p.age(), 25);
        prop_assert!(p.is_active());
    }

    #[test]
    fn prop_get_profile_is_idempotent(id in "\\PC{0,16}") {
        let (store, clock) = empty_store();
        let first = store.get_profile(&id);
        clock.advance(Duration::seconds(1));
        let second = store.get_profile(&id);

        prop_assert_eq!(first, second);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn prop_blank_id_is_default(id in "[ \\t]{0,4}") {
        let (store, _) = empty_store();
        let p = store.get_profile(&id);
        prop_assert_eq!(p.id(), DEFAULT_USER_ID);
    }

    #[test]
    fn prop_any_i32_age_round_trips(age in any::<i32>()) {
        let (store, _) = empty_store();
        let p = store.update_field("u", "age", &age.to_string()).unwrap();
        prop_assert_eq!(p.age(), age);
    }

    #[test]
    fn prop_unknown_fields_never_mutate(name in "[A-Za-z]{1,12}", value in "\\PC{0,12}") {
        prop_assume!(name.parse::<ProfileField>().is_err());

        let (store, _) = empty_store();
        let before = store.get_profile("u");
        let err = store.update_field("u", &name, &value).unwrap_err();

        prop_assert!(err.is_validation());
        prop_assert_eq!(store.get_profile("u"), before);
    }

    #[test]
    fn prop_field_names_ignore_case(idx in 0usize..7, upper in any::<bool>()) {
        let field = ProfileField::ALL[idx];
        let name = if upper {
            field.name().to_uppercase()
        } else {
            field.name().to_lowercase()
        };
        prop_assert_eq!(name.parse::<ProfileField>().unwrap(), field);
    }
}
