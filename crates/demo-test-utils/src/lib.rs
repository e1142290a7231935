//! Testing utilities for the demo services workspace
//!
//! Shared fixtures: manual clocks, pre-populated stores, small corpora,
//! seeded random services.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use demo_profile::{ManualClock, ProfileStore, StoreConfig};
use demo_search::{Document, SearchService};
use demo_style::StyleGenerator;
use demo_weather::WeatherService;
use std::sync::Arc;

/// Seed for reproducible random services
pub const FIXED_SEED: u64 = 0x5EED;

/// Fixed start instant for manual clocks
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(t0()))
}

/// Empty store (no seeded default user) on a manual clock
pub fn empty_store() -> (Arc<ProfileStore>, Arc<ManualClock>) {
    store_with_config(StoreConfig::new().with_seed_default_profile(false))
}

/// Store with the seeded default user on a manual clock
pub fn seeded_store() -> (Arc<ProfileStore>, Arc<ManualClock>) {
    store_with_config(StoreConfig::default())
}

pub fn store_with_config(config: StoreConfig) -> (Arc<ProfileStore>, Arc<ManualClock>) {
    let clock = manual_clock();
    let store = Arc::new(ProfileStore::with_clock(config, clock.clone()));
    (store, clock)
}

/// Empty store holding one default profile per id
pub fn store_with_profiles(ids: &[&str]) -> Arc<ProfileStore> {
    let (store, _) = empty_store();
    for id in ids {
        store.get_profile(id);
    }
    store
}

pub fn create_document(id: u32, title: &str, description: &str) -> Document {
    Document::new(id, title, description, "test")
}

pub fn search_service_with(titles: &[&str]) -> SearchService {
    let documents = titles
        .iter()
        .zip(1u32..)
        .map(|(title, id)| create_document(id, title, ""))
        .collect();
    SearchService::with_documents(documents)
}

pub fn weather_service() -> WeatherService {
    WeatherService::with_seed(FIXED_SEED)
}

pub fn style_generator() -> StyleGenerator {
    StyleGenerator::with_seed(FIXED_SEED)
}
