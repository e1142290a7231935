//! Mock weather service

use crate::report::{
    Condition, Temperature, WeatherReport, WeatherStats, ADVICE, DEMO_WARNING, FORECASTS,
    MAX_CELSIUS, MIN_CELSIUS, SOURCE,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generates randomized reports and counts calls
///
/// The generator and the counters share one lock, so each report and the
/// counter bump that records it happen together.
#[derive(Debug)]
pub struct WeatherService {
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    rng: StdRng,
    api_call_count: u64,
    last_updated: Option<DateTime<Utc>>,
}

impl WeatherService {
    /// Create service seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create service with a fixed seed; equal seeds give equal reports
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(State {
                rng,
                api_call_count: 0,
                last_updated: None,
            }),
        }
    }

    /// Produce a report for `city`
    ///
    /// The city is echoed back as given; every report is marked as demo data.
    pub fn get_weather(&self, city: &str) -> WeatherReport {
        tracing::info!(city, "Fetching weather");

        let now = Utc::now();
        let mut state = self.state.lock();
        state.api_call_count += 1;
        state.last_updated = Some(now);

        let rng = &mut state.rng;
        let condition = Condition::ALL[rng.gen_range(0..Condition::ALL.len())];
        let celsius = rng.gen_range(MIN_CELSIUS..MAX_CELSIUS);
        let advice = ADVICE.choose(rng).copied().unwrap_or_default();
        let chaos_level = rng.gen_range(1..=5);
        let forecast = FORECASTS.choose(rng).copied().unwrap_or_default();

        WeatherReport {
            city: city.to_string(),
            temperature: Temperature::from_celsius(celsius),
            condition,
            condition_emoji: condition.emoji(),
            advice,
            chaos_level,
            is_real: false,
            source: SOURCE,
            timestamp: now,
            warnings: vec![DEMO_WARNING.to_string()],
            forecast,
        }
    }

    /// Current counters
    pub fn stats(&self) -> WeatherStats {
        let state = self.state.lock();
        WeatherStats {
            api_call_count: state.api_call_count,
            last_updated: state.last_updated,
            is_healthy: true,
        }
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}
