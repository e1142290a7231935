//! Weather reports, conditions and service counters

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Lowest generated temperature, inclusive
pub const MIN_CELSIUS: i32 = -10;

/// Highest generated temperature, exclusive
pub const MAX_CELSIUS: i32 = 35;

/// Value of [`WeatherReport::source`]
pub const SOURCE: &str = "MockWeatherService (Demo)";

/// Warning attached to every report
pub const DEMO_WARNING: &str = "This is demo data";

/// Advice lines a report may carry
pub const ADVICE: [&str; 5] = [
    "Great day for a walk!",
    "Might want an umbrella just in case.",
    "Perfect coding weather!",
    "Stay hydrated.",
    "Enjoy the day!",
];

/// Forecast lines a report may carry
pub const FORECASTS: [&str; 3] = [
    "Tomorrow: Similar conditions expected.",
    "This week: Gradual warming trend.",
    "Weekend: Mostly pleasant.",
];

/// Sky condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Sunny
    Sunny,
    /// Cloudy
    Cloudy,
    /// Rainy
    Rainy,
    /// Foggy
    Foggy,
    /// Partly cloudy
    PartlyCloudy,
    /// Clear
    Clear,
}

impl Condition {
    /// Every condition, in generation order
    pub const ALL: [Condition; 6] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Foggy,
        Condition::PartlyCloudy,
        Condition::Clear,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Foggy => "Foggy",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Clear => "Clear",
        }
    }

    /// Emoji shown next to the label
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Condition::Sunny => "\u{2600}\u{fe0f}",
            Condition::Cloudy => "\u{2601}\u{fe0f}",
            Condition::Rainy => "\u{1f327}\u{fe0f}",
            Condition::Foggy => "\u{1f32b}\u{fe0f}",
            Condition::PartlyCloudy => "\u{26c5}",
            Condition::Clear => "\u{1f324}\u{fe0f}",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One temperature on four scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    /// Degrees Celsius (whole degrees)
    pub celsius: f64,
    /// Degrees Fahrenheit
    pub fahrenheit: f64,
    /// Kelvin
    pub kelvin: f64,
    /// Degrees Rankine
    pub rankine: f64,
}

impl Temperature {
    /// Derive every scale from whole degrees Celsius
    #[must_use]
    pub fn from_celsius(celsius: i32) -> Self {
        let c = f64::from(celsius);
        let kelvin = c + 273.15;
        Self {
            celsius: c,
            fahrenheit: c * 9.0 / 5.0 + 32.0,
            kelvin,
            rankine: kelvin * 9.0 / 5.0,
        }
    }
}

/// Weather for one city at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    /// City as requested
    pub city: String,
    /// Temperature on every scale
    pub temperature: Temperature,
    /// Sky condition
    pub condition: Condition,
    /// Emoji for [`condition`](Self::condition)
    pub condition_emoji: &'static str,
    /// One of [`ADVICE`]
    pub advice: &'static str,
    /// Novelty rating from 1 to 5
    pub chaos_level: u8,
    /// Always `false`: reports are generated, not measured
    pub is_real: bool,
    /// Producer of the report
    pub source: &'static str,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Caveats for the reader
    pub warnings: Vec<String>,
    /// One of [`FORECASTS`]
    pub forecast: &'static str,
}

impl WeatherReport {
    /// City name upper-cased, as shown in headings
    #[must_use]
    pub fn city_heading(&self) -> String {
        self.city.to_uppercase()
    }
}

/// Counters kept by [`WeatherService`](crate::WeatherService)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherStats {
    /// Reports produced so far
    pub api_call_count: u64,
    /// Time of the latest report; `None` before the first call
    pub last_updated: Option<DateTime<Utc>>,
    /// Health flag; the mock is always healthy
    pub is_healthy: bool,
}
