//! Demo Weather Service
//!
//! Stand-in for a remote weather API. Every call produces a randomized
//! [`WeatherReport`] flagged as demo data, and the service keeps call
//! counters behind a single lock.
//!
//! # Example
//!
//! ```rust
//! use demo_weather::WeatherService;
//!
//! let service = WeatherService::with_seed(7);
//! let report = service.get_weather("Seattle");
//!
//! assert_eq!(report.city, "Seattle");
//! assert!(!report.is_real);
//! assert_eq!(service.stats().api_call_count, 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod report;
mod service;

pub use report::{
    Condition, Temperature, WeatherReport, WeatherStats, ADVICE, DEMO_WARNING, FORECASTS,
    MAX_CELSIUS, MIN_CELSIUS, SOURCE,
};
pub use service::WeatherService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
