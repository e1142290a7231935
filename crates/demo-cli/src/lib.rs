//! Demo services host
//!
//! Owns one instance of each service ([`ProfileStore`](demo_profile::ProfileStore),
//! [`SearchService`](demo_search::SearchService),
//! [`WeatherService`](demo_weather::WeatherService) and
//! [`StyleGenerator`](demo_style::StyleGenerator)) for the lifetime of the
//! process and dispatches a single subcommand against them.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;

pub use app::App;
pub use commands::cli;
pub use config::{AppConfig, ConfigError, LoggingConfig, RandomConfig};

/// Exit code when an update was rejected
pub const EXIT_REJECTED: u8 = 1;

/// Exit code when configuration could not be loaded
pub const EXIT_CONFIG: u8 = 2;

/// Exit code when a command failed (for example, output could not be written)
pub const EXIT_ERROR: u8 = 3;
