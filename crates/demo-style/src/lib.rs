//! Demo Style Generator
//!
//! Picks fonts and colors from fixed palettes and assembles randomized
//! inline CSS for the style demo page.
//!
//! # Example
//!
//! ```rust
//! use demo_style::{StyleGenerator, FONTS};
//!
//! let styles = StyleGenerator::with_seed(1);
//! assert!(FONTS.contains(&styles.random_font()));
//!
//! let css = styles.chaos_style();
//! assert!(!css.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod generator;

pub use generator::{StyleGenerator, CHAOS_PROPERTIES, COLORS, FONTS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
