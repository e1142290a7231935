//! Font, color and inline-style generation

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Font families to pick from
pub const FONTS: [&str; 8] = [
    "Comic Sans MS",
    "Papyrus",
    "Impact",
    "Courier New",
    "Arial Black",
    "Times New Roman",
    "Verdana",
    "Georgia",
];

/// Hex colors to pick from
pub const COLORS: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9", "#FF69B4", "#00FF00", "#FF4500", "#1E90FF", "#FFD700",
];

/// Properties a chaos style may set, each at most once
pub const CHAOS_PROPERTIES: [&str; 8] = [
    "font-family",
    "color",
    "background-color",
    "font-size",
    "padding",
    "margin",
    "border-radius",
    "transform",
];

/// Random style source shared by request handlers
#[derive(Debug)]
pub struct StyleGenerator {
    rng: Mutex<StdRng>,
}

impl StyleGenerator {
    /// Create generator seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create generator with a fixed seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// One of [`FONTS`]
    pub fn random_font(&self) -> &'static str {
        pick(&FONTS, &mut self.rng.lock())
    }

    /// One of [`COLORS`]
    pub fn random_color(&self) -> &'static str {
        pick(&COLORS, &mut self.rng.lock())
    }

    /// Between three and five CSS declarations in random order
    ///
    /// Each declaration sets a distinct property from [`CHAOS_PROPERTIES`].
    pub fn chaos_declarations(&self) -> Vec<String> {
        let mut rng = self.rng.lock();
        let rng = &mut *rng;

        let mut declarations = vec![
            format!("font-family: '{}'", pick(&FONTS, rng)),
            format!("color: {}", pick(&COLORS, rng)),
            format!("background-color: {}", pick(&COLORS, rng)),
            format!("font-size: {}px", rng.gen_range(10..36)),
            format!("padding: {}px", rng.gen_range(5..20)),
            format!("margin: {}px", rng.gen_range(2..15)),
            format!("border-radius: {}px", rng.gen_range(0..25)),
            format!("transform: rotate({}deg)", rng.gen_range(-10..10)),
        ];

        declarations.shuffle(rng);
        declarations.truncate(rng.gen_range(3..6));
        declarations
    }

    /// [`chaos_declarations`](Self::chaos_declarations) as one inline style
    pub fn chaos_style(&self) -> String {
        self.chaos_declarations().join("; ")
    }
}

impl Default for StyleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(options: &[&'static str], rng: &mut StdRng) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_come_from_palettes() {
        let styles = StyleGenerator::with_seed(9);
        for _ in 0..50 {
            assert!(FONTS.contains(&styles.random_font()));
            assert!(COLORS.contains(&styles.random_color()));
        }
    }

    #[test]
    fn chaos_style_joins_declarations() {
        let a = StyleGenerator::with_seed(5);
        let b = StyleGenerator::with_seed(5);
        assert_eq!(a.chaos_style(), b.chaos_declarations().join("; "));
    }

    #[test]
    fn font_family_is_quoted() {
        let styles = StyleGenerator::with_seed(11);
        let quoted = (0..100)
            .flat_map(|_| styles.chaos_declarations())
            .filter(|d| d.starts_with("font-family: "))
            .all(|d| d.ends_with('\'') && d.contains(": '"));
        assert!(quoted);
    }
}
