//! Chaos style shape over many seeds

use demo_style::{StyleGenerator, CHAOS_PROPERTIES, COLORS, FONTS};
use demo_test_utils::style_generator;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn px(value: &str) -> i32 {
    value.trim_end_matches("px").parse().unwrap()
}

#[test]
fn test_every_property_eventually_appears() {
    let styles = style_generator();
    let seen: HashSet<String> = (0..200)
        .flat_map(|_| styles.chaos_declarations())
        .filter_map(|d| d.split_once(':').map(|(p, _)| p.to_string()))
        .collect();
    assert_eq!(seen.len(), CHAOS_PROPERTIES.len());
}

#[test]
fn test_all_declaration_counts_occur() {
    let styles = style_generator();
    let counts: HashSet<usize> = (0..200).map(|_| styles.chaos_declarations().len()).collect();
    assert_eq!(counts, HashSet::from([3, 4, 5]));
}

#[test]
fn test_every_font_is_reachable() {
    let styles = style_generator();
    let fonts: HashSet<&str> = (0..500).map(|_| styles.random_font()).collect();
    assert_eq!(fonts.len(), FONTS.len());
}

proptest! {
    #[test]
    fn prop_chaos_declarations_are_well_formed(seed in any::<u64>()) {
        let declarations = StyleGenerator::with_seed(seed).chaos_declarations();
        prop_assert!((3..=5).contains(&declarations.len()));

        let mut properties = HashSet::new();
        for declaration in &declarations {
            let (property, value) = declaration.split_once(": ").unwrap();
            prop_assert!(CHAOS_PROPERTIES.contains(&property));
            prop_assert!(properties.insert(property));

            match property {
                "font-family" => {
                    prop_assert!(FONTS.contains(&value.trim_matches('\'')));
                }
                "color" | "background-color" => prop_assert!(COLORS.contains(&value)),
                "font-size" => prop_assert!((10..36).contains(&px(value))),
                "padding" => prop_assert!((5..20).contains(&px(value))),
                "margin" => prop_assert!((2..15).contains(&px(value))),
                "border-radius" => prop_assert!((0..25).contains(&px(value))),
                _ => {
                    let degrees: i32 = value
                        .trim_start_matches("rotate(")
                        .trim_end_matches("deg)")
                        .parse()
                        .unwrap();
                    prop_assert!((-10..10).contains(&degrees));
                }
            }
        }
    }
}
