mod common;

use common::{preset, toy_table};
use keyfit::consts::{EVENNESS_FLOOR, SYMMETRY_FLOOR};
use keyfit::layouts::KnownLayout;
use keyfit::scorer::{analyze, analyze_word, DerivedStats, Penalties};
use proptest::prelude::*;

// --- STRATEGIES ---

// Mostly mapped keys with some noise the toy table does not know.
fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 's', 'q', 'z', 'j', 'k', ' ', '?', 'x']), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn position_counts_recognized_chars(text in arb_text()) {
        let table = toy_table();
        let tally = analyze_word(&table, &text);
        let expected = text.chars().filter(|c| table.contains(*c)).count();
        prop_assert_eq!(tally.position, expected);
    }

    #[test]
    fn effort_is_sum_of_key_efforts(text in arb_text()) {
        let table = toy_table();
        let tally = analyze_word(&table, &text);
        let expected: f64 = text.chars().filter_map(|c| table.get(c)).map(|k| k.effort).sum();
        prop_assert!((tally.effort - expected).abs() < 1e-9);
    }

    #[test]
    fn analysis_is_deterministic(text in arb_text()) {
        let table = toy_table();
        prop_assert_eq!(analyze_word(&table, &text), analyze_word(&table, &text));
    }

    #[test]
    fn unknown_chars_change_nothing(text in arb_text()) {
        let table = toy_table();
        let stripped: String = text.chars().filter(|c| table.contains(*c)).collect();
        prop_assert_eq!(analyze_word(&table, &text), analyze_word(&table, &stripped));
    }

    #[test]
    fn repeated_key_charges_every_transition(n in 1usize..200) {
        let tally = analyze(&toy_table(), std::iter::repeat('a').take(n));
        let p = Penalties::default();
        prop_assert!((tally.overheads.same_finger - (n - 1) as f64 * p.same_finger).abs() < 1e-9);
        prop_assert!((tally.overheads.same_hand - (n - 1) as f64 * p.same_hand).abs() < 1e-9);
        prop_assert_eq!(tally.overheads.row_change, 0.0);
    }

    #[test]
    fn derived_metrics_stay_in_bounds(word in "[a-zA-Z ,.;']{1,40}") {
        let layout = preset(KnownLayout::Halmak);
        let stats = DerivedStats::from_tally(&analyze_word(&layout.table, &word)).unwrap();

        prop_assert!(stats.symmetry >= SYMMETRY_FLOOR && stats.symmetry <= 100.0);
        prop_assert!(stats.evenness >= EVENNESS_FLOOR && stats.evenness <= 100.0);
        let fingers: f64 = stats.fingers_usage.iter().sum();
        prop_assert!(fingers <= 100.0 + 1e-9);
        // Thumb presses sit outside the finger and row breakdowns.
        let rows: f64 = stats.rows_usage.iter().sum();
        prop_assert!((rows - fingers).abs() < 1e-9);
    }
}
