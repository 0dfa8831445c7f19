mod common;

use common::{approx, preset};
use keyfit::config::ScoreWeights;
use keyfit::layouts::KnownLayout;
use keyfit::scorer::{analyze_word, DerivedStats, NormalizationReference, WordScorer};
use rstest::rstest;

#[test]
fn test_hello_on_halmak() {
    let layout = preset(KnownLayout::Halmak);
    let tally = analyze_word(&layout.table, "hello");

    assert!(approx(tally.effort, 7.5));
    assert!(approx(tally.distance, 2.0));
    assert_eq!(tally.position, 5);
    assert!(approx(tally.overheads.same_finger, 1.0));
    assert!(approx(tally.overheads.same_hand, 0.5));
    assert!(approx(tally.overheads.row_change, 1.0));

    let stats = DerivedStats::from_tally(&tally).unwrap();
    assert_eq!(stats.fingers_usage, [0.0, 60.0, 0.0, 0.0, 0.0, 20.0, 20.0, 0.0]);
    assert_eq!(stats.hands_usage, [60.0, 40.0]);
    assert_eq!(stats.rows_usage, [0.0, 40.0, 60.0, 0.0]);
    // Mirrored-pair difference 60 of 100; cv is 0.6 of its maximum.
    assert!((stats.symmetry - 77.8).abs() < 1e-9);
    assert!((stats.evenness - 66.4).abs() < 1e-6);
}

#[test]
fn test_hello_score() {
    let layout = preset(KnownLayout::Halmak);
    let reference = NormalizationReference::default();
    let scorer = WordScorer::new(&layout.table, &reference, ScoreWeights::default());

    let expected = 0.3 * 7.5 / 695.0 + 0.3 * 2.0 / 1036.0 + 0.2 * 3.9375 + 0.1 * 0.1 + 0.1 * 6.75;
    let once = scorer.score_word("hello", 1).unwrap();
    assert!((once.score - expected).abs() < 1e-9);

    let many = scorer.score_word("hello", 10).unwrap();
    assert_eq!(many.frequency, 10);
    assert!((many.score - 10.0 * expected).abs() < 1e-8);
}

#[test]
fn test_unscorable_word() {
    let layout = preset(KnownLayout::Halmak);
    let reference = NormalizationReference::default();
    let scorer = WordScorer::new(&layout.table, &reference, ScoreWeights::default());
    assert!(scorer.score_word("€€€", 3).is_err());
}

// Home-row words should beat the same word count reaching across rows.
#[rstest]
#[case(KnownLayout::Qwerty, "asdf", "zxcv")]
#[case(KnownLayout::Colemak, "arst", "zxcv")]
#[case(KnownLayout::Halmak, "shnt", "fmvc")]
fn test_home_row_is_cheaper(#[case] layout: KnownLayout, #[case] home: &str, #[case] bottom: &str) {
    let layout = preset(layout);
    let home = analyze_word(&layout.table, home);
    let bottom = analyze_word(&layout.table, bottom);
    assert!(home.effort < bottom.effort);
    assert!(home.distance < bottom.distance);
}
