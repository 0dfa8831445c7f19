#![allow(dead_code)]

use keyfit::core_types::{Finger, KeyMetrics, Row};
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::{KnownLayout, Layout};
use keyfit::scorer::KeyMetricsTable;

/// Small hand-built table:
/// `a` l-pinky home (1.0), `s` l-ring home (0.5), `q` l-pinky top (2.0, dist 1),
/// `z` l-pinky bottom (2.5, dist 1), `j` r-index home (0.5), `k` r-middle home (0.5),
/// space on the thumb (0.0).
pub fn toy_table() -> KeyMetricsTable {
    KeyMetricsTable::from_entries([
        ('a', KeyMetrics::new(Finger::LeftPinky, Row::Home, 1.0, 0.0)),
        ('s', KeyMetrics::new(Finger::LeftRing, Row::Home, 0.5, 0.0)),
        ('q', KeyMetrics::new(Finger::LeftPinky, Row::Top, 2.0, 1.0)),
        ('z', KeyMetrics::new(Finger::LeftPinky, Row::Bottom, 2.5, 1.0)),
        ('j', KeyMetrics::new(Finger::RightIndex, Row::Home, 0.5, 0.0)),
        ('k', KeyMetrics::new(Finger::RightMiddle, Row::Home, 0.5, 0.0)),
        (' ', KeyMetrics::new(Finger::Thumb, Row::Bottom, 0.0, 0.0)),
    ])
    .expect("toy table is valid")
}

pub fn preset(layout: KnownLayout) -> Layout {
    layout
        .build(&KeyboardGeometry::standard())
        .expect("preset layouts parse")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
