use crate::consts::{
    DEFAULT_ROW_CHANGE_PENALTY, DEFAULT_SAME_FINGER_PENALTY, DEFAULT_SAME_HAND_PENALTY,
    FINGER_COUNT, ROW_COUNT,
};
use crate::core_types::{Hand, KeyMetrics};
use crate::scorer::table::KeyMetricsTable;
use serde::{Deserialize, Serialize};

/// Overhead charged for the relationship between consecutive keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penalties {
    pub same_finger: f64,
    pub same_hand: f64,
    /// Charged per row crossed.
    pub row_change: f64,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            same_finger: DEFAULT_SAME_FINGER_PENALTY,
            same_hand: DEFAULT_SAME_HAND_PENALTY,
            row_change: DEFAULT_ROW_CHANGE_PENALTY,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overheads {
    pub same_finger: f64,
    /// Penalizes not alternating hands.
    pub same_hand: f64,
    pub row_change: f64,
}

impl Overheads {
    pub fn total(&self) -> f64 {
        self.same_finger + self.same_hand + self.row_change
    }
}

/// Raw totals of one analysis pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    /// Sum of per-key effort. Overheads are kept separately.
    pub effort: f64,
    pub distance: f64,
    /// Number of recognized characters.
    pub position: usize,
    /// Presses per tracked finger (canonical order) per row. Thumb presses are not counted.
    pub counts: [[u32; ROW_COUNT]; FINGER_COUNT],
    pub overheads: Overheads,
}

impl Tally {
    pub fn finger_total(&self, finger_idx: usize) -> u32 {
        self.counts[finger_idx].iter().sum()
    }

    pub fn row_total(&self, row_idx: usize) -> u32 {
        self.counts.iter().map(|rows| rows[row_idx]).sum()
    }
}

/// Folds characters into a `Tally`.
///
/// Characters missing from the table are skipped entirely: they add no cost
/// and do not replace the previous recognized key, so overheads are computed
/// across them as if they were absent. A long run of unmapped characters
/// still bridges the two recognized keys around it.
pub struct Accumulator<'a> {
    table: &'a KeyMetricsTable,
    penalties: Penalties,
    tally: Tally,
    prev: Option<KeyMetrics>,
}

impl<'a> Accumulator<'a> {
    pub fn new(table: &'a KeyMetricsTable, penalties: Penalties) -> Self {
        Self {
            table,
            penalties,
            tally: Tally::default(),
            prev: None,
        }
    }

    /// Feeds one character. Returns `false` if it was not in the table.
    #[inline]
    pub fn feed(&mut self, c: char) -> bool {
        let Some(&key) = self.table.get(c) else {
            return false;
        };

        let t = &mut self.tally;
        t.effort += key.effort;
        t.distance += key.distance;
        t.position += 1;

        if let Some(idx) = key.finger.index() {
            t.counts[idx][key.row.index()] += 1;
        }

        if let Some(prev) = self.prev {
            if key.finger == prev.finger && !key.finger.is_thumb() {
                t.overheads.same_finger += self.penalties.same_finger;
            }
            if key.hand == prev.hand && key.hand != Hand::Neutral {
                t.overheads.same_hand += self.penalties.same_hand;
            }
            let rows_crossed = key.row.distance_to(prev.row);
            if rows_crossed > 0 {
                t.overheads.row_change += rows_crossed as f64 * self.penalties.row_change;
            }
        }

        self.prev = Some(key);
        true
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn finish(self) -> Tally {
        self.tally
    }
}

/// Analyzes a sequence with the default penalties.
pub fn analyze<I>(table: &KeyMetricsTable, chars: I) -> Tally
where
    I: IntoIterator<Item = char>,
{
    analyze_with(table, chars, Penalties::default())
}

pub fn analyze_with<I>(table: &KeyMetricsTable, chars: I, penalties: Penalties) -> Tally
where
    I: IntoIterator<Item = char>,
{
    let mut acc = Accumulator::new(table, penalties);
    for c in chars {
        acc.feed(c);
    }
    acc.finish()
}

pub fn analyze_word(table: &KeyMetricsTable, word: &str) -> Tally {
    analyze(table, word.chars())
}
