use crate::consts::{EVENNESS_FLOOR, FINGER_COUNT, MAX_FINGER_CV, ROW_COUNT, SYMMETRY_FLOOR};
use crate::error::{KeyFitError, KfResult};
use crate::scorer::accumulator::{Overheads, Tally};
use serde::{Deserialize, Serialize};

/// Percentages and balance metrics derived from a non-empty `Tally`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub effort: f64,
    pub distance: f64,
    pub position: usize,
    pub overheads: Overheads,

    /// Share of keystrokes per tracked finger, left pinky to right pinky.
    pub fingers_usage: [f64; FINGER_COUNT],
    /// [left, right]. Thumb presses belong to neither.
    pub hands_usage: [f64; 2],
    /// Share of keystrokes per row, number row first.
    pub rows_usage: [f64; ROW_COUNT],

    pub symmetry: f64,
    pub evenness: f64,
}

impl DerivedStats {
    pub fn from_tally(tally: &Tally) -> KfResult<Self> {
        if tally.position == 0 {
            return Err(KeyFitError::EmptySample);
        }
        let total = tally.position as f64;

        let mut fingers_usage = [0.0; FINGER_COUNT];
        for (f, usage) in fingers_usage.iter_mut().enumerate() {
            *usage = 100.0 * tally.finger_total(f) as f64 / total;
        }

        let mut rows_usage = [0.0; ROW_COUNT];
        for (r, usage) in rows_usage.iter_mut().enumerate() {
            *usage = 100.0 * tally.row_total(r) as f64 / total;
        }

        let half = FINGER_COUNT / 2;
        let hands_usage = [
            fingers_usage[..half].iter().sum(),
            fingers_usage[half..].iter().sum(),
        ];

        Ok(Self {
            effort: tally.effort,
            distance: tally.distance,
            position: tally.position,
            overheads: tally.overheads,
            fingers_usage,
            hands_usage,
            rows_usage,
            symmetry: symmetry(&fingers_usage),
            evenness: evenness(&fingers_usage),
        })
    }

    pub fn left_hand_usage(&self) -> f64 {
        self.hands_usage[0]
    }

    pub fn effort_per_key(&self) -> f64 {
        self.effort / self.position as f64
    }

    pub fn distance_per_key(&self) -> f64 {
        self.distance / self.position as f64
    }

    /// Overhead components as a percentage of base effort.
    /// `None` when the sample cost no effort at all.
    pub fn overhead_shares(&self) -> Option<Overheads> {
        if self.effort <= 0.0 {
            return None;
        }
        let pct = |v: f64| v / self.effort * 100.0;
        Some(Overheads {
            same_finger: pct(self.overheads.same_finger),
            same_hand: pct(self.overheads.same_hand),
            row_change: pct(self.overheads.row_change),
        })
    }
}

impl TryFrom<&Tally> for DerivedStats {
    type Error = KeyFitError;

    fn try_from(tally: &Tally) -> KfResult<Self> {
        Self::from_tally(tally)
    }
}

/// 100 for mirrored usage, `SYMMETRY_FLOOR` for a one-handed sample.
///
/// The summed mirrored-pair difference is at most 100 (usage shares sum to
/// at most 100) and maps linearly onto [`SYMMETRY_FLOOR`, 100], the range
/// the embedded normalization reference was measured on.
pub fn symmetry(fingers_usage: &[f64; FINGER_COUNT]) -> f64 {
    let penalty: f64 = (0..FINGER_COUNT / 2)
        .map(|i| (fingers_usage[i] - fingers_usage[FINGER_COUNT - 1 - i]).abs())
        .sum();
    (100.0 - (100.0 - SYMMETRY_FLOOR) * penalty / 100.0).clamp(SYMMETRY_FLOOR, 100.0)
}

/// 100 for even finger load, `EVENNESS_FLOOR` when a single finger does all the work.
/// The coefficient of variation is scaled by its maximum, sqrt(7).
pub fn evenness(fingers_usage: &[f64; FINGER_COUNT]) -> f64 {
    let mean = mean(fingers_usage);
    if mean <= 0.0 {
        return 100.0;
    }
    let cv = variance(fingers_usage).sqrt() / mean;
    (100.0 - (100.0 - EVENNESS_FLOOR) * cv / MAX_FINGER_CV).clamp(EVENNESS_FLOOR, 100.0)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}
