use crate::error::{KeyFitError, KfResult};
use crate::scorer::accumulator::analyze_word;
use crate::scorer::stats::DerivedStats;
use crate::scorer::table::KeyMetricsTable;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Effort,
    Distance,
    Symmetry,
    Evenness,
    Fingers,
    Hands,
    Rows,
}

/// Observed distribution of one metric across a reference corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub std_dev: f64,
}

impl MetricRange {
    pub const fn bounds(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            mean: 0.0,
            std_dev: 0.0,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Min-max rescale. Not clamped: values outside the reference range map
/// outside [0, 1]. A degenerate range maps everything to 0.
#[inline]
pub fn normalize(value: f64, range: &MetricRange) -> f64 {
    let span = range.span();
    if span == 0.0 {
        return 0.0;
    }
    (value - range.min) / span
}

/// Frozen per-metric rescaling constants. Recomputed only through `calibrate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationReference {
    pub effort: MetricRange,
    pub distance: MetricRange,
    pub symmetry: MetricRange,
    pub evenness: MetricRange,
    pub fingers: MetricRange,
    pub hands: MetricRange,
    pub rows: MetricRange,
}

impl Default for NormalizationReference {
    /// Word-level distribution of the filtered token corpus typed on Halmak.
    fn default() -> Self {
        Self {
            effort: MetricRange {
                min: 0.0,
                max: 695.0,
                mean: 18.747022534312368,
                std_dev: 23.433131168398496,
            },
            distance: MetricRange {
                min: 0.0,
                max: 1036.0,
                mean: 46.639459163444975,
                std_dev: 40.50654607090411,
            },
            symmetry: MetricRange {
                min: 63.0,
                max: 100.0,
                mean: 98.37921074817574,
                std_dev: 2.5778009340344603,
            },
            evenness: MetricRange {
                min: 44.0,
                max: 100.0,
                mean: 79.29150435775455,
                std_dev: 7.603102499753671,
            },
            fingers: MetricRange::bounds(0.0, 100.0),
            hands: MetricRange::bounds(0.0, 100.0),
            rows: MetricRange::bounds(0.0, 100.0),
        }
    }
}

impl NormalizationReference {
    pub fn range(&self, metric: Metric) -> &MetricRange {
        match metric {
            Metric::Effort => &self.effort,
            Metric::Distance => &self.distance,
            Metric::Symmetry => &self.symmetry,
            Metric::Evenness => &self.evenness,
            Metric::Fingers => &self.fingers,
            Metric::Hands => &self.hands,
            Metric::Rows => &self.rows,
        }
    }

    pub fn normalize(&self, metric: Metric, value: f64) -> f64 {
        normalize(value, self.range(metric))
    }

    pub fn validate(&self) -> KfResult<()> {
        use strum::IntoEnumIterator;
        for metric in Metric::iter() {
            let r = self.range(metric);
            // min == max is allowed: `normalize` maps a zero span to 0.
            if !(r.min.is_finite() && r.max.is_finite()) || r.max < r.min {
                return Err(KeyFitError::Validation(format!(
                    "Reference range for '{}' must satisfy min <= max (got {}..{})",
                    metric, r.min, r.max
                )));
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KfResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KeyFitError::Config(format!(
                "Failed to read reference file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let reference: Self = serde_json::from_str(&content)?;
        reference.validate()?;
        Ok(reference)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> KfResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Version tag: SHA-256 of the canonical JSON form.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}

/// Running min/max/sum/sum-of-squares for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningStats {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub sum_sq: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }
}

impl RunningStats {
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.sum_sq += value * value;
    }

    pub fn merge(&mut self, other: &RunningStats) {
        self.count += other.count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }

    pub fn finish(&self) -> Option<MetricRange> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);
        Some(MetricRange {
            min: self.min,
            max: self.max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Streaming builder for a `NormalizationReference`. Memory use is constant
/// in the number of samples.
#[derive(Debug, Clone, Default)]
pub struct ReferenceAccumulator {
    pub samples: u64,
    effort: RunningStats,
    distance: RunningStats,
    symmetry: RunningStats,
    evenness: RunningStats,
    fingers: RunningStats,
    hands: RunningStats,
    rows: RunningStats,
}

impl ReferenceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scalar metrics contribute one value; usage arrays contribute every element.
    pub fn push(&mut self, stats: &DerivedStats) {
        self.samples += 1;
        self.effort.push(stats.effort);
        self.distance.push(stats.distance);
        self.symmetry.push(stats.symmetry);
        self.evenness.push(stats.evenness);
        stats.fingers_usage.iter().for_each(|&v| self.fingers.push(v));
        stats.hands_usage.iter().for_each(|&v| self.hands.push(v));
        stats.rows_usage.iter().for_each(|&v| self.rows.push(v));
    }

    pub fn merge(&mut self, other: &ReferenceAccumulator) {
        self.samples += other.samples;
        self.effort.merge(&other.effort);
        self.distance.merge(&other.distance);
        self.symmetry.merge(&other.symmetry);
        self.evenness.merge(&other.evenness);
        self.fingers.merge(&other.fingers);
        self.hands.merge(&other.hands);
        self.rows.merge(&other.rows);
    }

    pub fn finish(&self) -> KfResult<NormalizationReference> {
        let get = |s: &RunningStats| s.finish().ok_or(KeyFitError::EmptySample);
        Ok(NormalizationReference {
            effort: get(&self.effort)?,
            distance: get(&self.distance)?,
            symmetry: get(&self.symmetry)?,
            evenness: get(&self.evenness)?,
            fingers: get(&self.fingers)?,
            hands: get(&self.hands)?,
            rows: get(&self.rows)?,
        })
    }
}

/// Recomputes a reference from a word corpus in a single streaming pass.
/// Words with no recognized characters are skipped.
pub fn calibrate<'w, I>(table: &KeyMetricsTable, words: I) -> KfResult<NormalizationReference>
where
    I: IntoIterator<Item = &'w str>,
{
    let mut acc = ReferenceAccumulator::new();
    let mut skipped = 0usize;

    for word in words {
        match DerivedStats::from_tally(&analyze_word(table, word)) {
            Ok(stats) => acc.push(&stats),
            Err(_) => {
                skipped += 1;
                debug!("Skipping unscorable token {:?}", word);
            }
        }
    }

    info!(
        "📐 Calibrated reference from {} words ({} skipped)",
        acc.samples, skipped
    );
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_not_clamped() {
        let r = MetricRange::bounds(10.0, 20.0);
        assert_eq!(normalize(10.0, &r), 0.0);
        assert_eq!(normalize(20.0, &r), 1.0);
        assert_eq!(normalize(30.0, &r), 2.0);
        assert_eq!(normalize(0.0, &r), -1.0);
    }

    #[test]
    fn test_degenerate_range() {
        let r = MetricRange::bounds(5.0, 5.0);
        assert_eq!(normalize(7.0, &r), 0.0);
    }

    #[test]
    fn test_running_stats() {
        let mut s = RunningStats::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            s.push(v);
        }
        let r = s.finish().unwrap();
        assert_eq!(r.min, 2.0);
        assert_eq!(r.max, 9.0);
        assert_eq!(r.mean, 5.0);
        assert!((r.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let values = [1.0, 3.0, 8.0, 2.0, 6.0];
        let mut whole = RunningStats::default();
        values.iter().for_each(|&v| whole.push(v));

        let mut a = RunningStats::default();
        let mut b = RunningStats::default();
        values[..2].iter().for_each(|&v| a.push(v));
        values[2..].iter().for_each(|&v| b.push(v));
        a.merge(&b);

        assert_eq!(a, whole);
    }

    #[test]
    fn test_empty_accumulator_fails() {
        assert!(ReferenceAccumulator::new().finish().is_err());
    }

    #[test]
    fn test_default_reference_valid() {
        let r = NormalizationReference::default();
        r.validate().unwrap();
        assert_eq!(r.fingerprint().len(), 64);
        assert_eq!(r.fingerprint(), NormalizationReference::default().fingerprint());
    }
}
