use crate::config::ScoreWeights;
use crate::corpus::TokenFrequencies;
use crate::error::KfResult;
use crate::scorer::accumulator::analyze_word;
use crate::scorer::normalization::{Metric, NormalizationReference};
use crate::scorer::stats::{variance, DerivedStats};
use crate::scorer::table::KeyMetricsTable;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    pub frequency: u64,
    pub score: f64,
}

pub type ScoredTokens = BTreeMap<String, ScoredToken>;

/// Normalized strain components of one sample, before weighting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub effort: f64,
    pub distance: f64,
    pub finger_imbalance: f64,
    pub hand_imbalance: f64,
    pub row_imbalance: f64,
}

impl ScoreBreakdown {
    pub fn from_stats(stats: &DerivedStats, reference: &NormalizationReference) -> Self {
        Self {
            effort: reference.normalize(Metric::Effort, stats.effort),
            distance: reference.normalize(Metric::Distance, stats.distance),
            finger_imbalance: reference.normalize(Metric::Fingers, variance(&stats.fingers_usage)),
            hand_imbalance: reference
                .normalize(Metric::Hands, (50.0 - stats.left_hand_usage()).abs()),
            row_imbalance: reference.normalize(Metric::Rows, variance(&stats.rows_usage)),
        }
    }

    pub fn weighted(&self, w: &ScoreWeights) -> f64 {
        w.weight_effort * self.effort
            + w.weight_distance * self.distance
            + w.weight_fingers * self.finger_imbalance
            + w.weight_hands * self.hand_imbalance
            + w.weight_rows * self.row_imbalance
    }
}

/// Scores words typed on one layout. Higher means more strain.
pub struct WordScorer<'a> {
    pub table: &'a KeyMetricsTable,
    pub reference: &'a NormalizationReference,
    pub weights: ScoreWeights,
}

impl<'a> WordScorer<'a> {
    pub fn new(
        table: &'a KeyMetricsTable,
        reference: &'a NormalizationReference,
        weights: ScoreWeights,
    ) -> Self {
        Self {
            table,
            reference,
            weights,
        }
    }

    pub fn weighted_score(&self, stats: &DerivedStats) -> f64 {
        ScoreBreakdown::from_stats(stats, self.reference).weighted(&self.weights)
    }

    /// `frequency * weighted score`, so common words dominate a corpus total.
    pub fn score_stats(&self, stats: &DerivedStats, frequency: u64) -> f64 {
        frequency as f64 * self.weighted_score(stats)
    }

    pub fn score_word(&self, word: &str, frequency: u64) -> KfResult<ScoredToken> {
        let stats = DerivedStats::from_tally(&analyze_word(self.table, word))?;
        Ok(ScoredToken {
            frequency,
            score: self.score_stats(&stats, frequency),
        })
    }

    /// Scores every token independently. Tokens with no recognized characters are left out.
    pub fn score_tokens(&self, tokens: &TokenFrequencies) -> ScoredTokens {
        let scored: ScoredTokens = tokens
            .par_iter()
            .filter_map(|(word, &freq)| match self.score_word(word, freq) {
                Ok(s) => Some((word.clone(), s)),
                Err(e) => {
                    debug!("Skipping token {:?}: {}", word, e);
                    None
                }
            })
            .collect();

        info!(
            "🧮 Scored {} of {} tokens ({} unscorable)",
            scored.len(),
            tokens.len(),
            tokens.len() - scored.len()
        );
        scored
    }
}

fn roman_numeral() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .unwrap_or_else(|e| unreachable!("static pattern: {}", e))
    })
}

pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty() && roman_numeral().is_match(token)
}

/// Drops short tokens and Roman numerals, then orders by score, highest first.
pub fn rank(scored: &ScoredTokens, min_len: usize) -> Vec<(String, ScoredToken)> {
    let mut ranked: Vec<(String, ScoredToken)> = scored
        .iter()
        .filter(|(word, s)| {
            word.chars().count() >= min_len && !is_roman_numeral(word) && s.score.is_finite()
        })
        .map(|(w, s)| (w.clone(), *s))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.score
            .partial_cmp(&a.1.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}
