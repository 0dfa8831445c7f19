pub mod accumulator;
pub mod normalization;
pub mod runner;
pub mod stats;
pub mod table;
pub mod weighting;

pub use self::accumulator::{analyze, analyze_with, analyze_word, Accumulator, Overheads, Penalties, Tally};
pub use self::normalization::{calibrate, normalize, Metric, MetricRange, NormalizationReference};
pub use self::runner::{CorpusRunner, LayoutRun, RunnerOptions};
pub use self::stats::DerivedStats;
pub use self::table::KeyMetricsTable;
pub use self::weighting::{rank, ScoreBreakdown, ScoredToken, ScoredTokens, WordScorer};
