use crate::consts::DEFAULT_EFFORT_LIMIT;
use crate::error::{KeyFitError, KfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerParams {
    /// Stop typing a corpus once cumulative effort reaches this budget.
    #[arg(long, default_value_t = DEFAULT_EFFORT_LIMIT)]
    pub effort_limit: f64,
    #[arg(long)]
    pub same_hand_penalty: Option<f64>,
    #[arg(long)]
    pub same_finger_penalty: Option<f64>,
}

impl RunnerParams {
    pub fn validate(&self) -> KfResult<()> {
        if !self.effort_limit.is_finite() || self.effort_limit < 0.0 {
            return Err(KeyFitError::Config(format!(
                "effort_limit must be finite and non-negative, got {}",
                self.effort_limit
            )));
        }
        let penalties = [
            ("same_hand_penalty", self.same_hand_penalty),
            ("same_finger_penalty", self.same_finger_penalty),
        ];
        for (name, p) in penalties {
            if let Some(v) = p {
                if !v.is_finite() {
                    return Err(KeyFitError::Config(format!("{} must be finite", name)));
                }
            }
        }
        Ok(())
    }
}

impl Default for RunnerParams {
    fn default() -> Self {
        Self {
            effort_limit: DEFAULT_EFFORT_LIMIT,
            same_hand_penalty: None,
            same_finger_penalty: None,
        }
    }
}

/// Relative weights of the normalized metrics in a word score.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    #[arg(long, default_value_t = 0.3)]
    pub weight_effort: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_distance: f64,
    #[arg(long, default_value_t = 0.2)]
    pub weight_fingers: f64,
    #[arg(long, default_value_t = 0.1)]
    pub weight_hands: f64,
    #[arg(long, default_value_t = 0.1)]
    pub weight_rows: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weight_effort: 0.3,
            weight_distance: 0.3,
            weight_fingers: 0.2,
            weight_hands: 0.1,
            weight_rows: 0.1,
        }
    }
}

impl ScoreWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KfResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KeyFitError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> KfResult<()> {
        let all = [
            ("weight_effort", self.weight_effort),
            ("weight_distance", self.weight_distance),
            ("weight_fingers", self.weight_fingers),
            ("weight_hands", self.weight_hands),
            ("weight_rows", self.weight_rows),
        ];
        for (name, w) in all {
            if !w.is_finite() {
                return Err(KeyFitError::Config(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }

    /// Applies values the user typed on the command line over file values.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoreWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_effort);
        update_if_present!(weight_distance);
        update_if_present!(weight_fingers);
        update_if_present!(weight_hands);
        update_if_present!(weight_rows);
    }
}
