use crate::config::RunnerParams;
use crate::consts::DEFAULT_EFFORT_LIMIT;
use crate::layouts::Layout;
use crate::scorer::accumulator::{Accumulator, Penalties, Tally};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Copy, PartialEq, TypedBuilder)]
pub struct RunnerOptions {
    #[builder(default = DEFAULT_EFFORT_LIMIT)]
    pub effort_limit: f64,
    #[builder(default, setter(strip_option))]
    pub same_hand_penalty: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub same_finger_penalty: Option<f64>,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&RunnerParams> for RunnerOptions {
    fn from(p: &RunnerParams) -> Self {
        Self {
            effort_limit: p.effort_limit,
            same_hand_penalty: p.same_hand_penalty,
            same_finger_penalty: p.same_finger_penalty,
        }
    }
}

impl RunnerOptions {
    pub fn penalties(&self) -> Penalties {
        let base = Penalties::default();
        Penalties {
            same_finger: self.same_finger_penalty.unwrap_or(base.same_finger),
            same_hand: self.same_hand_penalty.unwrap_or(base.same_hand),
            row_change: base.row_change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRun {
    pub name: String,
    pub tally: Tally,
}

/// Types a text body through layouts on an equal effort budget rather than
/// an equal character count.
pub struct CorpusRunner<'t> {
    text: &'t str,
    options: RunnerOptions,
}

impl<'t> CorpusRunner<'t> {
    pub fn new(text: &'t str, options: RunnerOptions) -> Self {
        Self { text, options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Stops as soon as effort reaches the budget; the character that crosses
    /// it is the last one fed.
    pub fn type_with(&self, layout: &Layout) -> Tally {
        let mut acc = Accumulator::new(&layout.table, self.options.penalties());
        let mut exhausted = true;

        for c in self.text.chars() {
            if acc.tally().effort >= self.options.effort_limit {
                exhausted = false;
                break;
            }
            acc.feed(c);
        }

        let tally = acc.finish();
        debug!(
            "{}: reached {} keys, effort {:.1}{}",
            layout.name,
            tally.position,
            tally.effort,
            if exhausted { " (corpus exhausted)" } else { "" }
        );
        tally
    }

    /// Runs each layout independently, ordered by keystrokes reached
    /// (fewest first), ties by name.
    pub fn compare(&self, layouts: &[Layout]) -> Vec<LayoutRun> {
        let mut runs: Vec<LayoutRun> = layouts
            .par_iter()
            .map(|layout| LayoutRun {
                name: layout.name.clone(),
                tally: self.type_with(layout),
            })
            .collect();

        runs.sort_by(|a, b| {
            a.tally
                .position
                .cmp(&b.tally.position)
                .then_with(|| a.name.cmp(&b.name))
        });
        runs
    }
}
