use crate::reports;
use clap::Args;
use keyfit::config::ScoreWeights;
use keyfit::error::{KeyFitError, KfResult};
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::Layout;
use keyfit::scorer::{analyze_word, DerivedStats, NormalizationReference, ScoreBreakdown};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Preset name or path to a layout grid file
    #[arg(short, long, default_value = "halmak")]
    pub layout: String,

    /// Normalization reference JSON (see `calibrate`)
    #[arg(long)]
    pub reference: Option<String>,

    #[command(flatten)]
    pub weights: ScoreWeights,

    #[arg(required = true)]
    pub words: Vec<String>,
}

pub fn run(
    args: &AnalyzeArgs,
    geometry: &KeyboardGeometry,
    reference: &NormalizationReference,
    weights: ScoreWeights,
) -> KfResult<()> {
    weights.validate()?;
    let layout = Layout::resolve(&args.layout, geometry)?;
    info!("🔬 Analyzing {} word(s) on {}", args.words.len(), layout.name);

    let mut rows = Vec::with_capacity(args.words.len());
    for word in &args.words {
        let stats = match DerivedStats::from_tally(&analyze_word(&layout.table, word)) {
            Ok(s) => s,
            Err(KeyFitError::EmptySample) => {
                warn!("⚠️  {:?} has no keys on {}. Skipped.", word, layout.name);
                continue;
            }
            Err(e) => return Err(e),
        };
        let breakdown = ScoreBreakdown::from_stats(&stats, reference);
        let score = breakdown.weighted(&weights);
        rows.push((word.clone(), stats, breakdown, score));
    }

    reports::print_word_report(&rows);
    Ok(())
}
