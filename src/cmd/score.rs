use crate::reports;
use clap::Args;
use keyfit::config::ScoreWeights;
use keyfit::corpus;
use keyfit::error::KfResult;
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::Layout;
use keyfit::scorer::{rank, NormalizationReference, WordScorer};
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Token frequency list (.json, .csv or .tsv)
    #[arg(short, long)]
    pub tokens: String,

    #[arg(short, long, default_value = "qwerty")]
    pub layout: String,

    #[arg(short, long, default_value = "scored_tokens.json")]
    pub output: String,

    #[arg(long)]
    pub reference: Option<String>,

    #[command(flatten)]
    pub weights: ScoreWeights,

    /// Shortest token kept in the ranking
    #[arg(long, default_value_t = 3)]
    pub min_len: usize,

    /// Also write the filtered ranking as a JSON array
    #[arg(long)]
    pub ranked_output: Option<String>,

    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    word: &'a str,
    frequency: u64,
    score: f64,
}

pub fn run(
    args: &ScoreArgs,
    geometry: &KeyboardGeometry,
    reference: &NormalizationReference,
    weights: ScoreWeights,
) -> KfResult<()> {
    weights.validate()?;
    let layout = Layout::resolve(&args.layout, geometry)?;
    let tokens = corpus::load_tokens(&args.tokens)?;

    let scorer = WordScorer::new(&layout.table, reference, weights);
    let scored = scorer.score_tokens(&tokens);

    fs::write(&args.output, serde_json::to_string_pretty(&scored)?)?;
    info!("💾 Saved {} scores to {}", scored.len(), args.output);

    let ranked = rank(&scored, args.min_len);
    reports::print_ranked_report(&ranked, args.top);

    if let Some(path) = &args.ranked_output {
        let entries: Vec<RankedEntry> = ranked
            .iter()
            .map(|(w, s)| RankedEntry {
                word: w,
                frequency: s.frequency,
                score: s.score,
            })
            .collect();
        fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        info!("💾 Saved ranking to {}", path);
    }
    Ok(())
}
