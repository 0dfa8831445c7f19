use crate::reports;
use clap::{Args, ValueEnum};
use keyfit::config::RunnerParams;
use keyfit::corpus::{self, POPULAR_BIGRAMS, POPULAR_TRIGRAMS};
use keyfit::error::KfResult;
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::{get_all_layouts, Layout};
use keyfit::scorer::{CorpusRunner, RunnerOptions};
use std::fs;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SyntheticCorpus {
    Bigrams,
    Trigrams,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Directory of .txt files to type
    #[arg(long, conflicts_with = "synthetic")]
    pub text_dir: Option<String>,

    /// Type a text generated from popular English n-grams instead
    #[arg(long, value_enum)]
    pub synthetic: Option<SyntheticCorpus>,

    /// Only presets whose name contains this
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Extra layout grid files to include
    #[arg(long = "layout-file")]
    pub layout_files: Vec<String>,

    /// Write the raw tallies as JSON
    #[arg(long)]
    pub json: Option<String>,

    #[command(flatten)]
    pub runner: RunnerParams,
}

pub fn run(args: &CompareArgs, geometry: &KeyboardGeometry) -> KfResult<()> {
    args.runner.validate()?;
    let text = match &args.text_dir {
        Some(dir) => corpus::load_text_dir(dir)?,
        None => match args.synthetic.unwrap_or(SyntheticCorpus::Bigrams) {
            SyntheticCorpus::Bigrams => corpus::synthetic_text(POPULAR_BIGRAMS),
            SyntheticCorpus::Trigrams => corpus::synthetic_text(POPULAR_TRIGRAMS),
        },
    };

    let mut layouts: Vec<Layout> = get_all_layouts(geometry)?
        .into_iter()
        .filter(|l| match &args.layout {
            Some(filter) => l.name.to_lowercase().contains(&filter.to_lowercase()),
            None => true,
        })
        .collect();
    for path in &args.layout_files {
        layouts.push(Layout::load_from_file(path, geometry)?);
    }

    let options = RunnerOptions::from(&args.runner);
    info!(
        "⌨️  Typing {} chars through {} layouts (effort budget {:.0})",
        text.chars().count(),
        layouts.len(),
        options.effort_limit
    );

    let runner = CorpusRunner::new(&text, options);
    let runs = runner.compare(&layouts);
    reports::print_comparison_report(&runs);

    if let Some(path) = &args.json {
        fs::write(path, serde_json::to_string_pretty(&runs)?)?;
        info!("💾 Saved tallies to {}", path);
    }
    Ok(())
}
