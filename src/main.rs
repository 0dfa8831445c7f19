use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use keyfit::config::ScoreWeights;
use keyfit::error::KfResult;
use keyfit::geometry::KeyboardGeometry;
use keyfit::scorer::NormalizationReference;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keyboard geometry JSON. Defaults to the built-in row-staggered board.
    #[arg(global = true, short, long)]
    geometry: Option<String>,

    /// Score weights JSON. Explicit --weight-* flags override its values.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-word statistics and scores
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Type a corpus through every layout on an equal effort budget
    Compare(cmd::compare::CompareArgs),
    /// Score a token frequency list on one layout
    Score(cmd::score::ScoreArgs),
    /// Recompute the normalization reference from a token list
    Calibrate(cmd::calibrate::CalibrateArgs),
    /// Print the preset layout grids
    Layouts(cmd::layouts::LayoutsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> KfResult<()> {
    let geometry = match &cli.geometry {
        Some(path) => {
            info!("📐 Loading Geometry: {}", path);
            KeyboardGeometry::load_from_file(path)?
        }
        None => KeyboardGeometry::standard(),
    };

    match cli.command {
        Commands::Analyze(args) => {
            let sub = matches.subcommand_matches("analyze");
            let weights = resolve_weights(cli.weights.as_deref(), &args.weights, sub)?;
            let reference = resolve_reference(args.reference.as_deref())?;
            cmd::analyze::run(&args, &geometry, &reference, weights)
        }
        Commands::Score(args) => {
            let sub = matches.subcommand_matches("score");
            let weights = resolve_weights(cli.weights.as_deref(), &args.weights, sub)?;
            let reference = resolve_reference(args.reference.as_deref())?;
            cmd::score::run(&args, &geometry, &reference, weights)
        }
        Commands::Compare(args) => cmd::compare::run(&args, &geometry),
        Commands::Calibrate(args) => cmd::calibrate::run(&args, &geometry),
        Commands::Layouts(args) => cmd::layouts::run(&args, &geometry),
    }
}

/// File weights become the base; flags typed on the command line win.
fn resolve_weights(
    path: Option<&str>,
    cli_weights: &ScoreWeights,
    sub_matches: Option<&ArgMatches>,
) -> KfResult<ScoreWeights> {
    let Some(path) = path else {
        return Ok(*cli_weights);
    };

    info!("⚖️  Loading Weights from: {}", path);
    let mut file_weights = ScoreWeights::load_from_file(path)?;
    if let Some(m) = sub_matches {
        file_weights.merge_from_cli(cli_weights, m);
    }
    Ok(file_weights)
}

fn resolve_reference(path: Option<&str>) -> KfResult<NormalizationReference> {
    let reference = match path {
        Some(p) => {
            info!("📏 Loading Normalization Reference: {}", p);
            NormalizationReference::load_from_file(p)?
        }
        None => {
            warn!("⚠️  No reference file given. Using embedded reference.");
            NormalizationReference::default()
        }
    };
    info!("   Reference fingerprint: {}", &reference.fingerprint()[..12]);
    Ok(reference)
}
