use crate::reports;
use clap::Args;
use keyfit::corpus;
use keyfit::error::KfResult;
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::Layout;
use keyfit::scorer::calibrate;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    #[arg(short, long)]
    pub tokens: String,

    #[arg(short, long, default_value = "halmak")]
    pub layout: String,

    #[arg(short, long, default_value = "reference.json")]
    pub output: String,
}

pub fn run(args: &CalibrateArgs, geometry: &KeyboardGeometry) -> KfResult<()> {
    let layout = Layout::resolve(&args.layout, geometry)?;
    let tokens = corpus::load_tokens(&args.tokens)?;

    let reference = calibrate(&layout.table, tokens.keys().map(String::as_str))?;
    reference.save_to_file(&args.output)?;
    info!("💾 Saved reference to {}", args.output);

    reports::print_reference_report(&reference);
    Ok(())
}
