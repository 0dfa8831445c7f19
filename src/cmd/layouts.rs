use crate::reports;
use clap::Args;
use keyfit::error::KfResult;
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::get_all_layouts;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Only presets whose name contains this
    pub filter: Option<String>,
}

pub fn run(args: &LayoutsArgs, geometry: &KeyboardGeometry) -> KfResult<()> {
    for layout in get_all_layouts(geometry)? {
        if let Some(ref filter) = args.filter {
            if !layout.name.to_lowercase().contains(&filter.to_lowercase()) {
                continue;
            }
        }
        reports::print_layout_grid(&layout);
    }
    Ok(())
}
