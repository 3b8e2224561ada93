use clap::Args;
use glanceboard_core::{layout, Config, Snapshot};
use std::path::PathBuf;

use super::ViewArgs;
use crate::render;

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Snapshot JSON file (spans, points and/or projects)
    pub snapshot: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
    /// Print a plain-text calendar instead of JSON
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let snapshot = Snapshot::load(&args.snapshot)?;
    let result = layout(
        &snapshot,
        args.view.zoom_or(&config),
        args.view.offset,
        args.view.today_or_local(),
        &config.layout_options(),
    )?;

    if args.text {
        print!("{}", render::render_text(&result, config.display.max_label_width as usize));
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
