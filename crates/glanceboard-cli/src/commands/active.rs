use clap::Args;
use glanceboard_core::{layout, Config, Snapshot};
use serde::Serialize;
use std::path::PathBuf;

use super::ViewArgs;
use glanceboard_core::timeline::LegendEntry;

#[derive(Args, Debug)]
pub struct ActiveArgs {
    /// Snapshot JSON file (spans, points and/or projects)
    pub snapshot: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveSummary<'a> {
    zoom: &'a str,
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
    active_count: usize,
    legend: &'a [LegendEntry],
}

pub fn run(args: ActiveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let snapshot = Snapshot::load(&args.snapshot)?;
    let zoom = args.view.zoom_or(&config);
    let result = layout(
        &snapshot,
        zoom,
        args.view.offset,
        args.view.today_or_local(),
        &config.layout_options(),
    )?;

    let range = result.window.range();
    let summary = ActiveSummary {
        zoom: zoom.as_str(),
        start: range.map(|(start, _)| start),
        end: range.map(|(_, end)| end),
        active_count: result.active_count,
        legend: &result.legend,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
