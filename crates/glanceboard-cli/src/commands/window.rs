use glanceboard_core::{resolve_window_with, Config};

use super::ViewArgs;

pub fn run(args: ViewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let window = resolve_window_with(
        args.zoom_or(&config),
        args.today_or_local(),
        args.offset,
        config.calendar.week_start,
    )?;
    println!("{}", serde_json::to_string_pretty(&window)?);
    Ok(())
}
