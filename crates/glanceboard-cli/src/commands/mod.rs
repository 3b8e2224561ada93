pub mod active;
pub mod config;
pub mod layout;
pub mod window;

use chrono::{Local, NaiveDate};
use clap::Args;
use glanceboard_core::{Config, Zoom};

/// Zoom, navigation and reference date shared by the view commands.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Zoom level: day, week, month or quarter (defaults to the configured zoom)
    #[arg(long)]
    pub zoom: Option<Zoom>,
    /// Reference date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Pages to move from the reference date (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,
}

impl ViewArgs {
    pub fn zoom_or(&self, config: &Config) -> Zoom {
        self.zoom.unwrap_or(config.calendar.default_zoom)
    }

    pub fn today_or_local(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
