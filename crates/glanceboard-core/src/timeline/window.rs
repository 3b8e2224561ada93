//! Window resolution: which dates are in view for a zoom level and offset.
//!
//! Day and week zooms produce a flat list of columns for Gantt rendering.
//! Month and quarter zooms produce month grids made of 7-slot weeks, where
//! days belonging to a neighbouring month are `None`.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Calendar zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zoom {
    Day,
    Week,
    Month,
    Quarter,
}

impl Zoom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    /// Month and quarter render as grids; day and week as Gantt rows.
    pub fn is_grid(&self) -> bool {
        matches!(self, Self::Month | Self::Quarter)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zoom {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            _ => Err(ValidationError::UnknownZoom(s.to_string())),
        }
    }
}

/// Seven slots, one per weekday column. `None` marks a day of an adjacent month.
pub type WeekSlots = [Option<NaiveDate>; 7];

/// One month of a grid-mode window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPeriod {
    /// First day of the month
    pub month_anchor: NaiveDate,
    pub weeks: Vec<WeekSlots>,
}

impl GridPeriod {
    /// All real dates of the month, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flat_map(|w| w.iter().flatten().copied())
    }
}

/// Resolved visible range(s) for a zoom level and navigation offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub zoom: Zoom,
    /// Gantt columns (1 for day, 7 for week). Empty in grid modes.
    pub days: Vec<NaiveDate>,
    /// Month grids (1 for month, 3 for quarter). Empty in Gantt modes.
    pub grid_periods: Vec<GridPeriod>,
}

impl Window {
    pub fn is_grid(&self) -> bool {
        self.zoom.is_grid()
    }

    /// First and last real date in view.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.is_grid() {
            let first = self.grid_periods.first()?.dates().next()?;
            let last = self.grid_periods.last()?.dates().last()?;
            Some((first, last))
        } else {
            Some((*self.days.first()?, *self.days.last()?))
        }
    }
}

/// Resolve the window using Monday-first weeks.
///
/// # Errors
/// Returns [`ValidationError::DateOutOfRange`] if the offset moves the window
/// outside the representable calendar.
pub fn resolve_window(zoom: Zoom, today: NaiveDate, nav_offset: i64) -> Result<Window, ValidationError> {
    resolve_window_with(zoom, today, nav_offset, Weekday::Mon)
}

/// Resolve the window with an explicit first day of the week.
///
/// `nav_offset` counts days for [`Zoom::Day`], weeks for [`Zoom::Week`],
/// and months for both [`Zoom::Month`] and [`Zoom::Quarter`]. A quarter is the
/// shifted month plus the two months after it.
///
/// # Errors
/// Returns [`ValidationError::DateOutOfRange`] if the offset moves the window
/// outside the representable calendar.
pub fn resolve_window_with(
    zoom: Zoom,
    today: NaiveDate,
    nav_offset: i64,
    week_start: Weekday,
) -> Result<Window, ValidationError> {
    let (days, grid_periods) = match zoom {
        Zoom::Day => (vec![shift_days(today, nav_offset)?], Vec::new()),
        Zoom::Week => {
            let offset_days = nav_offset.checked_mul(7).ok_or(ValidationError::DateOutOfRange {
                base: today,
                offset: nav_offset,
                unit: "weeks",
            })?;
            let start = shift_days(start_of_week(today, week_start), offset_days)?;
            let days = (0..7)
                .map(|i| shift_days(start, i))
                .collect::<Result<Vec<_>, _>>()?;
            (days, Vec::new())
        }
        Zoom::Month => {
            let anchor = shift_months(first_of_month(today), nav_offset)?;
            (Vec::new(), vec![month_grid(anchor, week_start)?])
        }
        Zoom::Quarter => {
            let anchor = shift_months(first_of_month(today), nav_offset)?;
            let periods = (0..3)
                .map(|i| shift_months(anchor, i).and_then(|m| month_grid(m, week_start)))
                .collect::<Result<Vec<_>, _>>()?;
            (Vec::new(), periods)
        }
    };

    Ok(Window {
        zoom,
        days,
        grid_periods,
    })
}

/// The date on or before `date` that falls on `week_start`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    // Only fails on the first days of chrono's calendar.
    date.checked_sub_days(Days::new(u64::from(back))).unwrap_or(date)
}

/// Build the week rows of the month starting at `anchor`.
///
/// Every week containing at least one day of the month is emitted, so the grid
/// has 4, 5 or 6 rows depending on where the month falls.
pub fn month_grid(anchor: NaiveDate, week_start: Weekday) -> Result<GridPeriod, ValidationError> {
    let anchor = first_of_month(anchor);
    let last = shift_months(anchor, 1)?
        .pred_opt()
        .ok_or(ValidationError::DateOutOfRange {
            base: anchor,
            offset: 1,
            unit: "months",
        })?;

    let lead = (7 + anchor.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let month_len = last.day();
    let cells = lead + month_len;
    let week_count = cells.div_ceil(7);

    let mut weeks = Vec::with_capacity(week_count as usize);
    for w in 0..week_count {
        let mut slots: WeekSlots = [None; 7];
        for (col, slot) in slots.iter_mut().enumerate() {
            let cell = w * 7 + col as u32;
            if cell >= lead && cell < cells {
                *slot = anchor.with_day(cell - lead + 1);
            }
        }
        weeks.push(slots);
    }

    Ok(GridPeriod {
        month_anchor: anchor,
        weeks,
    })
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn shift_days(base: NaiveDate, offset: i64) -> Result<NaiveDate, ValidationError> {
    let amount = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        base.checked_add_days(amount)
    } else {
        base.checked_sub_days(amount)
    };
    shifted.ok_or(ValidationError::DateOutOfRange {
        base,
        offset,
        unit: "days",
    })
}

fn shift_months(base: NaiveDate, offset: i64) -> Result<NaiveDate, ValidationError> {
    let out_of_range = ValidationError::DateOutOfRange {
        base,
        offset,
        unit: "months",
    };
    let amount = u32::try_from(offset.unsigned_abs()).map_err(|_| out_of_range.clone())?;
    let shifted = if offset >= 0 {
        base.checked_add_months(Months::new(amount))
    } else {
        base.checked_sub_months(Months::new(amount))
    };
    shifted.ok_or(out_of_range)
}
