//! The layout pipeline behind the "at a glance" calendar.
//!
//! `normalize -> resolve_window -> visibility -> (gantt | grid)`. The whole
//! pipeline is a pure function of the snapshot, zoom, offset, today and
//! options; calling it twice with the same arguments yields equal layouts.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::gantt::{build_rows, LayoutRow};
use super::grid::{pack_week, stack_day, WeekLane};
use super::item::{PointItem, TimeSpan};
use super::validate::{normalize, InvalidSpanPolicy};
use super::visibility::{active_count, active_legend, visible_points, visible_spans, LegendEntry};
use super::window::{resolve_window_with, GridPeriod, WeekSlots, Window, Zoom};
use crate::error::Result;
use crate::snapshot::Snapshot;

/// Knobs that are not part of the entity data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub week_start: Weekday,
    pub invalid_span_policy: InvalidSpanPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            invalid_span_policy: InvalidSpanPolicy::Clamp,
        }
    }
}

/// Point items stacked in one day cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStack {
    pub date: NaiveDate,
    pub items: Vec<PointItem>,
}

/// One displayed week of a month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout {
    pub slots: WeekSlots,
    pub lanes: Vec<WeekLane>,
    /// One stack per real date, in column order
    pub days: Vec<DayStack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodLayout {
    pub month_anchor: NaiveDate,
    pub weeks: Vec<WeekLayout>,
}

/// Render-ready body, by zoom family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum LayoutBody {
    Gantt { rows: Vec<LayoutRow> },
    Grid { periods: Vec<PeriodLayout> },
}

/// Full result of one layout request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub window: Window,
    pub active_count: usize,
    pub legend: Vec<LegendEntry>,
    pub body: LayoutBody,
}

/// Lay out `snapshot` for the given zoom, navigation offset and reference date.
///
/// # Errors
/// Returns a validation error when an inverted span meets
/// [`InvalidSpanPolicy::Reject`], or when the offset moves the window outside
/// the representable calendar.
pub fn layout(
    snapshot: &Snapshot,
    zoom: Zoom,
    nav_offset: i64,
    today: NaiveDate,
    options: &LayoutOptions,
) -> Result<Layout> {
    let snapshot = normalize(snapshot, options.invalid_span_policy)?;
    let window = resolve_window_with(zoom, today, nav_offset, options.week_start)?;

    tracing::debug!(
        %zoom,
        nav_offset,
        %today,
        spans = snapshot.spans.len(),
        points = snapshot.points.len(),
        "laying out snapshot"
    );

    let Some((start, end)) = window.range() else {
        return Ok(Layout {
            body: empty_body(zoom),
            window,
            active_count: 0,
            legend: Vec::new(),
        });
    };

    let spans = visible_spans(&snapshot.spans, start, end);
    let points = visible_points(&snapshot.points, start, end);

    let body = if window.is_grid() {
        LayoutBody::Grid {
            periods: window
                .grid_periods
                .iter()
                .map(|period| layout_period(period, &spans, &points))
                .collect(),
        }
    } else {
        LayoutBody::Gantt {
            rows: build_rows(&spans, &points, &window.days),
        }
    };

    Ok(Layout {
        active_count: active_count(&snapshot.spans, &snapshot.points, start, end),
        legend: active_legend(&snapshot.spans, &snapshot.points, start, end),
        window,
        body,
    })
}

fn layout_period(period: &GridPeriod, spans: &[TimeSpan], points: &[PointItem]) -> PeriodLayout {
    let weeks = period
        .weeks
        .iter()
        .map(|slots| WeekLayout {
            slots: *slots,
            lanes: pack_week(spans, slots),
            days: slots
                .iter()
                .flatten()
                .map(|&date| DayStack {
                    date,
                    items: stack_day(points, date),
                })
                .collect(),
        })
        .collect();

    PeriodLayout {
        month_anchor: period.month_anchor,
        weeks,
    }
}

fn empty_body(zoom: Zoom) -> LayoutBody {
    if zoom.is_grid() {
        LayoutBody::Grid { periods: Vec::new() }
    } else {
        LayoutBody::Gantt { rows: Vec::new() }
    }
}
