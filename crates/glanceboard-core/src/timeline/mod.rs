//! Timeline layout engine.
//!
//! This module provides:
//! - The span and point item model
//! - Window resolution for day, week, month and quarter zooms
//! - Visibility filtering and active counts
//! - Gantt rows (day/week) and packed week lanes plus day stacks (month/quarter)

mod engine;
mod gantt;
mod grid;
mod item;
mod validate;
mod visibility;
mod window;

pub use engine::{layout, DayStack, Layout, LayoutBody, LayoutOptions, PeriodLayout, WeekLayout};
pub use gantt::{build_rows, LayoutRow, RowItem, RowKind};
pub use grid::{lane_count, pack_week, stack_day, WeekLane};
pub use item::{ColorKey, PointItem, PointKind, SpanKind, TimeSpan};
pub use validate::{normalize, InvalidSpanPolicy};
pub use visibility::{active_count, active_legend, visible_points, visible_spans, LegendEntry};
pub use window::{
    month_grid, resolve_window, resolve_window_with, start_of_week, GridPeriod, WeekSlots, Window, Zoom,
};
