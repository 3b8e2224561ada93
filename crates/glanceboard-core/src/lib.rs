//! # Glanceboard Core Library
//!
//! This library provides the "at a glance" calendar behind the Glanceboard
//! production dashboard. It follows a CLI-first philosophy: every operation is
//! available through the standalone `glanceboard` binary, and any GUI is a thin
//! rendering layer over the same core.
//!
//! ## Architecture
//!
//! - **Timeline**: a pure layout engine. Given spans and point items, a zoom
//!   level, a navigation offset and a reference date, it resolves the visible
//!   window and produces Gantt rows (day/week) or packed week lanes plus day
//!   stacks (month/quarter)
//! - **Translate**: derives spans and points from project records and attaches
//!   their colors
//! - **Snapshot**: JSON input files combining items and project records
//! - **Config**: TOML-based preferences
//!
//! ## Key Components
//!
//! - [`layout`]: the full pipeline
//! - [`resolve_window`]: visible dates per zoom level
//! - [`pack_week`]: greedy lane packing for one displayed week
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod snapshot;
pub mod timeline;
pub mod translate;

pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use snapshot::{Snapshot, SnapshotFile};
pub use timeline::{
    active_count, build_rows, layout, pack_week, resolve_window, resolve_window_with, stack_day, visible_points,
    visible_spans, ColorKey, InvalidSpanPolicy, Layout, LayoutBody, LayoutOptions, LayoutRow, PointItem, PointKind,
    SpanKind, TimeSpan, WeekLane, Window, Zoom,
};
pub use translate::{translate_project, Palette, ProjectRecord};
