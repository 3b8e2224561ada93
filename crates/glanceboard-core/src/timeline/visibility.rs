//! Visibility filtering and the "active in view" counters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::{ColorKey, PointItem, TimeSpan};

/// Spans intersecting `[window_start, window_end]`, in input order.
pub fn visible_spans(spans: &[TimeSpan], window_start: NaiveDate, window_end: NaiveDate) -> Vec<TimeSpan> {
    spans
        .iter()
        .filter(|s| s.overlaps(window_start, window_end))
        .cloned()
        .collect()
}

/// Points dated inside `[window_start, window_end]`, in input order.
pub fn visible_points(points: &[PointItem], window_start: NaiveDate, window_end: NaiveDate) -> Vec<PointItem> {
    points
        .iter()
        .filter(|p| p.falls_within(window_start, window_end))
        .cloned()
        .collect()
}

/// Number of items active in the window.
///
/// Sub-events are their own entities, so nothing is derived from a parent
/// span and nothing is counted twice.
pub fn active_count(
    spans: &[TimeSpan],
    points: &[PointItem],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> usize {
    let span_count = spans.iter().filter(|s| s.overlaps(window_start, window_end)).count();
    let point_count = points.iter().filter(|p| p.falls_within(window_start, window_end)).count();
    span_count + point_count
}

/// One owner with at least one item in view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub owner_id: String,
    /// Color of the first item seen for this owner
    pub color_key: ColorKey,
    pub item_count: usize,
}

/// Legend of owners active in the window, in first-seen order (spans before points).
pub fn active_legend(
    spans: &[TimeSpan],
    points: &[PointItem],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<LegendEntry> {
    let mut legend: Vec<LegendEntry> = Vec::new();

    let owners = spans
        .iter()
        .filter(|s| s.overlaps(window_start, window_end))
        .map(|s| (&s.owner_id, &s.color_key))
        .chain(
            points
                .iter()
                .filter(|p| p.falls_within(window_start, window_end))
                .map(|p| (&p.owner_id, &p.color_key)),
        );

    for (owner_id, color_key) in owners {
        match legend.iter_mut().find(|e| &e.owner_id == owner_id) {
            Some(entry) => entry.item_count += 1,
            None => legend.push(LegendEntry {
                owner_id: owner_id.clone(),
                color_key: color_key.clone(),
                item_count: 1,
            }),
        }
    }

    legend
}
