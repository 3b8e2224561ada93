//! Gantt-mode row building for day and week zooms.
//!
//! Rows are a priority-ordered list read top to bottom: every row gets its own
//! lane even when its columns do not collide with another row. Interval
//! packing here would reorder what users read, so none is attempted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::{PointItem, PointKind, SpanKind, TimeSpan};

/// Display class of a Gantt row, ordered from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    Engagement,
    Event,
    SubEvent,
    HighlightedPoint,
    Point,
}

impl RowKind {
    /// Priority class doubled to stay integral: 0, 1, 1.5, 2, 3 become 0, 2, 3, 4, 6.
    pub fn priority_rank(&self) -> u8 {
        match self {
            Self::Engagement => 0,
            Self::Event => 2,
            Self::SubEvent => 3,
            Self::HighlightedPoint => 4,
            Self::Point => 6,
        }
    }

    pub fn for_span(kind: SpanKind) -> Self {
        match kind {
            SpanKind::Engagement => Self::Engagement,
            SpanKind::Event => Self::Event,
            SpanKind::SubEvent => Self::SubEvent,
        }
    }

    pub fn for_point(point: &PointItem) -> Self {
        if point.kind == PointKind::SubEvent {
            Self::SubEvent
        } else if point.is_highlighted {
            Self::HighlightedPoint
        } else {
            Self::Point
        }
    }
}

/// The entity a row was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "camelCase")]
pub enum RowItem {
    Span(TimeSpan),
    Point(PointItem),
}

impl RowItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Span(s) => &s.id,
            Self::Point(p) => &p.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Span(s) => &s.label,
            Self::Point(p) => &p.label,
        }
    }

    pub fn owner_id(&self) -> &str {
        match self {
            Self::Span(s) => &s.owner_id,
            Self::Point(p) => &p.owner_id,
        }
    }
}

/// A positioned Gantt row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    pub item: RowItem,
    /// Column of the first visible day
    pub start_col: usize,
    /// Number of visible columns covered, at least 1
    pub col_span: usize,
    /// Vertical position; equal to the row's index in the output
    pub lane_index: usize,
    pub kind: RowKind,
}

impl LayoutRow {
    /// Identifier the host routes a click to.
    pub fn owner_id(&self) -> &str {
        self.item.owner_id()
    }
}

/// Build Gantt rows for the consecutive dates in `days`.
///
/// The result is in final display order; consumers must not re-sort it.
pub fn build_rows(spans: &[TimeSpan], points: &[PointItem], days: &[NaiveDate]) -> Vec<LayoutRow> {
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return Vec::new();
    };

    let mut rows: Vec<LayoutRow> = Vec::new();

    for span in spans.iter().filter(|s| s.overlaps(first, last)) {
        let clip_start = span.start.max(first);
        let clip_end = span.end.min(last);
        rows.push(LayoutRow {
            item: RowItem::Span(span.clone()),
            start_col: column_of(first, clip_start),
            col_span: column_of(clip_start, clip_end) + 1,
            lane_index: 0,
            kind: RowKind::for_span(span.kind),
        });
    }

    for point in points.iter().filter(|p| p.falls_within(first, last)) {
        rows.push(LayoutRow {
            item: RowItem::Point(point.clone()),
            start_col: column_of(first, point.date),
            col_span: 1,
            lane_index: 0,
            kind: RowKind::for_point(point),
        });
    }

    // sort_by_key is stable: equal classes keep input order
    rows.sort_by_key(|r| r.kind.priority_rank());
    for (lane, row) in rows.iter_mut().enumerate() {
        row.lane_index = lane;
    }

    tracing::trace!(rows = rows.len(), %first, %last, "built gantt rows");
    rows
}

fn column_of(origin: NaiveDate, date: NaiveDate) -> usize {
    usize::try_from((date - origin).num_days()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::item::PointKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn week_of(start: NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take(7).collect()
    }

    fn span(id: &str, kind: SpanKind, start: NaiveDate, end: NaiveDate) -> TimeSpan {
        TimeSpan::try_new(id, id, kind, start, end, format!("owner-{id}")).unwrap()
    }

    #[test]
    fn test_span_is_clipped_to_window() {
        let days = week_of(d(2026, 3, 23));
        let spans = vec![span("long", SpanKind::Engagement, d(2026, 3, 1), d(2026, 3, 25))];
        let rows = build_rows(&spans, &[], &days);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_col, 0);
        assert_eq!(rows[0].col_span, 3);

        let tail = vec![span("tail", SpanKind::Event, d(2026, 3, 28), d(2026, 4, 9))];
        let rows = build_rows(&tail, &[], &days);
        assert_eq!(rows[0].start_col, 5);
        assert_eq!(rows[0].col_span, 2);
    }

    #[test]
    fn test_rows_follow_priority_classes() {
        let days = week_of(d(2026, 3, 23));
        let spans = vec![
            span("sub", SpanKind::SubEvent, d(2026, 3, 24), d(2026, 3, 24)),
            span("event", SpanKind::Event, d(2026, 3, 25), d(2026, 3, 26)),
            span("eng", SpanKind::Engagement, d(2026, 3, 20), d(2026, 3, 30)),
        ];
        let points = vec![
            PointItem::new("plain", "plain", PointKind::Task, d(2026, 3, 23), "p1"),
            PointItem::new("hot", "hot", PointKind::Task, d(2026, 3, 27), "p1").with_highlight(true),
        ];
        let rows = build_rows(&spans, &points, &days);
        let ids: Vec<_> = rows.iter().map(|r| r.item.id()).collect();
        assert_eq!(ids, vec!["eng", "event", "sub", "hot", "plain"]);
        let lanes: Vec<_> = rows.iter().map(|r| r.lane_index).collect();
        assert_eq!(lanes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sub_event_point_ranks_between_events_and_highlights() {
        let days = week_of(d(2026, 3, 23));
        let spans = vec![span("event", SpanKind::Event, d(2026, 3, 25), d(2026, 3, 26))];
        let points = vec![
            PointItem::new("hot", "hot", PointKind::Milestone, d(2026, 3, 27), "p1").with_highlight(true),
            PointItem::new("load-in", "load-in", PointKind::SubEvent, d(2026, 3, 24), "p1"),
        ];
        let rows = build_rows(&spans, &points, &days);
        let ids: Vec<_> = rows.iter().map(|r| r.item.id()).collect();
        assert_eq!(ids, vec!["event", "load-in", "hot"]);
        assert_eq!(rows[1].kind, RowKind::SubEvent);
    }

    #[test]
    fn test_equal_priority_keeps_input_order() {
        let days = week_of(d(2026, 3, 23));
        let spans = vec![
            span("b", SpanKind::Event, d(2026, 3, 27), d(2026, 3, 27)),
            span("a", SpanKind::Event, d(2026, 3, 23), d(2026, 3, 23)),
        ];
        let rows = build_rows(&spans, &[], &days);
        assert_eq!(rows[0].item.id(), "b");
        assert_eq!(rows[1].item.id(), "a");
    }

    #[test]
    fn test_non_overlapping_rows_still_get_their_own_lane() {
        let days = week_of(d(2026, 3, 23));
        let spans = vec![
            span("mon", SpanKind::Event, d(2026, 3, 23), d(2026, 3, 23)),
            span("sun", SpanKind::Event, d(2026, 3, 29), d(2026, 3, 29)),
        ];
        let rows = build_rows(&spans, &[], &days);
        assert_eq!(rows[1].lane_index, 1);
    }

    #[test]
    fn test_day_window_and_empty_inputs() {
        let days = vec![d(2026, 3, 24)];
        let spans = vec![span("wk", SpanKind::Engagement, d(2026, 3, 23), d(2026, 3, 29))];
        let rows = build_rows(&spans, &[], &days);
        assert_eq!((rows[0].start_col, rows[0].col_span), (0, 1));
        assert!(build_rows(&[], &[], &days).is_empty());
        assert!(build_rows(&spans, &[], &[]).is_empty());
    }

    #[test]
    fn test_row_carries_owner_for_selection() {
        let days = vec![d(2026, 3, 24)];
        let points = vec![PointItem::new("t", "t", PointKind::Task, d(2026, 3, 24), "proj-9")];
        let rows = build_rows(&[], &points, &days);
        assert_eq!(rows[0].owner_id(), "proj-9");
    }
}
