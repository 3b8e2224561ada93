//! Grid-mode layout for month and quarter zooms.
//!
//! Each displayed week is packed on its own: spans overlapping the week are
//! assigned the lowest lane free over their clipped columns (greedy interval
//! colouring), and point items are stacked per day cell. A span crossing a
//! week boundary is packed again in the next week and may land on a
//! different lane there.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::{PointItem, SpanKind, TimeSpan};
use super::window::WeekSlots;

/// A span placed in one week of a month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLane {
    pub span: TimeSpan,
    /// First covered column, 0-6
    pub start_col: usize,
    /// Last covered column (inclusive), 0-6
    pub end_col: usize,
    pub lane_index: usize,
}

impl WeekLane {
    /// Whether two placements share at least one column.
    pub fn collides_with(&self, other: &WeekLane) -> bool {
        self.start_col <= other.end_col && self.end_col >= other.start_col
    }
}

/// Pack the spans overlapping one displayed week into lanes.
///
/// Candidates are ordered events first, then longest first; ties keep input
/// order. Lanes sharing an index never share a column.
pub fn pack_week(spans: &[TimeSpan], week: &WeekSlots) -> Vec<WeekLane> {
    let real: Vec<(usize, NaiveDate)> = week
        .iter()
        .enumerate()
        .filter_map(|(col, slot)| slot.map(|date| (col, date)))
        .collect();
    let (Some(&(first_col, week_start)), Some(&(last_col, week_end))) = (real.first(), real.last()) else {
        return Vec::new();
    };

    let mut candidates: Vec<&TimeSpan> = spans.iter().filter(|s| s.overlaps(week_start, week_end)).collect();
    candidates.sort_by_key(|s| (s.kind != SpanKind::Event, std::cmp::Reverse(s.duration_days())));

    let mut placed: Vec<WeekLane> = Vec::with_capacity(candidates.len());
    for span in candidates {
        let start_col = if span.start <= week_start {
            first_col
        } else {
            first_col + column_offset(week_start, span.start)
        };
        let end_col = if span.end >= week_end {
            last_col
        } else {
            first_col + column_offset(week_start, span.end)
        };

        let mut lane = WeekLane {
            span: span.clone(),
            start_col,
            end_col,
            lane_index: 0,
        };
        lane.lane_index = lowest_free_lane(&placed, &lane);
        placed.push(lane);
    }

    tracing::trace!(%week_start, %week_end, lanes = lane_count(&placed), spans = placed.len(), "packed week");
    placed
}

/// Number of lanes used by one week's placements.
pub fn lane_count(lanes: &[WeekLane]) -> usize {
    lanes.iter().map(|l| l.lane_index + 1).max().unwrap_or(0)
}

/// Points due on `date`, highlighted first, otherwise in input order.
pub fn stack_day(points: &[PointItem], date: NaiveDate) -> Vec<PointItem> {
    let mut stack: Vec<PointItem> = points.iter().filter(|p| p.date == date).cloned().collect();
    stack.sort_by_key(|p| !p.is_highlighted);
    stack
}

fn column_offset(origin: NaiveDate, date: NaiveDate) -> usize {
    usize::try_from((date - origin).num_days()).unwrap_or(0)
}

fn lowest_free_lane(placed: &[WeekLane], candidate: &WeekLane) -> usize {
    let mut lane = 0;
    while placed
        .iter()
        .any(|p| p.lane_index == lane && p.collides_with(candidate))
    {
        lane += 1;
    }
    lane
}
