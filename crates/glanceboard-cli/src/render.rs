//! Plain-text rendering of a layout for terminal use.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use glanceboard_core::timeline::{lane_count, PeriodLayout, RowKind, WeekLayout};
use glanceboard_core::{Layout, LayoutBody, LayoutRow};

const CELL: usize = 6;

pub fn render_text(layout: &Layout, label_width: usize) -> String {
    let mut out = String::new();
    match &layout.body {
        LayoutBody::Gantt { rows } => render_gantt(&mut out, &layout.window.days, rows, label_width),
        LayoutBody::Grid { periods } => {
            for period in periods {
                render_period(&mut out, period);
            }
        }
    }
    let _ = writeln!(out, "active: {}", layout.active_count);
    out
}

fn render_gantt(out: &mut String, days: &[NaiveDate], rows: &[LayoutRow], label_width: usize) {
    let _ = write!(out, "{:width$} ", "", width = label_width);
    for day in days {
        let _ = write!(out, "{:<width$}", day.format("%a %d").to_string(), width = CELL);
    }
    out.push('\n');

    for row in rows {
        let _ = write!(out, "{:width$} ", truncate(row.item.label(), label_width), width = label_width);
        let mark = match row.kind {
            RowKind::Engagement => '=',
            RowKind::Event => '#',
            RowKind::SubEvent => '+',
            RowKind::HighlightedPoint => '!',
            RowKind::Point => '*',
        };
        for col in 0..days.len() {
            let covered = col >= row.start_col && col < row.start_col + row.col_span;
            let cell: String = if covered {
                std::iter::repeat(mark).take(CELL - 1).collect()
            } else {
                " ".repeat(CELL - 1)
            };
            let _ = write!(out, "{cell} ");
        }
        out.push('\n');
    }
}

fn render_period(out: &mut String, period: &PeriodLayout) {
    let _ = writeln!(out, "{}", period.month_anchor.format("%B %Y"));
    for week in &period.weeks {
        render_week(out, week);
    }
    out.push('\n');
}

fn render_week(out: &mut String, week: &WeekLayout) {
    for slot in &week.slots {
        match slot {
            Some(date) => {
                let _ = write!(out, "{:>3}   ", date.day());
            }
            None => out.push_str(&" ".repeat(CELL)),
        }
    }
    out.push('\n');

    for lane in 0..lane_count(&week.lanes) {
        let mut line = vec![' '; CELL * 7];
        for placed in week.lanes.iter().filter(|l| l.lane_index == lane) {
            let from = placed.start_col * CELL;
            let to = (placed.end_col + 1) * CELL - 1;
            let label: Vec<char> = placed.span.label.chars().collect();
            line[from] = '[';
            for (i, cell) in line[from + 1..to - 1].iter_mut().enumerate() {
                *cell = label.get(i).copied().unwrap_or('-');
            }
            line[to - 1] = ']';
        }
        let _ = writeln!(out, "{}", line.into_iter().collect::<String>().trim_end());
    }

    for stack in week.days.iter().filter(|s| !s.items.is_empty()) {
        for item in &stack.items {
            let mark = if item.is_highlighted { '!' } else { '*' };
            let _ = writeln!(out, "  {} {mark} {}", stack.date.format("%m-%d"), item.label);
        }
    }
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        label.to_string()
    } else {
        let mut cut: String = label.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
