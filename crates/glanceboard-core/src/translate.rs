//! Translation of project records into layout items.
//!
//! The dashboard stores richer project records; the layout engine only sees
//! [`TimeSpan`]s and [`PointItem`]s. Colors are attached here, once, from the
//! project itself (explicit color or a hash of its id) so that reordering the
//! project list never shifts colors between projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timeline::{ColorKey, PointItem, PointKind, SpanKind, TimeSpan};

/// Inclusive date range on a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A dated entry such as a sub-event or milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedEntry {
    pub title: String,
    pub date: NaiveDate,
    /// Last day for multi-day sub-events
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// A workback task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub title: String,
    pub due: NaiveDate,
    #[serde(default)]
    pub priority: bool,
}

/// Project record as the dashboard keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub engagement: Option<DateRange>,
    #[serde(default)]
    pub event: Option<DateRange>,
    #[serde(default)]
    pub sub_events: Vec<DatedEntry>,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
    #[serde(default)]
    pub milestones: Vec<DatedEntry>,
}

/// Fixed color palette for projects without an explicit color.
pub struct Palette;

impl Palette {
    pub const TOKENS: [&'static str; 10] = [
        "indigo", "teal", "amber", "rose", "emerald", "sky", "violet", "orange", "lime", "slate",
    ];

    /// Palette token for an owner, stable across runs and list orderings.
    pub fn color_for(owner_id: &str) -> ColorKey {
        let index = (fnv1a(owner_id.as_bytes()) % Self::TOKENS.len() as u64) as usize;
        ColorKey::new(Self::TOKENS[index])
    }
}

// FNV-1a, 64-bit. std's hasher is not stable across releases.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes.iter().fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

/// Spans and points derived from one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translated {
    pub spans: Vec<TimeSpan>,
    pub points: Vec<PointItem>,
}

/// Derive layout items from a project record.
///
/// # Errors
/// Returns [`ValidationError::InvalidDateRange`] if any range on the record
/// ends before it starts.
pub fn translate_project(project: &ProjectRecord) -> Result<Translated, ValidationError> {
    let color = project
        .color
        .as_deref()
        .map(ColorKey::new)
        .unwrap_or_else(|| Palette::color_for(&project.id));
    let mut out = Translated::default();

    let ranged = [
        (project.engagement, SpanKind::Engagement, "engagement"),
        (project.event, SpanKind::Event, "event"),
    ];
    for (range, kind, role) in ranged {
        if let Some(range) = range {
            let span = TimeSpan::try_new(
                format!("{}:{role}", project.id),
                project.name.clone(),
                kind,
                range.start,
                range.end,
                project.id.clone(),
            )?;
            out.spans.push(span.with_color(color.clone()));
        }
    }

    // one-day sub-events stack in their day cell; longer ones are lane spans
    for (n, sub) in project.sub_events.iter().enumerate() {
        let id = format!("{}:sub:{n}", project.id);
        match sub.end.filter(|&end| end != sub.date) {
            Some(end) => {
                let span = TimeSpan::try_new(id, sub.title.clone(), SpanKind::SubEvent, sub.date, end, project.id.clone())?;
                out.spans.push(span.with_color(color.clone()));
            }
            None => out.points.push(
                PointItem::new(id, sub.title.clone(), PointKind::SubEvent, sub.date, project.id.clone())
                    .with_color(color.clone()),
            ),
        }
    }

    for (n, task) in project.tasks.iter().enumerate() {
        out.points.push(
            PointItem::new(
                format!("{}:task:{n}", project.id),
                task.title.clone(),
                PointKind::Task,
                task.due,
                project.id.clone(),
            )
            .with_color(color.clone())
            .with_highlight(task.priority),
        );
    }

    for (n, milestone) in project.milestones.iter().enumerate() {
        out.points.push(
            PointItem::new(
                format!("{}:milestone:{n}", project.id),
                milestone.title.clone(),
                PointKind::Milestone,
                milestone.date,
                project.id.clone(),
            )
            .with_color(color.clone())
            .with_highlight(true),
        );
    }

    Ok(out)
}
