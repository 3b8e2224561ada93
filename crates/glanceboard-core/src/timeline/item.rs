//! Time-ranged and point-in-time items consumed by the layout engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Opaque display token attached by the host when it builds items.
///
/// The engine never interprets it; it is carried through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(String);

impl ColorKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a time span. Drives ordering, never filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanKind {
    Engagement,
    Event,
    SubEvent,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Event => "event",
            Self::SubEvent => "subEvent",
        }
    }
}

/// Kind of a single-day item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointKind {
    Task,
    /// One-day sub-event of a project
    SubEvent,
    Milestone,
}

impl PointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::SubEvent => "subEvent",
            Self::Milestone => "milestone",
        }
    }
}

/// A time-ranged item with inclusive start and end dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    pub id: String,
    pub label: String,
    pub color_key: ColorKey,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: SpanKind,
    /// Owning project. Lookup only; carried through for selection.
    pub owner_id: String,
}

impl TimeSpan {
    /// Create a new span, rejecting `end < start`.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidDateRange`] if `end` precedes `start`.
    pub fn try_new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: SpanKind,
        start: NaiveDate,
        end: NaiveDate,
        owner_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if end < start {
            return Err(ValidationError::InvalidDateRange { id, start, end });
        }
        Ok(Self {
            id,
            label: label.into(),
            color_key: ColorKey::new("default"),
            start,
            end,
            kind,
            owner_id: owner_id.into(),
        })
    }

    /// Set the color token
    pub fn with_color(mut self, color_key: ColorKey) -> Self {
        self.color_key = color_key;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Length in days, `end - start`. A one-day span has duration 0.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Standard inclusive interval overlap test.
    pub fn overlaps(&self, window_start: NaiveDate, window_end: NaiveDate) -> bool {
        self.start <= window_end && self.end >= window_start
    }
}

/// A single-day item (workback task, milestone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointItem {
    pub id: String,
    pub label: String,
    pub color_key: ColorKey,
    pub date: NaiveDate,
    pub kind: PointKind,
    #[serde(default)]
    pub is_highlighted: bool,
    pub owner_id: String,
}

impl PointItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: PointKind,
        date: NaiveDate,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color_key: ColorKey::new("default"),
            date,
            kind,
            is_highlighted: false,
            owner_id: owner_id.into(),
        }
    }

    /// Set the color token
    pub fn with_color(mut self, color_key: ColorKey) -> Self {
        self.color_key = color_key;
        self
    }

    /// Mark as highlighted
    pub fn with_highlight(mut self, highlighted: bool) -> Self {
        self.is_highlighted = highlighted;
        self
    }

    pub fn falls_within(&self, window_start: NaiveDate, window_end: NaiveDate) -> bool {
        window_start <= self.date && self.date <= window_end
    }
}
