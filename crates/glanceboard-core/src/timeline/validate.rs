//! Boundary validation for spans entering the engine.
//!
//! Spans arriving through deserialization bypass [`TimeSpan::try_new`], so a
//! snapshot may contain `end < start`. The configured policy decides whether
//! such a span is clamped to a one-day span at `start` or rejects the request.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

use super::item::TimeSpan;
use crate::error::{ConfigError, ValidationError};
use crate::snapshot::Snapshot;

/// What to do with a span whose end precedes its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidSpanPolicy {
    /// Treat the span as zero-length at `start`.
    #[default]
    Clamp,
    /// Fail the whole request.
    Reject,
}

impl InvalidSpanPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for InvalidSpanPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::InvalidValue {
                key: "validation.invalid_span_policy".into(),
                message: format!("expected 'clamp' or 'reject', got '{other}'"),
            }),
        }
    }
}

/// Apply `policy` to every span of `snapshot`.
///
/// Borrows when nothing needs fixing, so a valid snapshot is never copied.
///
/// # Errors
/// With [`InvalidSpanPolicy::Reject`], returns the first inverted span as
/// [`ValidationError::InvalidDateRange`].
pub fn normalize(
    snapshot: &Snapshot,
    policy: InvalidSpanPolicy,
) -> Result<Cow<'_, Snapshot>, ValidationError> {
    let Some(first_bad) = snapshot.spans.iter().position(|s| !s.is_valid()) else {
        return Ok(Cow::Borrowed(snapshot));
    };

    if policy == InvalidSpanPolicy::Reject {
        let span = &snapshot.spans[first_bad];
        return Err(ValidationError::InvalidDateRange {
            id: span.id.clone(),
            start: span.start,
            end: span.end,
        });
    }

    let spans = snapshot.spans.iter().map(clamp_span).collect();
    Ok(Cow::Owned(Snapshot {
        spans,
        points: snapshot.points.clone(),
    }))
}

fn clamp_span(span: &TimeSpan) -> TimeSpan {
    if span.is_valid() {
        return span.clone();
    }
    tracing::warn!(
        span_id = %span.id,
        start = %span.start,
        end = %span.end,
        "span ends before it starts; clamping to a one-day span"
    );
    TimeSpan {
        end: span.start,
        ..span.clone()
    }
}
