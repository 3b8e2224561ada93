//! Snapshot input for a layout request.
//!
//! A snapshot file is JSON holding ready-made `spans`/`points`, project
//! records to translate, or both:
//!
//! ```json
//! {
//!   "spans":    [{ "id": "s1", "label": "Tour", "colorKey": "teal", "start": "2026-03-01",
//!                  "end": "2026-03-09", "kind": "engagement", "ownerId": "p1" }],
//!   "points":   [],
//!   "projects": [{ "id": "p2", "name": "Gala", "event": { "start": "2026-03-26", "end": "2026-03-27" } }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::timeline::{PointItem, TimeSpan};
use crate::translate::{translate_project, ProjectRecord};

/// Entities handed to the layout engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub spans: Vec<TimeSpan>,
    #[serde(default)]
    pub points: Vec<PointItem>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty() && self.points.is_empty()
    }

    /// Read and translate a snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or a
    /// project record carries an inverted date range.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and translate snapshot JSON.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or an invalid project record.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        file.into_snapshot()
    }
}

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub spans: Vec<TimeSpan>,
    #[serde(default)]
    pub points: Vec<PointItem>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl SnapshotFile {
    /// Ready-made items first, then translated projects in file order.
    ///
    /// # Errors
    /// Returns a validation error if a project record is malformed.
    pub fn into_snapshot(self) -> Result<Snapshot> {
        let mut snapshot = Snapshot {
            spans: self.spans,
            points: self.points,
        };
        for project in &self.projects {
            let translated = translate_project(project)?;
            snapshot.spans.extend(translated.spans);
            snapshot.points.extend(translated.points);
        }
        tracing::debug!(
            spans = snapshot.spans.len(),
            points = snapshot.points.len(),
            projects = self.projects.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}
