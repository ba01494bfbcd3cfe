//! Timeline event model and event-file loading.
//!
//! Events are owned by the caller and never mutated by the timeline. The
//! events file is a JSON array:
//!
//! ```json
//! [{ "title": "Launch", "description": "v1 shipped", "date": "2024-01-15" }]
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A dated entry on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Always-visible card heading.
    pub title: String,

    /// Shown only while the event is selected.
    #[serde(default)]
    pub description: String,

    /// Calendar date of the event (day resolution).
    pub date: NaiveDate,
}

impl TimelineEvent {
    /// Create a new event.
    pub fn new(title: impl Into<String>, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// Errors that can occur when loading an events file.
#[derive(Debug, Error)]
pub enum EventsError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of events.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load events from a JSON file, preserving file order.
pub fn load_events(path: &Path) -> Result<Vec<TimelineEvent>, EventsError> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content)
}

/// Parse events from a JSON string.
pub fn parse_events(json: &str) -> Result<Vec<TimelineEvent>, EventsError> {
    let events: Vec<TimelineEvent> = serde_json::from_str(json)?;
    tracing::debug!(count = events.len(), "Parsed timeline events");
    Ok(events)
}
