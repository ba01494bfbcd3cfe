//! Errors raised while building a timeline layout.

use thiserror::Error;

/// Error type for tick generation and placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// No events were supplied, so there is no date range to cover.
    #[error("cannot build a timeline from an empty event list (no minimum or maximum date)")]
    EmptyTimeline,

    /// An event's month has no tick. Indicates a defect in range computation.
    #[error("no tick matches {year}-{month:02}")]
    NoMatchingTick { year: i32, month: u32 },

    /// Extending the range by a month left chrono's supported date range.
    #[error("date range extends past the supported calendar range")]
    DateOutOfRange,
}
