//! Month tick generation.
//!
//! Ticks cover the events' date range padded by [`MONTH_BUFFER`] months on
//! each side. All stepping goes through chrono's calendar-aware [`Months`]
//! arithmetic on first-of-month dates, so month lengths and year rollovers
//! never drift.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimelineError;
use crate::event::TimelineEvent;

/// Months of padding added before the earliest and after the latest event.
pub const MONTH_BUFFER: u32 = 1;

/// Direction in which ticks are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOrder {
    /// Oldest month first.
    Ascending,
    /// Newest month first.
    #[default]
    Descending,
}

/// One calendar month on the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick {
    /// First day of the month.
    first_day: NaiveDate,
}

impl Tick {
    /// Tick for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// Tick for the given year and month (1-12).
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// Month number, 1-12.
    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    /// First day of this month.
    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// Short label, e.g. `Jan 2024`.
    pub fn label(self) -> String {
        self.first_day.format("%b %Y").to_string()
    }

    /// Whether `date` falls in this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.year() == date.year() && self.month() == date.month()
    }

    /// The tick `months` later, or `None` past chrono's range.
    pub fn checked_add(self, months: u32) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(months))
            .map(|first_day| Self { first_day })
    }

    /// The tick `months` earlier, or `None` past chrono's range.
    pub fn checked_sub(self, months: u32) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(months))
            .map(|first_day| Self { first_day })
    }

    /// The following month.
    pub fn next(self) -> Option<Self> {
        self.checked_add(1)
    }

    /// The preceding month.
    pub fn prev(self) -> Option<Self> {
        self.checked_sub(1)
    }

    /// Absolute month number, used for distance calculations.
    fn ordinal(self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.first_day.month0())
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%b %Y"))
    }
}

/// Inclusive number of months between two ticks, in either order.
pub fn month_span(a: Tick, b: Tick) -> usize {
    let distance = (b.ordinal() - a.ordinal()).unsigned_abs();
    usize::try_from(distance).map_or(usize::MAX, |d| d.saturating_add(1))
}

/// Padded month range covering a set of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRange {
    /// Earliest month (one buffer month before the earliest event).
    pub start: Tick,
    /// Latest month (one buffer month after the latest event).
    pub end: Tick,
}

impl TickRange {
    /// Number of ticks in the range, both ends included.
    pub fn month_count(&self) -> usize {
        month_span(self.start, self.end)
    }
}

/// Compute the padded month range for `events`.
pub fn tick_range(events: &[TimelineEvent]) -> Result<TickRange, TimelineError> {
    let min = events
        .iter()
        .map(|e| e.date)
        .min()
        .ok_or(TimelineError::EmptyTimeline)?;
    let max = events
        .iter()
        .map(|e| e.date)
        .max()
        .ok_or(TimelineError::EmptyTimeline)?;

    let start = Tick::from_date(min)
        .checked_sub(MONTH_BUFFER)
        .ok_or(TimelineError::DateOutOfRange)?;
    let end = Tick::from_date(max)
        .checked_add(MONTH_BUFFER)
        .ok_or(TimelineError::DateOutOfRange)?;

    Ok(TickRange { start, end })
}

/// Generate one tick per month across the padded event range.
///
/// Descending order starts at the latest month. The walk takes exactly
/// [`TickRange::month_count`] steps.
pub fn generate_ticks(
    events: &[TimelineEvent],
    order: TickOrder,
) -> Result<Vec<Tick>, TimelineError> {
    let range = tick_range(events)?;
    let count = range.month_count();

    let (mut current, step): (Tick, fn(Tick) -> Option<Tick>) = match order {
        TickOrder::Ascending => (range.start, Tick::next),
        TickOrder::Descending => (range.end, Tick::prev),
    };

    let mut ticks = Vec::with_capacity(count);
    ticks.push(current);
    for _ in 1..count {
        current = step(current).ok_or(TimelineError::DateOutOfRange)?;
        ticks.push(current);
    }

    Ok(ticks)
}
