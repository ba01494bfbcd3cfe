//! Event-to-tick placement.
//!
//! Each event is matched to the first tick with the same year and month. Its
//! vertical offset is `tick_index * tick_spacing`; its side alternates with
//! list position only.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::TimelineError;
use crate::event::TimelineEvent;
use crate::ticks::{generate_ticks, Tick, TickOrder};

/// Which side of the axis a card is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Side for the event at list position `index`: even on the right, odd on the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// Position of one event against the tick axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Position of the event in the caller's list.
    pub event_index: usize,
    /// Index of the matched tick in generated order.
    pub tick_index: usize,
    /// `tick_index * tick_spacing`.
    pub offset: usize,
    /// Earlier events sharing this tick and side; renderers stack by this many rows.
    pub lane: usize,
    pub side: Side,
}

impl Placement {
    /// Row at which the card starts: offset plus lane.
    pub fn row(&self) -> usize {
        self.offset + self.lane
    }
}

/// Ticks plus the placement of every event, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub ticks: Vec<Tick>,
    pub placements: Vec<Placement>,
    pub tick_spacing: usize,
}

impl Layout {
    /// Total rows covered by the tick axis.
    pub fn height(&self) -> usize {
        self.ticks.len() * self.tick_spacing
    }

    /// Row of the tick at `index`.
    pub fn tick_row(&self, index: usize) -> usize {
        index * self.tick_spacing
    }
}

/// Index of the first tick in `ticks` whose year and month match `date`.
pub fn find_tick(date: NaiveDate, ticks: &[Tick]) -> Result<usize, TimelineError> {
    ticks.iter().position(|t| t.contains(date)).ok_or_else(|| {
        error!(%date, tick_count = ticks.len(), "Event date has no matching tick");
        TimelineError::NoMatchingTick {
            year: date.year(),
            month: date.month(),
        }
    })
}

/// Place the event at list position `index` against `ticks`.
///
/// `lane` is left at zero; [`place_all`] fills it in.
pub fn place(
    event: &TimelineEvent,
    index: usize,
    ticks: &[Tick],
    tick_spacing: usize,
) -> Result<Placement, TimelineError> {
    let tick_index = find_tick(event.date, ticks)?;
    Ok(Placement {
        event_index: index,
        tick_index,
        offset: tick_index * tick_spacing,
        lane: 0,
        side: Side::for_index(index),
    })
}

/// Place every event, assigning lanes to events that share a tick and side.
pub fn place_all(
    events: &[TimelineEvent],
    ticks: &[Tick],
    tick_spacing: usize,
) -> Result<Vec<Placement>, TimelineError> {
    let mut placements: Vec<Placement> = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        let mut placement = place(event, index, ticks, tick_spacing)?;
        placement.lane = placements
            .iter()
            .filter(|p| p.tick_index == placement.tick_index && p.side == placement.side)
            .count();
        placements.push(placement);
    }
    Ok(placements)
}

/// Generate ticks for `events` and place each event against them.
pub fn compute_layout(
    events: &[TimelineEvent],
    order: TickOrder,
    tick_spacing: usize,
) -> Result<Layout, TimelineError> {
    let ticks = generate_ticks(events, order)?;
    let placements = place_all(events, &ticks, tick_spacing)?;
    debug!(
        ticks = ticks.len(),
        events = placements.len(),
        "Computed timeline layout"
    );
    Ok(Layout {
        ticks,
        placements,
        tick_spacing,
    })
}
