//! vtline-engine: Headless logic for the vtline vertical timeline
//!
//! This crate provides everything that does not touch a terminal:
//! - Event model and JSON event files
//! - Month tick generation
//! - Event-to-tick placement
//! - Single-selection state machine
//! - Configuration

pub mod config;
pub mod error;
pub mod event;
pub mod placement;
pub mod selection;
pub mod ticks;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName};
pub use error::TimelineError;
pub use event::{load_events, parse_events, EventsError, TimelineEvent};
pub use placement::{compute_layout, find_tick, place, place_all, Layout, Placement, Side};
pub use selection::{Selection, SelectionController};
pub use ticks::{generate_ticks, month_span, tick_range, Tick, TickOrder, TickRange, MONTH_BUFFER};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
