//! Vertical timeline rendering.
//!
//! This module provides:
//! - [`TimelineWidget`] - Widget drawing the axis, month ticks and event cards
//! - [`AxisGeometry`], [`Card`] - Positions shared by drawing and hit testing

mod geometry;
mod widget;

pub use geometry::{build_cards, card_at, content_height, AxisGeometry, Card, LABEL_WIDTH};
pub use widget::{TimelineWidget, DEFAULT_TICK_SPACING};
