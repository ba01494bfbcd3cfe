//! Theme components for the timeline.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`GlyphSet`] - Axis and marker glyphs with ASCII fallback

mod colors;
mod glyphs;

pub use colors::Theme;
pub use glyphs::{GlyphMode, GlyphSet};
