//! Text utilities for card content.
//!
//! - [`truncate_to_width`] - Unicode-aware truncation for titles
//! - [`wrap_text`] - Word wrapping for descriptions

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::wrap_text;
