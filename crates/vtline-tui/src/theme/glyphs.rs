//! Glyph sets for Unicode and ASCII fallback.
//!
//! ASCII mode is used when configured or when `NO_COLOR` is set.

/// Glyph mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Box drawing and geometric shapes.
    #[default]
    Unicode,
    /// ASCII-only fallback.
    Ascii,
}

impl GlyphMode {
    /// Pick a mode from the config flag, respecting `NO_COLOR`.
    pub fn from_env(ascii: bool) -> Self {
        if ascii || std::env::var_os("NO_COLOR").is_some() {
            GlyphMode::Ascii
        } else {
            GlyphMode::Unicode
        }
    }
}

/// Glyphs used to draw the timeline.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    mode: GlyphMode,
}

impl GlyphSet {
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Vertical axis segment.
    pub fn axis(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "\u{2502}", // │
            GlyphMode::Ascii => "|",
        }
    }

    /// Dot where a month tick meets the axis.
    pub fn tick_dot(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "\u{25cf}", // ●
            GlyphMode::Ascii => "o",
        }
    }

    /// Card marker while the description is hidden.
    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "\u{25b8}", // ▸
            GlyphMode::Ascii => ">",
        }
    }

    /// Card marker while the description is shown.
    pub fn expanded(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "\u{25be}", // ▾
            GlyphMode::Ascii => "v",
        }
    }
}
