//! vtline-tui: Terminal rendering for the vtline vertical timeline
//!
//! This crate provides the presentation layer:
//! - [`TimelineWidget`] - ratatui widget for the axis, ticks and cards
//! - [`ViewerState`] - Selection, focus and scroll for interactive use
//! - [`run_viewer`] - Full-screen viewer with keyboard and mouse input

pub mod text;
pub mod theme;
pub mod timeline;
mod viewer;

#[cfg(test)]
pub mod test_utils;

pub use theme::{GlyphMode, GlyphSet, Theme};
pub use timeline::TimelineWidget;
pub use viewer::{ViewerState, SCROLL_SPEED};
pub use vtline_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;
use vtline_engine::{Config, TimelineEvent};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the interactive viewer until the user quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit (including on error).
pub fn run_viewer(
    events: Vec<TimelineEvent>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::from_name(config.theme);
    let glyphs = GlyphSet::new(GlyphMode::from_env(config.ascii));
    let mut state = ViewerState::new(events, config);

    tracing::info!(
        events = state.events().len(),
        order = ?config.order,
        "Starting timeline viewer"
    );

    run_loop(&mut terminal, &mut state, &theme, &glyphs)?;

    terminal.show_cursor()?;
    Ok(())
}

/// Draw and handle input until `state` asks to quit.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut ViewerState,
    theme: &Theme,
    glyphs: &GlyphSet,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            state.set_viewport(area);
            frame.render_widget(state.widget(theme, glyphs), area);
        })?;

        // Handle events (16ms poll = ~60fps)
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => state.handle_key_event(key),
                Event::Mouse(mouse) => state.handle_mouse_event(mouse),
                _ => {}
            }
        }

        if state.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
