//! Interactive timeline viewer state.
//!
//! Owns the selection (the only state the timeline mutates), a keyboard
//! focus cursor, and the vertical scroll position.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use vtline_engine::{
    compute_layout, Config, Layout, Selection, SelectionController, TickOrder, TimelineEvent,
};

use crate::theme::{GlyphSet, Theme};
use crate::timeline::{build_cards, card_at, content_height, AxisGeometry, Card, TimelineWidget};

/// Rows scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// State for the interactive viewer.
#[derive(Debug)]
pub struct ViewerState {
    events: Vec<TimelineEvent>,
    selection: Selection,
    /// Event the keyboard cursor is on.
    focused: Option<usize>,
    /// First layout row shown.
    scroll: usize,
    order: TickOrder,
    tick_spacing: usize,
    /// Inner area of the last render, used for hit testing.
    viewport: Rect,
    should_quit: bool,
}

impl ViewerState {
    /// Create viewer state for `events` using the layout settings in `config`.
    pub fn new(events: Vec<TimelineEvent>, config: &Config) -> Self {
        Self {
            events,
            selection: Selection::default(),
            focused: None,
            scroll: 0,
            order: config.order,
            tick_spacing: config.spacing().max(1),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record the full drawing area; the viewer always renders with a border.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = TimelineWidget::inner_area(area, true);
        self.clamp_scroll();
    }

    /// Build the widget for the current state.
    pub fn widget<'a>(&'a self, theme: &'a Theme, glyphs: &'a GlyphSet) -> TimelineWidget<'a> {
        TimelineWidget::new(&self.events, theme, glyphs)
            .selection(self.selection)
            .focused(self.focused)
            .scroll(self.scroll)
            .order(self.order)
            .tick_spacing(self.tick_spacing)
            .active(true)
    }

    fn layout(&self) -> Option<Layout> {
        if self.events.is_empty() {
            return None;
        }
        compute_layout(&self.events, self.order, self.tick_spacing).ok()
    }

    /// Cards as the widget draws them for the current viewport.
    fn cards(&self) -> Option<(Layout, Vec<Card>)> {
        let layout = self.layout()?;
        let geometry = AxisGeometry::new(self.viewport);
        let cards = build_cards(&geometry, &layout, &self.events, self.selection);
        Some((layout, cards))
    }

    /// Event indices sorted top to bottom as drawn.
    fn visual_order(&self) -> Vec<usize> {
        let Some((_, mut cards)) = self.cards() else {
            return Vec::new();
        };
        cards.sort_by_key(|card| (card.row, card.event_index));
        cards.into_iter().map(|card| card.event_index).collect()
    }

    fn max_scroll(&self) -> usize {
        self.cards().map_or(0, |(layout, cards)| {
            content_height(&layout, &cards).saturating_sub(usize::from(self.viewport.height))
        })
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Move focus to the next card down the screen. Stops at the last card.
    pub fn focus_next(&mut self) {
        let order = self.visual_order();
        let next = match self.focused.and_then(|f| order.iter().position(|&i| i == f)) {
            Some(pos) => order.get(pos + 1).or_else(|| order.last()),
            None => order.first(),
        };
        self.focused = next.copied();
        self.ensure_focus_visible();
    }

    /// Move focus to the previous card up the screen. Stops at the first card.
    pub fn focus_prev(&mut self) {
        let order = self.visual_order();
        let prev = match self.focused.and_then(|f| order.iter().position(|&i| i == f)) {
            Some(pos) => order.get(pos.saturating_sub(1)),
            None => order.last(),
        };
        self.focused = prev.copied();
        self.ensure_focus_visible();
    }

    /// Toggle the focused event.
    pub fn activate_focused(&mut self) {
        if let Some(index) = self.focused {
            self.activate(index);
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    pub fn jump_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Scroll just enough to show the focused card's title row.
    pub fn ensure_focus_visible(&mut self) {
        let Some(focused) = self.focused else {
            return;
        };
        let Some(row) = self.cards().and_then(|(_, cards)| {
            cards
                .iter()
                .find(|card| card.event_index == focused)
                .map(|card| card.row)
        }) else {
            return;
        };

        let height = usize::from(self.viewport.height);
        if height == 0 {
            return;
        }
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let page = usize::from(self.viewport.height).max(1);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.focus_next(),
            KeyCode::Up | KeyCode::Char('k') => self.focus_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::PageDown => self.scroll_down(page),
            KeyCode::PageUp => self.scroll_up(page),
            KeyCode::Char('g') | KeyCode::Home => self.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.jump_to_bottom(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle mouse input: left click toggles a card, the wheel scrolls.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.card_at(mouse.column, mouse.row) {
                    self.focused = Some(index);
                    self.activate(index);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(SCROLL_SPEED),
            MouseEventKind::ScrollDown => self.scroll_down(SCROLL_SPEED),
            _ => {}
        }
    }

    /// Event index of the card drawn at a screen position.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let (_, cards) = self.cards()?;
        card_at(
            &cards,
            &AxisGeometry::new(self.viewport),
            self.scroll,
            column,
            row,
        )
    }
}

impl SelectionController for ViewerState {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn activate(&mut self, index: usize) {
        if index < self.events.len() {
            self.selection.toggle(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_events;
    use crossterm::event::KeyModifiers;

    fn viewer(width: u16, height: u16) -> ViewerState {
        let config = Config {
            tick_spacing: 2,
            ..Config::default()
        };
        let mut state = ViewerState::new(sample_events(), &config);
        state.set_viewport(Rect::new(0, 0, width, height));
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_viewer_is_unselected() {
        let state = viewer(42, 12);
        assert_eq!(state.selection(), Selection::Unselected);
        assert_eq!(state.focused(), None);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_focus_follows_screen_order() {
        // Descending: Beta (index 1) is drawn above Launch (index 0).
        let mut state = viewer(42, 12);
        state.handle_key_event(key(KeyCode::Down));
        assert_eq!(state.focused(), Some(1));
        state.handle_key_event(key(KeyCode::Char('j')));
        assert_eq!(state.focused(), Some(0));
        // Stops at the bottom.
        state.handle_key_event(key(KeyCode::Down));
        assert_eq!(state.focused(), Some(0));
        state.handle_key_event(key(KeyCode::Up));
        assert_eq!(state.focused(), Some(1));
        state.handle_key_event(key(KeyCode::Char('k')));
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn test_enter_toggles_focused() {
        let mut state = viewer(42, 12);
        state.handle_key_event(key(KeyCode::Down));
        state.handle_key_event(key(KeyCode::Enter));
        assert_eq!(state.selection(), Selection::Selected(1));
        state.handle_key_event(key(KeyCode::Char(' ')));
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_enter_without_focus_is_noop() {
        let mut state = viewer(42, 12);
        state.handle_key_event(key(KeyCode::Enter));
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_selecting_other_event_replaces_selection() {
        let mut state = viewer(42, 12);
        state.activate(0);
        state.activate(1);
        assert_eq!(state.selection(), Selection::Selected(1));
    }

    #[test]
    fn test_activate_out_of_range_ignored() {
        let mut state = viewer(42, 12);
        state.activate(7);
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_mouse_click_toggles_card() {
        // Area 42x12 with border: inner is (1, 1, 40, 10), same geometry as
        // the 40-column snapshots shifted by one cell.
        let mut state = viewer(42, 12);
        // Launch title row: layout row 6 -> screen row 7, right card from column 23.
        state.handle_mouse_event(click(25, 7));
        assert_eq!(state.selection(), Selection::Selected(0));
        assert_eq!(state.focused(), Some(0));

        state.handle_mouse_event(click(25, 7));
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_mouse_click_on_axis_does_nothing() {
        let mut state = viewer(42, 12);
        state.handle_mouse_event(click(21, 7));
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_scroll_is_clamped() {
        // Inner height 4, layout height 10 -> max scroll 6.
        let mut state = viewer(42, 6);
        state.scroll_down(100);
        assert_eq!(state.scroll(), 6);
        state.scroll_up(2);
        assert_eq!(state.scroll(), 4);
        state.handle_key_event(key(KeyCode::Char('g')));
        assert_eq!(state.scroll(), 0);
        state.handle_key_event(key(KeyCode::Char('G')));
        assert_eq!(state.scroll(), 6);
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut state = viewer(42, 6);
        state.handle_key_event(key(KeyCode::Down)); // Beta at row 2
        assert_eq!(state.scroll(), 0);
        state.handle_key_event(key(KeyCode::Down)); // Launch at row 6
        assert_eq!(state.scroll(), 3);
    }

    #[test]
    fn test_click_on_description_hits_expanded_card() {
        let date = |m, d| chrono::NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        let events = vec![
            TimelineEvent::new("Alpha", "Secret launch plan notes", date(1, 5)),
            TimelineEvent::new("Bravo", "", date(2, 5)),
            TimelineEvent::new("Charlie", "", date(1, 20)),
        ];
        let mut state = ViewerState::new(events, &Config::default());
        state.set_viewport(Rect::new(0, 0, 42, 22));
        state.activate(0);

        // Inner area starts at (1, 1); Alpha's description spans layout rows 9..13.
        state.handle_mouse_event(click(26, 11));
        assert_eq!(state.selection(), Selection::Unselected);

        state.activate(0);
        // Charlie was pushed below the description and sorts after Alpha.
        assert_eq!(state.card_at(26, 14), Some(2));
        assert_eq!(state.visual_order(), vec![1, 0, 2]);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut state = viewer(42, 6);
        state.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(state.scroll(), SCROLL_SPEED);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = viewer(42, 12);
        state.handle_key_event(key(KeyCode::Char('q')));
        assert!(state.should_quit());

        let mut state = viewer(42, 12);
        state.handle_key_event(key(KeyCode::Esc));
        assert!(state.should_quit());
    }

    #[test]
    fn test_empty_viewer_handles_input() {
        let mut state = ViewerState::new(Vec::new(), &Config::default());
        state.set_viewport(Rect::new(0, 0, 40, 10));
        state.handle_key_event(key(KeyCode::Down));
        state.handle_key_event(key(KeyCode::Enter));
        state.handle_mouse_event(click(5, 5));
        assert_eq!(state.focused(), None);
        assert_eq!(state.selection(), Selection::Unselected);
        assert_eq!(state.scroll(), 0);
    }
}
