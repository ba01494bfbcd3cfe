//! Screen geometry for the timeline.
//!
//! Rows here are layout rows (row 0 is the first tick) unless noted. The
//! widget and mouse hit testing both go through these functions so that a
//! click always lands on the card that was drawn there.

use ratatui::layout::Rect;
use vtline_engine::{Layout, Selection, Side, TimelineEvent};

use crate::text::{truncate_to_width, wrap_text};

/// Cells reserved for a tick label (`Jan 2024`).
pub const LABEL_WIDTH: u16 = 8;

/// Blank cells between a tick label and the axis.
const LABEL_GAP: u16 = 1;

/// Blank cells between the axis or a label and the nearest card.
const CARD_GAP: u16 = 2;

/// Description indent inside a card.
const DESCRIPTION_INDENT: u16 = 2;

/// Horizontal positions derived from the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisGeometry {
    /// Area the timeline draws into (inside any border).
    pub inner: Rect,
    /// Column of the axis line.
    pub axis_x: u16,
    /// First column of tick labels.
    pub label_x: u16,
    /// Width of every card.
    pub card_width: u16,
    /// First column of left-side cards.
    pub left_x: u16,
    /// First column of right-side cards.
    pub right_x: u16,
}

impl AxisGeometry {
    pub fn new(inner: Rect) -> Self {
        let axis_x = inner.x + inner.width / 2;
        let label_x = axis_x
            .saturating_sub(LABEL_WIDTH + LABEL_GAP)
            .max(inner.x);
        let card_width = (label_x - inner.x).saturating_sub(CARD_GAP);
        Self {
            inner,
            axis_x,
            label_x,
            card_width,
            left_x: inner.x,
            right_x: axis_x + CARD_GAP,
        }
    }

    /// First column of a card on `side`.
    pub fn card_x(&self, side: Side) -> u16 {
        match side {
            Side::Left => self.left_x,
            Side::Right => self.right_x,
        }
    }

    /// Screen row for a layout row, if it is inside the viewport.
    pub fn screen_row(&self, row: usize, scroll: usize) -> Option<u16> {
        let visible = row.checked_sub(scroll)?;
        let visible = u16::try_from(visible).ok()?;
        (visible < self.inner.height).then(|| self.inner.y + visible)
    }

    /// Layout row under a screen row, if the screen row is inside the viewport.
    pub fn layout_row(&self, screen_y: u16, scroll: usize) -> Option<usize> {
        if screen_y < self.inner.y || screen_y >= self.inner.y + self.inner.height {
            return None;
        }
        Some(usize::from(screen_y - self.inner.y) + scroll)
    }
}

/// One event's card, positioned in layout rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub event_index: usize,
    pub side: Side,
    /// First column.
    pub x: u16,
    /// Layout row of the title line.
    pub row: usize,
    pub width: u16,
    /// Title, already truncated to fit after the marker.
    pub title: String,
    /// Wrapped description lines; empty unless the event is selected.
    pub description: Vec<String>,
}

impl Card {
    /// Rows the card occupies.
    pub fn height(&self) -> usize {
        1 + self.description.len()
    }

    /// Whether the card is expanded.
    pub fn is_expanded(&self) -> bool {
        !self.description.is_empty()
    }

    /// Column where description lines start.
    pub fn description_x(&self) -> u16 {
        self.x + DESCRIPTION_INDENT
    }

    /// Whether a screen column and layout row fall inside the card.
    pub fn contains(&self, col: u16, row: usize) -> bool {
        col >= self.x
            && col < self.x + self.width
            && row >= self.row
            && row < self.row + self.height()
    }
}

/// Build the card for every placed event.
pub fn build_cards(
    geometry: &AxisGeometry,
    layout: &Layout,
    events: &[TimelineEvent],
    selection: Selection,
) -> Vec<Card> {
    let width = geometry.card_width;
    // Marker plus a space precede the title.
    let title_width = usize::from(width).saturating_sub(2);
    let description_width = usize::from(width.saturating_sub(DESCRIPTION_INDENT));

    let mut cards: Vec<Card> = layout
        .placements
        .iter()
        .filter_map(|placement| {
            let event = events.get(placement.event_index)?;
            let description = if selection.is_selected(placement.event_index) {
                wrap_text(&event.description, description_width)
            } else {
                Vec::new()
            };
            Some(Card {
                event_index: placement.event_index,
                side: placement.side,
                x: geometry.card_x(placement.side),
                row: placement.row(),
                width,
                title: truncate_to_width(&event.title, title_width),
                description,
            })
        })
        .collect();
    stack_cards(&mut cards);
    cards
}

/// Push cards down so that none starts inside an earlier card on its side.
///
/// Lanes give each card one row, so only an expanded card can overlap the
/// cards below it. A pushed card can in turn push the next one.
fn stack_cards(cards: &mut [Card]) {
    for side in [Side::Left, Side::Right] {
        let mut order: Vec<usize> = (0..cards.len())
            .filter(|&i| cards[i].side == side)
            .collect();
        order.sort_by_key(|&i| (cards[i].row, cards[i].event_index));

        let mut next_free = 0;
        for i in order {
            let card = &mut cards[i];
            card.row = card.row.max(next_free);
            next_free = card.row + card.height();
        }
    }
}

/// Rows needed to draw the axis and every card.
pub fn content_height(layout: &Layout, cards: &[Card]) -> usize {
    cards
        .iter()
        .map(|card| card.row + card.height())
        .fold(layout.height(), usize::max)
}

/// Event index of the card at a screen position, topmost first.
pub fn card_at(
    cards: &[Card],
    geometry: &AxisGeometry,
    scroll: usize,
    col: u16,
    screen_y: u16,
) -> Option<usize> {
    let row = geometry.layout_row(screen_y, scroll)?;
    cards
        .iter()
        .rev()
        .find(|card| card.contains(col, row))
        .map(|card| card.event_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_events;
    use chrono::NaiveDate;
    use vtline_engine::{compute_layout, TickOrder};

    #[test]
    fn test_axis_geometry_width_40() {
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 10));
        assert_eq!(geometry.axis_x, 20);
        assert_eq!(geometry.label_x, 11);
        assert_eq!(geometry.card_width, 9);
        assert_eq!(geometry.card_x(Side::Left), 0);
        assert_eq!(geometry.card_x(Side::Right), 22);
    }

    #[test]
    fn test_axis_geometry_narrow_area() {
        let geometry = AxisGeometry::new(Rect::new(3, 1, 6, 4));
        assert_eq!(geometry.axis_x, 6);
        assert_eq!(geometry.label_x, 3);
        assert_eq!(geometry.card_width, 0);
    }

    #[test]
    fn test_screen_and_layout_rows() {
        let geometry = AxisGeometry::new(Rect::new(0, 2, 40, 5));
        assert_eq!(geometry.screen_row(3, 0), Some(5));
        assert_eq!(geometry.screen_row(3, 4), None);
        assert_eq!(geometry.screen_row(8, 4), Some(6));
        assert_eq!(geometry.screen_row(9, 4), None);
        assert_eq!(geometry.screen_row(9, 0), None);
        assert_eq!(geometry.layout_row(5, 0), Some(3));
        assert_eq!(geometry.layout_row(1, 0), None);
        assert_eq!(geometry.layout_row(7, 0), None);
    }

    #[test]
    fn test_cards_follow_placements() {
        let events = sample_events();
        let layout = compute_layout(&events, TickOrder::Descending, 2).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 10));
        let cards = build_cards(&geometry, &layout, &events, Selection::Unselected);

        assert_eq!(cards.len(), 2);
        assert_eq!((cards[0].x, cards[0].row), (22, 6));
        assert_eq!((cards[1].x, cards[1].row), (0, 2));
        assert!(cards.iter().all(|c| c.height() == 1));
    }

    #[test]
    fn test_selected_card_grows() {
        let events = sample_events();
        let layout = compute_layout(&events, TickOrder::Descending, 2).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 10));
        let cards = build_cards(&geometry, &layout, &events, Selection::Selected(0));

        assert_eq!(cards[0].description, vec!["Initial", "release"]);
        assert_eq!(cards[0].height(), 3);
        assert!(cards[0].is_expanded());
        assert!(!cards[1].is_expanded());
    }

    #[test]
    fn test_card_at_hit_testing() {
        let events = sample_events();
        let layout = compute_layout(&events, TickOrder::Descending, 2).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 10));
        let cards = build_cards(&geometry, &layout, &events, Selection::Unselected);

        assert_eq!(card_at(&cards, &geometry, 0, 23, 6), Some(0));
        assert_eq!(card_at(&cards, &geometry, 0, 4, 2), Some(1));
        assert_eq!(card_at(&cards, &geometry, 0, 20, 6), None);
        assert_eq!(card_at(&cards, &geometry, 0, 4, 3), None);
        // Scrolled by two rows, the Beta card sits on screen row 0.
        assert_eq!(card_at(&cards, &geometry, 2, 4, 0), Some(1));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let events = vec![TimelineEvent::new(
            "A very long milestone title",
            "",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )];
        let layout = compute_layout(&events, TickOrder::Descending, 2).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 10));
        let cards = build_cards(&geometry, &layout, &events, Selection::Unselected);
        assert_eq!(cards[0].title, "A ve...");
    }

    fn january_lane_events() -> Vec<TimelineEvent> {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        vec![
            TimelineEvent::new("Alpha", "Secret launch plan notes", date(1, 5)),
            TimelineEvent::new("Bravo", "", date(2, 5)),
            TimelineEvent::new("Charlie", "", date(1, 20)),
        ]
    }

    #[test]
    fn test_expanded_card_pushes_lane_below() {
        // Alpha and Charlie share January on the right: rows 8 and 9.
        let events = january_lane_events();
        let layout = compute_layout(&events, TickOrder::Descending, 4).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 20));

        let collapsed = build_cards(&geometry, &layout, &events, Selection::Unselected);
        assert_eq!(collapsed[0].row, 8);
        assert_eq!(collapsed[2].row, 9);
        assert_eq!(content_height(&layout, &collapsed), 16);

        let cards = build_cards(&geometry, &layout, &events, Selection::Selected(0));
        assert_eq!(cards[0].description, vec!["Secret", "launch", "plan", "notes"]);
        assert_eq!(cards[0].row, 8);
        assert_eq!(cards[2].row, 13);
        // Bravo is on the other side and stays put.
        assert_eq!(cards[1].row, 4);

        // Description rows hit the expanded card, not the one pushed below.
        for y in 9..13 {
            assert_eq!(card_at(&cards, &geometry, 0, 25, y), Some(0));
        }
        assert_eq!(card_at(&cards, &geometry, 0, 25, 13), Some(2));
    }

    #[test]
    fn test_push_carries_past_axis_end() {
        let events = january_lane_events();
        let layout = compute_layout(&events, TickOrder::Ascending, 1).unwrap();
        let geometry = AxisGeometry::new(Rect::new(0, 0, 40, 20));
        let cards = build_cards(&geometry, &layout, &events, Selection::Selected(0));

        // Ascending spacing 1: Dec, Jan, Feb, Mar. Alpha at row 1 takes five rows.
        assert_eq!(cards[0].row, 1);
        assert_eq!(cards[2].row, 6);
        assert_eq!(layout.height(), 4);
        assert_eq!(content_height(&layout, &cards), 7);
    }
}
