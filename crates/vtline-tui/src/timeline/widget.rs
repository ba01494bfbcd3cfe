//! Timeline widget for rendering events along a month axis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use vtline_engine::{compute_layout, Layout, Selection, TickOrder, TimelineEvent};

use super::geometry::{build_cards, content_height, AxisGeometry, Card, LABEL_WIDTH};
use crate::theme::{GlyphSet, Theme};

/// Rows between month ticks when not configured otherwise.
pub const DEFAULT_TICK_SPACING: usize = 4;

/// Vertical timeline widget.
///
/// Ticks and placements are recomputed from `events` on every render.
pub struct TimelineWidget<'a> {
    events: &'a [TimelineEvent],
    theme: &'a Theme,
    glyphs: &'a GlyphSet,
    selection: Selection,
    /// Keyboard cursor, highlighted but not expanded.
    focused: Option<usize>,
    /// First layout row shown at the top of the area.
    scroll: usize,
    order: TickOrder,
    tick_spacing: usize,
    /// Whether to render with a border (default: true).
    with_border: bool,
    /// Whether the pane has input focus (border color).
    active: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(events: &'a [TimelineEvent], theme: &'a Theme, glyphs: &'a GlyphSet) -> Self {
        Self {
            events,
            theme,
            glyphs,
            selection: Selection::Unselected,
            focused: None,
            scroll: 0,
            order: TickOrder::default(),
            tick_spacing: DEFAULT_TICK_SPACING,
            with_border: true,
            active: false,
        }
    }

    #[must_use]
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub fn order(mut self, order: TickOrder) -> Self {
        self.order = order;
        self
    }

    /// Rows per month tick. Values below 1 are treated as 1.
    #[must_use]
    pub fn tick_spacing(mut self, tick_spacing: usize) -> Self {
        self.tick_spacing = tick_spacing.max(1);
        self
    }

    /// Set whether to render with a border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.with_border = border;
        self
    }

    /// Set whether the pane has input focus.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Area left for timeline content once the optional border is drawn.
    pub fn inner_area(area: Rect, with_border: bool) -> Rect {
        if with_border {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        }
    }

    fn render_message(text: &str, style: Style, inner: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![Span::styled(text, style)]).centered();
        Paragraph::new(line).render(
            Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
            buf,
        );
    }

    fn render_axis(&self, height: usize, geometry: &AxisGeometry, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.axis);
        let last_row = height.min(self.scroll + usize::from(geometry.inner.height));
        for row in self.scroll..last_row {
            let Some(y) = geometry.screen_row(row, self.scroll) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((geometry.axis_x, y)) {
                cell.set_symbol(self.glyphs.axis()).set_style(style);
            }
        }
    }

    fn render_ticks(&self, layout: &Layout, geometry: &AxisGeometry, buf: &mut Buffer) {
        let label_style = Style::default().fg(self.theme.subtext);
        let dot_style = Style::default().fg(self.theme.tick_dot);
        let label_width = usize::from(
            geometry
                .axis_x
                .saturating_sub(geometry.label_x + 1)
                .min(LABEL_WIDTH),
        );

        for (index, tick) in layout.ticks.iter().enumerate() {
            let Some(y) = geometry.screen_row(layout.tick_row(index), self.scroll) else {
                continue;
            };
            buf.set_stringn(geometry.label_x, y, tick.label(), label_width, label_style);
            if let Some(cell) = buf.cell_mut((geometry.axis_x, y)) {
                cell.set_symbol(self.glyphs.tick_dot()).set_style(dot_style);
            }
        }
    }

    fn render_card(&self, card: &Card, geometry: &AxisGeometry, buf: &mut Buffer) {
        if card.width == 0 {
            return;
        }
        let width = usize::from(card.width);
        let expanded = card.is_expanded();
        let focused = self.focused == Some(card.event_index);

        if let Some(y) = geometry.screen_row(card.row, self.scroll) {
            let marker = if expanded {
                self.glyphs.expanded()
            } else {
                self.glyphs.collapsed()
            };
            let marker_style = Style::default().fg(if expanded {
                self.theme.tick_dot
            } else {
                self.theme.muted
            });
            let title_style = if focused {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text)
            };

            let (x, _) = buf.set_stringn(card.x, y, marker, width, marker_style);
            let (x, _) = buf.set_stringn(x, y, " ", width.saturating_sub(1), title_style);
            buf.set_stringn(x, y, &card.title, width.saturating_sub(2), title_style);
        }

        let description_style = Style::default().fg(self.theme.subtext);
        let description_width = usize::from(card.width.saturating_sub(card.description_x() - card.x));
        for (offset, line) in card.description.iter().enumerate() {
            let Some(y) = geometry.screen_row(card.row + 1 + offset, self.scroll) else {
                continue;
            };
            buf.set_stringn(
                card.description_x(),
                y,
                line,
                description_width,
                description_style,
            );
        }
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if self.with_border {
            let border_style = if self.active {
                Style::default().fg(self.theme.border_focused)
            } else {
                Style::default().fg(self.theme.border)
            };

            let block = Block::default()
                .title(" Timeline ")
                .title_style(Style::default().fg(self.theme.text))
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(self.theme.base));

            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // The tick range is undefined without events, so never ask for one.
        if self.events.is_empty() {
            Self::render_message(
                "No events",
                Style::default().fg(self.theme.muted),
                inner,
                buf,
            );
            return;
        }

        let layout = match compute_layout(self.events, self.order, self.tick_spacing) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::error!(error = %err, "Failed to lay out timeline");
                Self::render_message(
                    &format!("Timeline error: {err}"),
                    Style::default().fg(self.theme.error),
                    inner,
                    buf,
                );
                return;
            }
        };

        let geometry = AxisGeometry::new(inner);
        let cards = build_cards(&geometry, &layout, self.events, self.selection);
        self.render_axis(content_height(&layout, &cards), &geometry, buf);
        self.render_ticks(&layout, &geometry, buf);

        for card in &cards {
            self.render_card(card, &geometry, buf);
        }
    }
}
