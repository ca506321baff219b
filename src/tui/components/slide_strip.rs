//! # SlideStrip Component
//!
//! The carousel itself: a center pane flanked by its left and right
//! neighbors. Hidden slides are simply not drawn — visibility is decided
//! entirely by the roles computed in `core::layout`, never by this component.
//!
//! Follows the transient wrapper pattern: a `SlideStrip` is created each
//! frame with borrowed core state, renders, and reports the screen region of
//! every visible slide so the event loop can hit-test clicks against them.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::layout::Role;
use crate::core::state::App;

/// Transient render wrapper for the slide strip.
pub struct SlideStrip<'a> {
    app: &'a App,
    roles: &'a [Role],
}

impl<'a> SlideStrip<'a> {
    pub fn new(app: &'a App, roles: &'a [Role]) -> Self {
        Self { app, roles }
    }

    /// Render the strip and return `(slide_index, area)` for every slide
    /// that ended up on screen.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) -> Vec<(usize, Rect)> {
        let left = self.index_with_role(Role::LeftNeighbor);
        let center = self.index_with_role(Role::Center);
        let right = self.index_with_role(Role::RightNeighbor);

        use Constraint::Percentage;
        let layout = Layout::horizontal([Percentage(22), Percentage(56), Percentage(22)]);
        let [left_area, center_area, right_area] = layout.areas(area);

        let mut hit_areas = Vec::new();
        for (slot, slot_area) in [
            (left, left_area),
            (center, center_area),
            (right, right_area),
        ] {
            if let Some(index) = slot {
                self.draw_pane(frame, slot_area, index);
                hit_areas.push((index, slot_area));
            }
        }
        hit_areas
    }

    fn index_with_role(&self, role: Role) -> Option<usize> {
        self.roles.iter().position(|r| *r == role)
    }

    fn draw_pane(&self, frame: &mut Frame, area: Rect, index: usize) {
        let slide = &self.app.slides[index];
        let is_center = self.roles[index] == Role::Center;

        let (title_style, body_style, border_style) = if is_center {
            (
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        };

        let inner_width = area.width.saturating_sub(4) as usize;
        let title = truncate_title(&slide.title, inner_width);

        let mut lines: Vec<Line> = Vec::new();
        for wrapped in textwrap::wrap(&slide.body, inner_width.max(1)) {
            lines.push(Line::styled(wrapped.into_owned(), body_style));
        }

        let block = Block::bordered()
            .title(Line::styled(title, title_style))
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Truncate a title to `max_width` display columns, adding "…" if needed.
fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(1);
    for c in title.chars() {
        if out.width() + c.to_string().width() > budget {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
