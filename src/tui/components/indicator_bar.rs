//! # IndicatorBar Component
//!
//! One dot per slide position, centered under the strip. Exactly one dot is
//! active — the one matching `core::layout::active_indicator` — and the rest
//! are inactive. The bar renders each dot at an explicitly computed cell so
//! it can hand the event loop a precise hit region per dot.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::core::deck::SlideDeck;
use crate::core::layout;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";
/// Horizontal cells from one dot to the next.
const DOT_STRIDE: u16 = 2;

/// Transient render wrapper for the indicator row.
pub struct IndicatorBar<'a> {
    deck: &'a SlideDeck,
}

impl<'a> IndicatorBar<'a> {
    pub fn new(deck: &'a SlideDeck) -> Self {
        Self { deck }
    }

    /// Render the dots and return `(position, area)` for each one.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) -> Vec<(usize, Rect)> {
        let n = self.deck.len() as u16;
        if n == 0 || area.width == 0 {
            return Vec::new();
        }

        let row_width = (n - 1) * DOT_STRIDE + 1;
        let start_x = area.x + area.width.saturating_sub(row_width) / 2;
        let active = layout::active_indicator(self.deck);

        let mut hit_areas = Vec::new();
        for position in 0..self.deck.len() {
            let x = start_x + position as u16 * DOT_STRIDE;
            if x >= area.x + area.width {
                break; // terminal too narrow for the full row
            }
            let dot_area = Rect::new(x, area.y, 1, 1);
            let (glyph, style) = if active == Some(position) {
                (
                    ACTIVE_DOT,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                (INACTIVE_DOT, Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(Span::styled(glyph, style), dot_area);
            hit_areas.push((position, dot_area));
        }
        hit_areas
    }
}
