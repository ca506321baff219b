//! # TitleBar Component
//!
//! Top status bar showing the deck position and transient status text.
//!
//! ## Responsibilities
//!
//! - Display the current slide position (`3/5`)
//! - Display status messages (e.g. "Autoplay paused")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has no
//! internal state. The props come from different sources (deck position and
//! status from core state, the paused flag for the ⏸ marker) but the TitleBar
//! doesn't care where they come from—it just renders what it's given.
//!
//! ## Conditional Formatting
//!
//! 1. **Paused**: `"Marquee  3/5 | Autoplay paused ⏸"`
//! 2. **Status message**: `"Marquee  3/5 | <status>"`
//! 3. **Default**: `"Marquee  3/5"`

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

/// Top status bar component showing deck position and status.
pub struct TitleBar {
    /// Current slide position, 1-based (e.g. "3/5"); empty deck shows "–".
    pub position: String,
    /// Transient status (e.g. "Autoplay paused")
    pub status_message: String,
    /// Whether autoplay is currently suspended by hover.
    pub paused: bool,
}

impl TitleBar {
    pub fn new(current: Option<usize>, len: usize, status_message: &str, paused: bool) -> Self {
        let position = match current {
            Some(index) => format!("{}/{}", index + 1, len),
            None => String::from("–"),
        };
        Self {
            position,
            status_message: status_message.to_string(),
            paused,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!("Marquee  {}", self.position)
        } else if self.paused {
            format!("Marquee  {} | {} ⏸", self.position, self.status_message)
        } else {
            format!("Marquee  {} | {}", self.position, self.status_message)
        };
        frame.render_widget(Span::raw(text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_one_based() {
        let bar = TitleBar::new(Some(2), 5, "", false);
        assert_eq!(bar.position, "3/5");
    }

    #[test]
    fn test_empty_deck_position() {
        let bar = TitleBar::new(None, 0, "", false);
        assert_eq!(bar.position, "–");
    }
}
