//! # Application State
//!
//! Core carousel state for Marquee. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── slides: Vec<Slide>        // slide content, fixed at startup
//! ├── deck: SlideDeck           // current index + wraparound arithmetic
//! ├── swipe_threshold: f32      // horizontal cells for a drag to swipe
//! ├── autoplay_paused: bool     // true while the pointer hovers the strip
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::deck::SlideDeck;
use crate::core::gesture;

/// One item in the carousel's ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

pub struct App {
    pub slides: Vec<Slide>,
    pub deck: SlideDeck,
    pub swipe_threshold: f32,
    /// True between hover-enter and hover-leave. Display-only: the timer
    /// itself belongs to the event loop's scheduler, never to core state.
    pub autoplay_paused: bool,
    pub status_message: String,
}

impl App {
    pub fn new(slides: Vec<Slide>) -> Self {
        let deck = SlideDeck::new(slides.len());
        Self {
            slides,
            deck,
            swipe_threshold: gesture::SWIPE_THRESHOLD,
            autoplay_paused: false,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.slides.clone());
        app.swipe_threshold = config.swipe_threshold;
        app
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app(4);
        assert_eq!(app.deck.len(), 4);
        assert_eq!(app.deck.current_index(), 0);
        assert!(!app.autoplay_paused);
        assert_eq!(app.slides.len(), 4);
    }
}
