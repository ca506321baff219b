//! # Actions
//!
//! Everything that can happen to the carousel becomes an `Action`.
//! User clicks an indicator dot? That's `Action::IndicatorPressed(3)`.
//! The autoplay timer fires? That's `Action::AutoplayTick`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` telling the caller what to do with the
//! autoplay timer. No I/O here: the timer itself lives with the event loop,
//! so this whole routing table is testable without a terminal or a clock.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! Two rules worth calling out:
//!
//! - Every manual navigation restarts autoplay, so the next automatic advance
//!   is a full interval after the last user interaction. The autoplay tick
//!   itself never restarts the timer (that would push the next tick out by a
//!   full interval on every tick — an infinite period).
//! - On an empty deck every action is a no-op with `Effect::None`.

use log::debug;

use crate::core::gesture::{self, SwipeDirection};
use crate::core::layout::{self, Role};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Indicator dot at this position was clicked.
    IndicatorPressed(usize),
    /// The slide at this index was clicked. Only neighbor roles navigate.
    SlidePressed(usize),
    /// A press/release pair of horizontal coordinates, in cells.
    Swipe { start_x: f32, end_x: f32 },
    /// Step one slide back (keyboard navigation).
    StepPrevious,
    /// Step one slide forward (keyboard navigation).
    StepNext,
    /// Pointer entered the carousel strip.
    HoverStarted,
    /// Pointer left the carousel strip.
    HoverEnded,
    /// The autoplay timer fired.
    AutoplayTick,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel the pending autoplay timer and start a fresh full interval.
    RestartAutoplay,
    /// Stop the timer entirely (hover-enter).
    PauseAutoplay,
    /// Start the timer again with a full nominal period (hover-leave).
    ResumeAutoplay,
    Quit,
}

/// Route an action into deck mutations and a timer effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    if app.deck.is_empty() && action != Action::Quit {
        // Degenerate deck: nothing to navigate, nothing to schedule.
        return Effect::None;
    }

    match action {
        Action::IndicatorPressed(position) => {
            debug!("Indicator {} pressed", position);
            app.deck.move_to(position as isize);
            Effect::RestartAutoplay
        }
        Action::SlidePressed(index) => {
            let current = app.deck.current_index() as isize;
            match layout::role_of(&app.deck, index) {
                Role::LeftNeighbor => {
                    app.deck.move_to(current - 1);
                    Effect::RestartAutoplay
                }
                Role::RightNeighbor => {
                    app.deck.move_to(current + 1);
                    Effect::RestartAutoplay
                }
                // Clicking the center slide or a hidden one does nothing,
                // and an ignored click does not disturb autoplay timing.
                Role::Center | Role::Hidden => Effect::None,
            }
        }
        Action::Swipe { start_x, end_x } => {
            let current = app.deck.current_index() as isize;
            match gesture::interpret(start_x, end_x, app.swipe_threshold) {
                SwipeDirection::Next => {
                    app.deck.move_to(current + 1);
                    Effect::RestartAutoplay
                }
                SwipeDirection::Previous => {
                    app.deck.move_to(current - 1);
                    Effect::RestartAutoplay
                }
                SwipeDirection::None => Effect::None,
            }
        }
        Action::StepPrevious => {
            let current = app.deck.current_index() as isize;
            app.deck.move_to(current - 1);
            Effect::RestartAutoplay
        }
        Action::StepNext => {
            let current = app.deck.current_index() as isize;
            app.deck.move_to(current + 1);
            Effect::RestartAutoplay
        }
        Action::HoverStarted => {
            app.autoplay_paused = true;
            app.status_message = String::from("Autoplay paused");
            Effect::PauseAutoplay
        }
        Action::HoverEnded => {
            app.autoplay_paused = false;
            app.status_message.clear();
            Effect::ResumeAutoplay
        }
        Action::AutoplayTick => {
            app.deck.advance();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
