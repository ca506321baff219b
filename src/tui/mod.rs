//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the carousel,
//! and translates mouse/keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, etc.) in
//! the future if needed.
//!
//! ## Input model
//!
//! The carousel has no ambient DOM to query, so all wiring is explicit: the
//! draw pass records the screen region of the strip, of every visible slide
//! and of every indicator dot into `TuiState`, and the event loop hit-tests
//! raw mouse coordinates against those regions. A press/release pair becomes
//! either a swipe (horizontal displacement beyond the configured threshold)
//! or a click at the release position. Pointer movement across the strip
//! boundary becomes hover enter/leave.
//!
//! ## Timing
//!
//! The autoplay timer lives in [`autoplay::Autoplay`], a spawned tokio task.
//! Core `update()` only returns `Effect`s; this loop is the single place that
//! applies them to the scheduler, on one thread, so cancel-then-create is
//! never interleaved with another timer operation.

pub mod autoplay;
mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::gesture::{self, SwipeDirection};
use crate::core::state::App;
use crate::tui::autoplay::Autoplay;
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// TUI-specific presentation state (not part of core carousel logic)
pub struct TuiState {
    /// Strip region from the last draw; drives hover enter/leave.
    pub container_area: Rect,
    /// `(slide_index, area)` for every slide drawn last frame.
    pub slide_areas: Vec<(usize, Rect)>,
    /// `(position, area)` for every indicator dot drawn last frame.
    pub indicator_areas: Vec<(usize, Rect)>,
    /// Where the left button went down, if a press is pending.
    pub drag_origin: Option<(u16, u16)>,
    /// Whether the pointer was inside the strip at the last move.
    pub hovering: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            container_area: Rect::default(),
            slide_areas: Vec::new(),
            indicator_areas: Vec::new(),
            drag_origin: None,
            hovering: false,
        }
    }

    fn indicator_at(&self, col: u16, row: u16) -> Option<usize> {
        hit_test(&self.indicator_areas, col, row)
    }

    fn slide_at(&self, col: u16, row: u16) -> Option<usize> {
        hit_test(&self.slide_areas, col, row)
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

fn hit_test(regions: &[(usize, Rect)], col: u16, row: u16) -> Option<usize> {
    let position = Position::new(col, row);
    regions
        .iter()
        .find(|(_, area)| area.contains(position))
        .map(|(index, _)| *index)
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from the autoplay timer task
    let (tx, rx) = mpsc::channel();
    let mut scheduler = Autoplay::new(Duration::from_millis(config.autoplay_interval_ms), tx);

    // Autoplay runs from startup — unless there is nothing to advance, in
    // which case initialization is a silent no-op.
    if app.deck.is_empty() {
        info!("No slides configured; carousel is idle");
    } else {
        scheduler.start();
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(100));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::Quit => {
                    let effect = update(&mut app, Action::Quit);
                    apply_effect(effect, &mut scheduler, &mut should_quit);
                }
                TuiEvent::StepPrevious => {
                    let effect = update(&mut app, Action::StepPrevious);
                    apply_effect(effect, &mut scheduler, &mut should_quit);
                }
                TuiEvent::StepNext => {
                    let effect = update(&mut app, Action::StepNext);
                    apply_effect(effect, &mut scheduler, &mut should_quit);
                }
                TuiEvent::JumpTo(position) => {
                    if position < app.deck.len() {
                        let effect = update(&mut app, Action::IndicatorPressed(position));
                        apply_effect(effect, &mut scheduler, &mut should_quit);
                    }
                }

                TuiEvent::MouseDown(col, row) => {
                    tui.drag_origin = Some((col, row));
                }

                TuiEvent::MouseMove(col, row) => {
                    let inside = tui.container_area.contains(Position::new(col, row));
                    if inside != tui.hovering {
                        tui.hovering = inside;
                        let action = if inside {
                            Action::HoverStarted
                        } else {
                            Action::HoverEnded
                        };
                        let effect = update(&mut app, action);
                        apply_effect(effect, &mut scheduler, &mut should_quit);
                    }
                }

                TuiEvent::MouseUp(col, row) => {
                    let Some((start_x, _)) = tui.drag_origin.take() else {
                        continue;
                    };
                    // Beyond the threshold the press/release pair is a swipe;
                    // otherwise it is a click at the release position.
                    let direction =
                        gesture::interpret(start_x as f32, col as f32, app.swipe_threshold);
                    let action = if direction != SwipeDirection::None {
                        Some(Action::Swipe {
                            start_x: start_x as f32,
                            end_x: col as f32,
                        })
                    } else if let Some(position) = tui.indicator_at(col, row) {
                        Some(Action::IndicatorPressed(position))
                    } else {
                        tui.slide_at(col, row).map(Action::SlidePressed)
                    };
                    if let Some(action) = action {
                        let effect = update(&mut app, action);
                        apply_effect(effect, &mut scheduler, &mut should_quit);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle autoplay ticks from the timer task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            apply_effect(effect, &mut scheduler, &mut should_quit);
        }
    }

    // Releases the timer; the guard then restores the terminal modes.
    scheduler.stop();

    ratatui::restore();
    Ok(())
}

/// Apply a reducer effect to the scheduler. The only place timer transitions
/// happen, and it runs on the event loop thread between draws.
fn apply_effect(effect: Effect, scheduler: &mut Autoplay, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::RestartAutoplay => scheduler.reset(),
        Effect::PauseAutoplay => scheduler.stop(),
        Effect::ResumeAutoplay => scheduler.start(),
        Effect::Quit => *should_quit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_finds_region() {
        let regions = vec![
            (0, Rect::new(0, 5, 10, 3)),
            (2, Rect::new(20, 5, 10, 3)),
        ];
        assert_eq!(hit_test(&regions, 5, 6), Some(0));
        assert_eq!(hit_test(&regions, 25, 5), Some(2));
        assert_eq!(hit_test(&regions, 15, 6), None);
        assert_eq!(hit_test(&regions, 5, 20), None);
    }

    #[test]
    fn test_tui_state_hit_helpers() {
        let mut tui = TuiState::new();
        tui.slide_areas = vec![(1, Rect::new(0, 2, 20, 8))];
        tui.indicator_areas = vec![(0, Rect::new(10, 11, 1, 1)), (1, Rect::new(12, 11, 1, 1))];

        assert_eq!(tui.slide_at(4, 4), Some(1));
        assert_eq!(tui.indicator_at(12, 11), Some(1));
        assert_eq!(tui.indicator_at(11, 11), None);
    }
}
