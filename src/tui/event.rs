use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    /// Left arrow — step to the previous slide.
    StepPrevious,
    /// Right arrow — step to the next slide.
    StepNext,
    /// Digit key 1-9 — jump to that indicator position (0-based).
    JumpTo(usize),
    /// Left button pressed at (col, row) — potential click or swipe start.
    MouseDown(u16, u16),
    /// Left button released at (col, row) — resolves the pending press.
    MouseUp(u16, u16),
    /// Pointer moved to (col, row) — drives hover enter/leave.
    MouseMove(u16, u16),
    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        read_event()
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn read_event() -> Option<TuiEvent> {
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) => Some(TuiEvent::StepPrevious),
                (_, KeyCode::Right) => Some(TuiEvent::StepNext),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::JumpTo(c as usize - '1' as usize))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
