//! # Slide Deck
//!
//! The ordered sequence of slides and the single current index.
//! This is the one piece of mutable navigation state in the whole engine:
//! everything else (roles, indicators) is recomputed from it on demand.
//!
//! The deck is fixed-size for its lifetime — slides are not added or removed
//! at runtime. `move_to` accepts any integer and wraps with Euclidean modulo,
//! so `-1` lands on the last slide and `len` lands on the first, for targets
//! of arbitrary magnitude.
//!
//! The deck never renders and never touches the autoplay timer. Those are the
//! reducer's and the event loop's jobs (see `action.rs`).

/// Navigation state for one carousel instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

impl SlideDeck {
    /// Create a deck of `len` slides with the current index at 0.
    ///
    /// A zero-length deck is valid: every operation on it is a no-op.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current slide index. Only meaningful when the deck is non-empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Move to `target`, wrapping out-of-range values onto `[0, len)`.
    ///
    /// `rem_euclid` keeps the result non-negative for negative targets, and
    /// handles repeated wraparound (`move_to(-(len as isize) - 1)` lands on
    /// `len - 1`, not on some clamped edge). No-op on an empty deck.
    pub fn move_to(&mut self, target: isize) {
        if self.len == 0 {
            return;
        }
        self.current = target.rem_euclid(self.len as isize) as usize;
    }

    /// Convenience for `move_to(current + 1)`.
    pub fn advance(&mut self) {
        self.move_to(self.current as isize + 1);
    }
}
