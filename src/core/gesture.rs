//! # Swipe Gesture Interpretation
//!
//! Converts a pair of horizontal pointer coordinates (press, release) into a
//! navigation direction. A drag toward lower x means the user pushed the
//! content leftwards, i.e. wants the next slide.
//!
//! Both comparisons are strict: a displacement of exactly the threshold is
//! `None`, so a gesture can never resolve to both directions and a sloppy
//! click never navigates.

/// Minimum horizontal displacement for a drag to register as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
    None,
}

/// Interpret a press/release coordinate pair as a swipe.
pub fn interpret(start_x: f32, end_x: f32, threshold: f32) -> SwipeDirection {
    if start_x - end_x > threshold {
        SwipeDirection::Next
    } else if end_x - start_x > threshold {
        SwipeDirection::Previous
    } else {
        SwipeDirection::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_left_is_next() {
        assert_eq!(interpret(100.0, 40.0, SWIPE_THRESHOLD), SwipeDirection::Next);
    }

    #[test]
    fn test_drag_right_is_previous() {
        assert_eq!(
            interpret(40.0, 100.0, SWIPE_THRESHOLD),
            SwipeDirection::Previous
        );
    }

    #[test]
    fn test_below_threshold_is_none() {
        assert_eq!(interpret(100.0, 70.0, SWIPE_THRESHOLD), SwipeDirection::None);
        assert_eq!(interpret(70.0, 100.0, SWIPE_THRESHOLD), SwipeDirection::None);
    }

    #[test]
    fn test_exact_threshold_is_none() {
        // Strict inequality: a displacement of exactly the threshold does
        // not navigate.
        assert_eq!(interpret(100.0, 50.0, SWIPE_THRESHOLD), SwipeDirection::None);
        assert_eq!(interpret(50.0, 100.0, SWIPE_THRESHOLD), SwipeDirection::None);
    }

    #[test]
    fn test_no_movement_is_none() {
        assert_eq!(interpret(80.0, 80.0, SWIPE_THRESHOLD), SwipeDirection::None);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(interpret(10.0, 2.0, 5.0), SwipeDirection::Next);
        assert_eq!(interpret(10.0, 2.0, 20.0), SwipeDirection::None);
    }
}
