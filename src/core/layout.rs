//! # Slide Roles & Indicator State
//!
//! Pure functions from deck state to presentation values. The rendering layer
//! consumes these values; it is never a source of truth. Recomputing on every
//! draw (instead of toggling flags on render objects) is what makes a failed
//! render harmless — the next draw starts from the same deck state and gets
//! the same answer.
//!
//! Role assignment is checked in order Center, LeftNeighbor, RightNeighbor,
//! Hidden. With two slides the non-current slide satisfies both neighbor
//! computations; the check order makes LeftNeighbor win deterministically.

use crate::core::deck::SlideDeck;

/// The presentation category of a slide for the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Center,
    LeftNeighbor,
    RightNeighbor,
    Hidden,
}

/// Assign a role to every slide in the deck.
///
/// O(N), idempotent: two calls with unchanged deck state return identical
/// mappings. Empty deck returns an empty mapping.
pub fn assign(deck: &SlideDeck) -> Vec<Role> {
    let n = deck.len();
    if n == 0 {
        return Vec::new();
    }
    let current = deck.current_index();
    let left = (current + n - 1) % n;
    let right = (current + 1) % n;

    (0..n)
        .map(|i| {
            if i == current {
                Role::Center
            } else if i == left {
                Role::LeftNeighbor
            } else if i == right {
                Role::RightNeighbor
            } else {
                Role::Hidden
            }
        })
        .collect()
}

/// The role of a single slide index, without building the full mapping.
pub fn role_of(deck: &SlideDeck, index: usize) -> Role {
    let n = deck.len();
    if n == 0 || index >= n {
        return Role::Hidden;
    }
    let current = deck.current_index();
    if index == current {
        Role::Center
    } else if index == (current + n - 1) % n {
        Role::LeftNeighbor
    } else if index == (current + 1) % n {
        Role::RightNeighbor
    } else {
        Role::Hidden
    }
}

/// Which indicator is active: `Some(current)` for a non-empty deck.
///
/// The rendering layer toggles exactly one indicator on from this value; all
/// others render inactive.
pub fn active_indicator(deck: &SlideDeck) -> Option<usize> {
    if deck.is_empty() {
        None
    } else {
        Some(deck.current_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_at(n: usize, current: isize) -> SlideDeck {
        let mut deck = SlideDeck::new(n);
        deck.move_to(current);
        deck
    }

    #[test]
    fn test_assign_five_slides() {
        let roles = assign(&deck_at(5, 2));
        assert_eq!(
            roles,
            vec![
                Role::Hidden,
                Role::LeftNeighbor,
                Role::Center,
                Role::RightNeighbor,
                Role::Hidden,
            ]
        );
    }

    #[test]
    fn test_exactly_one_center_everywhere() {
        for n in 1..=7usize {
            for current in 0..n {
                let roles = assign(&deck_at(n, current as isize));
                let centers = roles.iter().filter(|r| **r == Role::Center).count();
                assert_eq!(centers, 1, "n={n} current={current}");
            }
        }
    }

    #[test]
    fn test_assign_is_idempotent() {
        let deck = deck_at(6, 4);
        assert_eq!(assign(&deck), assign(&deck));
    }

    #[test]
    fn test_single_slide_is_center_only() {
        let roles = assign(&deck_at(1, 0));
        assert_eq!(roles, vec![Role::Center]);
    }

    #[test]
    fn test_two_slides_left_wins_tiebreak() {
        // The non-current slide is both left and right neighbor; check order
        // resolves it to LeftNeighbor.
        let roles = assign(&deck_at(2, 0));
        assert_eq!(roles, vec![Role::Center, Role::LeftNeighbor]);
    }

    #[test]
    fn test_wrapped_neighbors_at_edges() {
        let roles = assign(&deck_at(4, 0));
        assert_eq!(roles[3], Role::LeftNeighbor);
        assert_eq!(roles[1], Role::RightNeighbor);

        let roles = assign(&deck_at(4, 3));
        assert_eq!(roles[2], Role::LeftNeighbor);
        assert_eq!(roles[0], Role::RightNeighbor);
    }

    #[test]
    fn test_role_of_matches_assign() {
        let deck = deck_at(5, 2);
        let roles = assign(&deck);
        for (i, role) in roles.iter().enumerate() {
            assert_eq!(role_of(&deck, i), *role);
        }
        assert_eq!(role_of(&deck, 99), Role::Hidden);
    }

    #[test]
    fn test_empty_deck_has_no_roles_or_indicator() {
        let deck = SlideDeck::new(0);
        assert!(assign(&deck).is_empty());
        assert_eq!(active_indicator(&deck), None);
    }

    #[test]
    fn test_active_indicator_tracks_current() {
        let deck = deck_at(4, 3);
        assert_eq!(active_indicator(&deck), Some(3));
    }
}
