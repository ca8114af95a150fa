// SPDX-License-Identifier: MPL-2.0
//! Index and visibility state owned by a single rotator.

/// Direction of a single step through a content list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Mutable state of a rotator: which item is selected and whether it is
/// currently faded in.
///
/// The index is always within `0..len` for the list it was created for.
/// Construction and stepping both take the list length, so the state never
/// needs to hold a reference to the content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorState {
    current_index: usize,
    visible: bool,
}

impl RotatorState {
    /// Creates the state a rotator starts with when it mounts.
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self {
            current_index: 0,
            visible,
        }
    }

    /// Index of the active item.
    #[must_use]
    pub fn current_index(self) -> usize {
        self.current_index
    }

    /// Whether the active item is faded in.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Steps the index one position in `direction`, wrapping at both ends.
    ///
    /// `len` is the length of the content list and is never zero.
    pub fn advance(&mut self, direction: Direction, len: usize) {
        self.current_index = step(self.current_index, direction, len);
    }
}

/// Pure index arithmetic behind [`RotatorState::advance`].
///
/// `Next` yields `(index + 1) mod len`, `Previous` yields
/// `(index - 1 + len) mod len`.
#[must_use]
pub fn step(index: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(step(4, Direction::Next, 5), 0);
        assert_eq!(step(0, Direction::Next, 5), 1);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        assert_eq!(step(0, Direction::Previous, 5), 4);
        assert_eq!(step(3, Direction::Previous, 5), 2);
    }

    #[test]
    fn step_matches_modular_formula_for_all_indices() {
        for len in 1..=7 {
            for index in 0..len {
                assert_eq!(step(index, Direction::Next, len), (index + 1) % len);
                assert_eq!(
                    step(index, Direction::Previous, len),
                    (index + len - 1) % len
                );
            }
        }
    }

    #[test]
    fn full_period_of_next_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut index = start;
                for _ in 0..len {
                    index = step(index, Direction::Next, len);
                }
                assert_eq!(index, start);
            }
        }
    }

    #[test]
    fn single_item_list_stays_put() {
        assert_eq!(step(0, Direction::Next, 1), 0);
        assert_eq!(step(0, Direction::Previous, 1), 0);
    }

    #[test]
    fn new_state_starts_at_first_item() {
        let hidden = RotatorState::new(false);
        assert_eq!(hidden.current_index(), 0);
        assert!(!hidden.is_visible());

        let shown = RotatorState::new(true);
        assert!(shown.is_visible());
    }

    #[test]
    fn advance_updates_index_only() {
        let mut state = RotatorState::new(true);
        state.advance(Direction::Previous, 5);
        assert_eq!(state.current_index(), 4);
        assert!(state.is_visible());
    }
}
