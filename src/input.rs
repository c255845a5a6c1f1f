use ggez::input::keyboard::{KeyCode, KeyboardContext};

use crate::grid::Direction;

/// Snapshot of which direction keys are currently held.
pub trait KeyState {
    fn is_down(&self, direction: Direction) -> bool;
}

impl KeyState for KeyboardContext {
    fn is_down(&self, direction: Direction) -> bool {
        let (arrow, letter) = match direction {
            Direction::Up => (KeyCode::Up, KeyCode::W),
            Direction::Down => (KeyCode::Down, KeyCode::S),
            Direction::Left => (KeyCode::Left, KeyCode::A),
            Direction::Right => (KeyCode::Right, KeyCode::D),
        };
        self.is_key_pressed(arrow) || self.is_key_pressed(letter)
    }
}

/// Turns held keys into a heading, refusing to reverse onto the body.
#[derive(Clone, Copy, Debug)]
pub struct Input {
    last: Direction,
}

impl Input {
    pub fn new(initial: Direction) -> Self {
        Input { last: initial }
    }

    #[cfg(test)]
    pub fn last(&self) -> Direction {
        self.last
    }

    /// Keys are checked in `Direction::PRIORITY` order. A held key that would
    /// reverse the last accepted direction is skipped; with nothing usable
    /// held the last accepted direction is returned unchanged.
    pub fn poll(&mut self, keys: &dyn KeyState) -> Direction {
        let candidate = Direction::PRIORITY
            .into_iter()
            .find(|&direction| keys.is_down(direction) && !self.last.opposes(direction));
        if let Some(direction) = candidate {
            self.last = direction;
        }
        self.last
    }
}

impl Default for Input {
    fn default() -> Self {
        Input::new(Direction::Up)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Key state for tests: the listed directions are held.
    pub(crate) struct Held(pub Vec<Direction>);

    impl KeyState for Held {
        fn is_down(&self, direction: Direction) -> bool {
            self.0.contains(&direction)
        }
    }

    pub(crate) fn none() -> Held {
        Held(Vec::new())
    }

    #[test]
    fn no_keys_keeps_last_direction() {
        let mut input = Input::default();
        assert_eq!(input.poll(&none()), Direction::Up);
        assert_eq!(input.last(), Direction::Up);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut input = Input::new(Direction::Up);
        assert_eq!(input.poll(&Held(vec![Direction::Down])), Direction::Up);
        assert_eq!(input.last(), Direction::Up);
    }

    #[test]
    fn turn_is_accepted_and_remembered() {
        let mut input = Input::new(Direction::Up);
        assert_eq!(input.poll(&Held(vec![Direction::Left])), Direction::Left);
        assert_eq!(input.poll(&none()), Direction::Left);
        assert_eq!(input.poll(&Held(vec![Direction::Right])), Direction::Left);
    }

    #[test]
    fn priority_order_picks_first_usable_key() {
        let mut input = Input::new(Direction::Left);
        let held = Held(vec![Direction::Right, Direction::Down, Direction::Up]);
        assert_eq!(input.poll(&held), Direction::Up);

        // Up would reverse Down, so Left is the first usable key.
        let mut input = Input::new(Direction::Down);
        let held = Held(vec![Direction::Up, Direction::Left]);
        assert_eq!(input.poll(&held), Direction::Left);
    }

    #[test]
    fn poll_never_reverses_previous_result() {
        let mut input = Input::default();
        let mut previous = input.last();
        let sequences = [
            vec![Direction::Down],
            vec![Direction::Left],
            vec![Direction::Right],
            vec![Direction::Up, Direction::Down],
            vec![Direction::Down, Direction::Right],
            vec![Direction::Left, Direction::Up],
            vec![],
            vec![Direction::Right, Direction::Left],
        ];
        for keys in sequences {
            let next = input.poll(&Held(keys));
            assert!(!previous.opposes(next));
            previous = next;
        }
    }
}
