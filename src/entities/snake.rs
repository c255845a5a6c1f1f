use super::{Apple, Entity, Segment};
use crate::frame::Frame;
use crate::grid::{Direction, Position};
use crate::input::{Input, KeyState};

pub const INITIAL_LENGTH: usize = 3;

/// The player's snake. Index 0 of `segments` is the head.
#[derive(Clone, Debug)]
pub struct Snake {
    id: usize,
    segments: Vec<Segment>,
    input: Input,
}

impl Snake {
    /// A vertical snake with its head at `head`, body trailing below, facing up.
    pub fn new(id: usize, head: Position) -> Self {
        let segments = (0..INITIAL_LENGTH)
            .map(|i| {
                let pos = Position::new(head.x, head.y + i as i32);
                Segment::new(i, pos, Direction::Up)
            })
            .collect();
        Snake {
            id,
            segments,
            input: Input::new(Direction::Up),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub fn heading(&self) -> Direction {
        self.input.last()
    }

    /// True when the head shares a cell with any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head().collider();
        self.segments[1..]
            .iter()
            .any(|segment| head.collides_with(segment.collider()))
    }

    pub fn eats(&self, apple: &Apple) -> bool {
        self.head().collider().collides_with(apple.collider())
    }

    /// Append a segment one cell behind the tail, moving the same way.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let pos = tail.pos().step(tail.direction().opposite());
        debug_assert!(matches!(tail.pos().direction_to(pos), Ok(d) if d == tail.direction()));
        self.segments
            .push(Segment::new(self.segments.len(), pos, tail.direction()));
    }
}

impl Entity for Snake {
    /// The head takes the polled heading; every other segment takes the
    /// direction its predecessor had before this tick.
    fn update(&mut self, keys: &dyn KeyState) {
        let previous: Vec<Direction> = self.segments.iter().map(Segment::direction).collect();

        let heading = self.input.poll(keys);
        self.segments[0].set_direction(heading);
        self.segments[0].advance();

        for (segment, &ahead) in self.segments[1..].iter_mut().zip(&previous) {
            segment.set_direction(ahead);
            segment.advance();
        }
    }

    fn render(&self, frame: &mut Frame) {
        for segment in &self.segments {
            segment.render(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tests::{none, Held};

    fn positions(snake: &Snake) -> Vec<Position> {
        snake.segments().iter().map(Segment::pos).collect()
    }

    #[test]
    fn spawns_vertical_and_facing_up() {
        let snake = Snake::new(0, Position::new(5, 5));
        assert_eq!(
            positions(&snake),
            vec![Position::new(5, 5), Position::new(5, 6), Position::new(5, 7)]
        );
        assert!(snake
            .segments()
            .iter()
            .all(|s| s.direction() == Direction::Up));
    }

    #[test]
    fn straight_travel_moves_every_segment_n_cells() {
        let mut snake = Snake::new(0, Position::new(10, 10));
        let ticks = 4;
        for _ in 0..ticks {
            snake.update(&none());
        }
        for (i, segment) in snake.segments().iter().enumerate() {
            assert_eq!(segment.pos(), Position::new(10, 10 + i as i32 - ticks));
        }
    }

    #[test]
    fn trailing_segments_follow_the_leader() {
        let mut snake = Snake::new(0, Position::new(5, 5));
        snake.update(&Held(vec![Direction::Left]));
        assert_eq!(
            positions(&snake),
            vec![Position::new(4, 5), Position::new(5, 5), Position::new(5, 6)]
        );

        snake.update(&none());
        assert_eq!(
            positions(&snake),
            vec![Position::new(3, 5), Position::new(4, 5), Position::new(5, 5)]
        );
        assert_eq!(snake.segments()[2].direction(), Direction::Left);
    }

    #[test]
    fn reversal_key_is_ignored() {
        let mut snake = Snake::new(0, Position::new(5, 5));
        snake.update(&Held(vec![Direction::Down]));
        assert_eq!(snake.head().pos(), Position::new(5, 4));
        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn grow_appends_behind_tail() {
        let mut snake = Snake::new(0, Position::new(5, 5));
        snake.update(&Held(vec![Direction::Right]));
        snake.update(&none());
        snake.update(&none());
        let old_tail = *snake.tail();

        snake.grow();

        assert_eq!(snake.len(), INITIAL_LENGTH + 1);
        let new_tail = snake.tail();
        assert_eq!(new_tail.id(), INITIAL_LENGTH);
        assert_eq!(new_tail.direction(), old_tail.direction());
        assert_eq!(
            old_tail.pos().direction_to(new_tail.pos()).unwrap(),
            old_tail.direction()
        );
    }

    #[test]
    fn looping_back_hits_itself() {
        let mut snake = Snake::new(0, Position::new(5, 5));
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), 5);

        snake.update(&Held(vec![Direction::Left]));
        assert!(!snake.hits_itself());
        snake.update(&Held(vec![Direction::Down]));
        assert!(!snake.hits_itself());
        snake.update(&Held(vec![Direction::Right]));
        assert_eq!(snake.head().pos(), Position::new(5, 6));
        assert!(snake.hits_itself());
    }

    #[test]
    fn eats_apple_on_same_cell() {
        let snake = Snake::new(0, Position::new(3, 3));
        assert!(snake.eats(&Apple::new(1, Position::new(3, 3))));
        assert!(!snake.eats(&Apple::new(1, Position::new(3, 4))));
    }
}
