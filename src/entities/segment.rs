use ggez::graphics::Color;

use super::Entity;
use crate::frame::Frame;
use crate::grid::{Collider, Direction, Position};
use crate::input::KeyState;

pub const SEGMENT_COLOR: Color = Color::GREEN;

/// One cell of the snake's body.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    id: usize,
    pos: Position,
    direction: Direction,
    collider: Collider,
}

impl Segment {
    pub fn new(id: usize, pos: Position, direction: Direction) -> Self {
        Segment {
            id,
            pos,
            direction,
            collider: Collider::new(pos),
        }
    }

    #[cfg(test)]
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Step one cell along the current direction. Leaving the board is
    /// allowed here; the wall check catches it afterwards.
    pub fn advance(&mut self) {
        self.pos = self.pos.step(self.direction);
        self.collider = Collider::new(self.pos);
    }
}

impl Entity for Segment {
    fn update(&mut self, _keys: &dyn KeyState) {
        self.advance();
    }

    fn render(&self, frame: &mut Frame) {
        frame.fill_cell(self.pos, SEGMENT_COLOR);
    }
}
