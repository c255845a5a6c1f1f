use ggez::graphics::Color;
use log::debug;
use rand::Rng;

use super::Entity;
use crate::frame::Frame;
use crate::grid::{Collider, Grid, Position};
use crate::input::KeyState;

pub const APPLE_COLOR: Color = Color::RED;

#[derive(Clone, Copy, Debug)]
pub struct Apple {
    id: usize,
    pos: Position,
    collider: Collider,
}

impl Apple {
    pub fn new(id: usize, pos: Position) -> Self {
        Apple {
            id,
            pos,
            collider: Collider::new(pos),
        }
    }

    /// Place a fresh apple on a random playable cell.
    pub fn spawn(id: usize, grid: &Grid, rng: &mut impl Rng) -> Self {
        Apple::new(id, Self::random_cell(grid, rng))
    }

    pub fn id(&self) -> usize {
        self.id
    }

    #[cfg(test)]
    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Move to a random cell above the score bar. Cells under the snake are
    /// not excluded.
    pub fn respawn(&mut self, grid: &Grid, rng: &mut impl Rng) {
        self.pos = Self::random_cell(grid, rng);
        self.collider = Collider::new(self.pos);
        debug!("apple {} respawned at ({}, {})", self.id, self.pos.x, self.pos.y);
    }

    fn random_cell(grid: &Grid, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.gen_range(0..grid.width),
            rng.gen_range(0..grid.playable_height()),
        )
    }
}

impl Entity for Apple {
    fn update(&mut self, _keys: &dyn KeyState) {}

    fn render(&self, frame: &mut Frame) {
        frame.fill_cell(self.pos, APPLE_COLOR);
    }
}
