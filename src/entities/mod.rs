//! Everything that lives on the board. Each entity advances once per tick and
//! describes itself into a [`Frame`] for painting.

mod apple;
mod score_bar;
mod segment;
mod snake;

pub use apple::Apple;
pub use score_bar::ScoreBar;
pub use segment::Segment;
pub use snake::{Snake, INITIAL_LENGTH};

use crate::frame::Frame;
use crate::input::KeyState;

pub trait Entity {
    /// Advance one tick. `keys` is the keyboard state sampled for this tick.
    fn update(&mut self, keys: &dyn KeyState);

    fn render(&self, frame: &mut Frame);
}
