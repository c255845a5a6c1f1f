use ggez::graphics::{Color, Rect};

use super::Entity;
use crate::frame::Frame;
use crate::input::KeyState;

pub const BAR_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::BLACK;

/// White strip along the bottom row showing the snake's length.
#[derive(Clone, Debug, Default)]
pub struct ScoreBar {
    score: usize,
}

impl ScoreBar {
    pub fn new() -> Self {
        ScoreBar::default()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    pub fn label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

impl Entity for ScoreBar {
    fn update(&mut self, _keys: &dyn KeyState) {}

    fn render(&self, frame: &mut Frame) {
        let grid = frame.grid();
        let (width, height) = grid.window_size();
        let cell = grid.cell_size as f32;
        frame.fill_rect(Rect::new(0.0, height - cell, width, cell), BAR_COLOR);
        frame.text(self.label(), (4.0, height - cell + 2.0), cell, TEXT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Shape;
    use crate::grid::Grid;

    #[test]
    fn renders_strip_and_label_on_bottom_row() {
        let mut bar = ScoreBar::new();
        bar.set_score(7);
        let mut frame = Frame::new(Grid::new(10, 8, 20), Color::BLACK);
        bar.render(&mut frame);

        assert_eq!(
            frame.shapes()[0],
            Shape::Rect {
                rect: Rect::new(0.0, 140.0, 200.0, 20.0),
                color: BAR_COLOR,
            }
        );
        match &frame.shapes()[1] {
            Shape::Text { text, color, .. } => {
                assert_eq!(text, "Score: 7");
                assert_eq!(*color, TEXT_COLOR);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
