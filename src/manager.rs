use ggez::graphics::Color;
use log::info;
use rand::rngs::StdRng;
use rand::Rng;

use crate::entities::{Apple, Entity, ScoreBar, Snake, INITIAL_LENGTH};
use crate::frame::Frame;
use crate::grid::{Grid, Position};
use crate::input::KeyState;

pub const SNAKE_ID: usize = 0;
pub const APPLE_ID: usize = 1;

pub const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    GridFilled,
}

/// Owns every entity on the board and runs one tick at a time.
pub struct EntityManager {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    score_bar: ScoreBar,
    rng: StdRng,
    game_over: Option<GameOverReason>,
}

impl EntityManager {
    /// Snake lands in the middle half of the board, kept high enough that its
    /// whole body starts above the score bar; the apple anywhere playable.
    pub fn new(grid: Grid, mut rng: StdRng) -> Self {
        let max_y = (3 * grid.height / 4)
            .min(grid.playable_height() - INITIAL_LENGTH as i32);
        let min_y = (grid.height / 4).min(max_y).max(0);
        let head = Position::new(
            rng.gen_range(grid.width / 4..=3 * grid.width / 4),
            rng.gen_range(min_y..=max_y),
        );
        let snake = Snake::new(SNAKE_ID, head);
        let apple = Apple::spawn(APPLE_ID, &grid, &mut rng);
        Self::with_entities(grid, snake, apple, rng)
    }

    pub fn with_entities(grid: Grid, snake: Snake, apple: Apple, rng: StdRng) -> Self {
        let mut score_bar = ScoreBar::new();
        score_bar.set_score(snake.len());
        EntityManager {
            grid,
            snake,
            apple,
            score_bar,
            rng,
            game_over: None,
        }
    }

    #[cfg(test)]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn score(&self) -> usize {
        self.score_bar.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Run one tick: move everything, then check collisions. Does nothing
    /// once the game is over.
    pub fn update(&mut self, keys: &dyn KeyState) {
        if self.snake.len() >= self.grid.cell_count() {
            self.end(GameOverReason::GridFilled);
        }
        if self.is_game_over() {
            return;
        }

        let entities: [&mut dyn Entity; 3] =
            [&mut self.apple, &mut self.snake, &mut self.score_bar];
        for entity in entities {
            entity.update(keys);
        }

        self.check_collisions();
        self.score_bar.set_score(self.snake.len());
    }

    /// Wall first, then the snake's own body, then the apple. Eating the
    /// apple grows the snake and moves the apple; it never ends the game.
    pub fn check_collisions(&mut self) {
        if !self.grid.is_playable(self.snake.head().pos()) {
            self.end(GameOverReason::Wall);
        }

        if self.snake.hits_itself() {
            self.end(GameOverReason::SelfCollision);
        } else if self.snake.eats(&self.apple) {
            self.snake.grow();
            self.apple.respawn(&self.grid, &mut self.rng);
            info!(
                "snake {} ate apple {}, length {}",
                self.snake.id(),
                self.apple.id(),
                self.snake.len()
            );
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let entities: [&dyn Entity; 3] = [&self.score_bar, &self.apple, &self.snake];
        for entity in entities {
            entity.render(frame);
        }
    }

    pub fn new_frame(&self) -> Frame {
        Frame::new(self.grid, BACKGROUND_COLOR)
    }

    fn end(&mut self, reason: GameOverReason) {
        if self.game_over.is_none() {
            info!("game over: {:?}", reason);
            self.game_over = Some(reason);
        }
    }
}
