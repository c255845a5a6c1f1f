use ggez::graphics::Color;
use log::info;

use crate::frame::Frame;
use crate::input::KeyState;
use crate::manager::EntityManager;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    Playing,
    /// Terminal; only a restart of the process leaves it.
    GameOver,
}

/// Game flow around the board: start screen, play, game over.
pub struct Session {
    phase: Phase,
    manager: EntityManager,
}

impl Session {
    pub fn new(manager: EntityManager) -> Self {
        Session {
            phase: Phase::AwaitingStart,
            manager,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn manager(&self) -> &EntityManager {
        &self.manager
    }

    /// Any key leaves the start screen.
    pub fn on_key_down(&mut self) {
        if self.phase == Phase::AwaitingStart {
            info!("game started");
            self.phase = Phase::Playing;
        }
    }

    pub fn tick(&mut self, keys: &dyn KeyState) {
        if self.phase != Phase::Playing {
            return;
        }
        self.manager.update(keys);
        if self.manager.is_game_over() {
            info!(
                "final score {} ({:?})",
                self.manager.score(),
                self.manager.game_over_reason()
            );
            self.phase = Phase::GameOver;
        }
    }

    pub fn render(&self) -> Frame {
        let mut frame = self.manager.new_frame();
        let grid = frame.grid();
        match self.phase {
            Phase::AwaitingStart => {
                let (width, _) = grid.window_size();
                frame.centered_text("Press any key to start", width / 20.0, Color::WHITE);
            }
            Phase::Playing => self.manager.render(&mut frame),
            Phase::GameOver => {
                frame.centered_text("Game Over!", grid.width as f32, Color::RED);
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Apple, Snake};
    use crate::frame::Shape;
    use crate::grid::{Direction, Grid, Position};
    use crate::input::tests::{none, Held};
    use crate::manager::{APPLE_ID, SNAKE_ID};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_at(head: Position) -> Session {
        let manager = EntityManager::with_entities(
            Grid::default(),
            Snake::new(SNAKE_ID, head),
            Apple::new(APPLE_ID, Position::new(20, 2)),
            StdRng::seed_from_u64(1),
        );
        Session::new(manager)
    }

    fn only_text(frame: &Frame) -> String {
        match frame.shapes() {
            [Shape::Text { text, .. }] => text.clone(),
            other => panic!("expected a single text shape, got {:?}", other),
        }
    }

    #[test]
    fn waits_for_a_key_before_moving() {
        let mut session = session_at(Position::new(5, 5));
        session.tick(&none());
        assert_eq!(session.phase(), Phase::AwaitingStart);
        assert_eq!(session.manager().snake().head().pos(), Position::new(5, 5));
        assert_eq!(only_text(&session.render()), "Press any key to start");

        session.on_key_down();
        assert_eq!(session.phase(), Phase::Playing);
        session.tick(&none());
        assert_eq!(session.manager().snake().head().pos(), Position::new(5, 4));
    }

    #[test]
    fn wall_hit_is_terminal() {
        let mut session = session_at(Position::new(0, 5));
        session.on_key_down();
        session.tick(&Held(vec![Direction::Left]));
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(only_text(&session.render()), "Game Over!");

        session.on_key_down();
        session.tick(&none());
        assert_eq!(session.phase(), Phase::GameOver);
    }
}
