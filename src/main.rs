//! Grid snake: eat apples, grow, and stay off the walls and your own tail.

mod app;
mod config;
mod entities;
mod error;
mod frame;
mod grid;
mod input;
mod manager;
mod session;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameResult};
use log::{info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::app::App;
use crate::config::{GameConfig, CONFIG_FILE};
use crate::error::SnakeError;
use crate::manager::EntityManager;
use crate::session::Session;

fn init_logging(config: &GameConfig) -> Result<(), SnakeError> {
    let level = config.level_filter();
    TermLogger::init(
        level.unwrap_or(LevelFilter::Info),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    if level.is_none() {
        warn!("unknown log level {:?}, using info", config.log_level);
    }
    Ok(())
}

fn main() -> GameResult {
    let config = GameConfig::load(CONFIG_FILE)?;
    init_logging(&config)?;

    let grid = config.grid();
    info!(
        "starting {}x{} board at {} ticks/s",
        grid.width, grid.height, config.ticks_per_second
    );

    let (width, height) = grid.window_size();
    let window_setup = WindowSetup::default().title("Snake").vsync(true);
    let window_mode = WindowMode::default()
        .dimensions(width, height)
        .resizable(false);

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let session = Session::new(EntityManager::new(grid, config.rng()));
    let app = App::new(session, config.ticks_per_second);
    event::run(ctx, event_loop, app)
}
