use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;

use crate::error::SnakeError;
use crate::grid::{Grid, GRID_CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};

pub const CONFIG_FILE: &str = "snake.json";
pub const TICKS_PER_SECOND: u32 = 12;
const MIN_GRID_CELLS: i32 = 6;
/// Largest window side, in pixels.
pub const MAX_WINDOW_SIDE: i32 = 8192;

/// Settings read from `snake.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Pixel size of one cell.
    pub cell_size: i32,
    pub ticks_per_second: u32,
    /// Fixed seed for apple and spawn placement; random when absent.
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: GRID_CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Read and validate the config at `path`. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnakeError> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => GameConfig::default(),
            Err(e) => return Err(e.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, SnakeError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.grid_width < MIN_GRID_CELLS || self.grid_height < MIN_GRID_CELLS {
            return Err(SnakeError::InvalidConfig("grid must be at least 6x6 cells"));
        }
        if self.cell_size <= 0 {
            return Err(SnakeError::InvalidConfig("cell_size must be positive"));
        }
        let fits = |cells: i32| {
            cells
                .checked_mul(self.cell_size)
                .map_or(false, |side| side <= MAX_WINDOW_SIDE)
        };
        if !fits(self.grid_width) || !fits(self.grid_height) {
            return Err(SnakeError::InvalidConfig(
                "window must be at most 8192 pixels a side",
            ));
        }
        if self.ticks_per_second == 0 {
            return Err(SnakeError::InvalidConfig("ticks_per_second must be positive"));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height, self.cell_size)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Parsed log level, or `None` if the string is not a level name.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse().ok()
    }
}
