use crate::error::SnakeError;

pub const GRID_WIDTH: i32 = 30;
pub const GRID_HEIGHT: i32 = 30;
pub const GRID_CELL_SIZE: i32 = 20;

/// Dimensions of the board, in cells, plus the pixel size of one cell.
///
/// The bottom row belongs to the score bar and is never playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: GRID_CELL_SIZE,
        }
    }
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Grid {
            width,
            height,
            cell_size,
        }
    }

    /// Window dimensions in pixels.
    pub fn window_size(&self) -> (f32, f32) {
        (
            (self.width * self.cell_size) as f32,
            (self.height * self.cell_size) as f32,
        )
    }

    pub fn playable_height(&self) -> i32 {
        self.height - 1
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// True when `pos` is inside the board and above the score bar.
    pub fn is_playable(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.playable_height()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Direction of the single step that leads from `from` to `self`.
    pub fn direction_to(&self, from: Position) -> Result<Direction, SnakeError> {
        let dx = self.x - from.x;
        let dy = self.y - from.y;
        match (dx, dy) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(SnakeError::NotAdjacent { dx, dy }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Evaluation order used when several direction keys are held at once.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when moving along `other` would reverse `self`.
    pub fn opposes(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

/// Collision primitive: two colliders touch when they sit on the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collider {
    pos: Position,
}

impl Collider {
    pub fn new(pos: Position) -> Self {
        Collider { pos }
    }

    #[cfg(test)]
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn collides_with(&self, other: &Collider) -> bool {
        self.pos == other.pos
    }
}
