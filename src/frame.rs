use ggez::graphics::{Color, Rect};

use crate::grid::{Grid, Position};

/// One thing to paint. Rects are in pixels; cells are in grid units.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Cell {
        pos: Position,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        dest: (f32, f32),
        scale: f32,
        color: Color,
        centered: bool,
    },
}

/// Draw list built by entities each frame and painted by the app.
#[derive(Clone, Debug)]
pub struct Frame {
    grid: Grid,
    background: Color,
    shapes: Vec<Shape>,
}

impl Frame {
    pub fn new(grid: Grid, background: Color) -> Self {
        Frame {
            grid,
            background,
            shapes: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn fill_cell(&mut self, pos: Position, color: Color) {
        self.shapes.push(Shape::Cell { pos, color });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.shapes.push(Shape::Rect { rect, color });
    }

    pub fn text(&mut self, text: impl Into<String>, dest: (f32, f32), scale: f32, color: Color) {
        self.shapes.push(Shape::Text {
            text: text.into(),
            dest,
            scale,
            color,
            centered: false,
        });
    }

    /// Text centred on the middle of the window.
    pub fn centered_text(&mut self, text: impl Into<String>, scale: f32, color: Color) {
        let (w, h) = self.grid.window_size();
        self.shapes.push(Shape::Text {
            text: text.into(),
            dest: (w / 2.0, h / 2.0),
            scale,
            color,
            centered: true,
        });
    }

    /// Pixel rectangle covering one grid cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let size = self.grid.cell_size;
        Rect::new(
            (pos.x * size) as f32,
            (pos.y * size) as f32,
            size as f32,
            size as f32,
        )
    }
}
