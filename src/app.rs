use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, Text, TextLayout};
use ggez::input::keyboard::KeyInput;
use ggez::mint::Point2;
use ggez::{Context, GameResult};
use log::info;

use crate::frame::{Frame, Shape};
use crate::session::Session;

/// Bridges the session to ggez: paces ticks and paints frames.
pub struct App {
    session: Session,
    ticks_per_second: u32,
}

impl App {
    pub fn new(session: Session, ticks_per_second: u32) -> Self {
        App {
            session,
            ticks_per_second,
        }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.ticks_per_second) {
            self.session.tick(&ctx.keyboard);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let frame = self.session.render();
        let mut canvas = Canvas::from_frame(ctx, frame.background());
        paint(ctx, &mut canvas, &frame)?;
        canvas.finish(ctx)
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        _input: KeyInput,
        _repeated: bool,
    ) -> GameResult {
        self.session.on_key_down();
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("window closed, exiting");
        Ok(false)
    }
}

fn paint(ctx: &mut Context, canvas: &mut Canvas, frame: &Frame) -> GameResult {
    for shape in frame.shapes() {
        match shape {
            Shape::Cell { pos, color } => {
                let rect = frame.cell_rect(*pos);
                let mesh = Mesh::new_rectangle(ctx, DrawMode::fill(), rect, *color)?;
                canvas.draw(&mesh, DrawParam::default());
            }
            Shape::Rect { rect, color } => {
                let mesh = Mesh::new_rectangle(ctx, DrawMode::fill(), *rect, *color)?;
                canvas.draw(&mesh, DrawParam::default());
            }
            Shape::Text {
                text,
                dest,
                scale,
                color,
                centered,
            } => {
                let mut text = Text::new(text.as_str());
                text.set_scale(*scale);
                if *centered {
                    text.set_layout(TextLayout::center());
                }
                canvas.draw(
                    &text,
                    DrawParam::default()
                        .dest(Point2 { x: dest.0, y: dest.1 })
                        .color(*color),
                );
            }
        }
    }
    Ok(())
}

