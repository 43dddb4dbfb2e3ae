use crate::config::Color;
use crate::geometry::{Point, Rect, Transform};
use crate::raster::{self, Canvas};
use crate::surface::{PaintMode, Style, Surface, TextBounds};
use crate::text::Typeface;

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        transform: Transform,
        radius: f32,
        style: Style,
    },
    Line {
        transform: Transform,
        from: Point,
        to: Point,
        style: Style,
    },
    RoundRect {
        transform: Transform,
        rect: Rect,
        corner_radius: f32,
        style: Style,
    },
    Text {
        transform: Transform,
        origin: Point,
        text: String,
        style: Style,
    },
}

/// Records a frame so it can be inspected or replayed onto a [`Canvas`].
pub struct Scene<'a> {
    typeface: &'a Typeface,
    commands: Vec<DrawCommand>,
}

impl<'a> Scene<'a> {
    pub fn new(typeface: &'a Typeface) -> Self {
        Self {
            typeface,
            commands: Vec::new(),
        }
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => {
                    canvas.clear(*color);
                }
                DrawCommand::Circle {
                    transform,
                    radius,
                    style,
                } => {
                    let center = transform.origin();
                    match style.mode {
                        PaintMode::Stroke => {
                            raster::draw_ring(canvas, center, *radius, style.width, style.color)
                        }
                        PaintMode::Fill => {
                            raster::draw_disc(canvas, center, *radius, style.color)
                        }
                    }
                }
                DrawCommand::Line {
                    transform,
                    from,
                    to,
                    style,
                } => {
                    raster::draw_thick_line_aa(
                        canvas,
                        transform.apply(*from),
                        transform.apply(*to),
                        style.width,
                        style.color,
                    );
                }
                DrawCommand::RoundRect {
                    transform,
                    rect,
                    corner_radius,
                    style,
                } => {
                    raster::draw_round_rect(canvas, *transform, *rect, *corner_radius, *style);
                }
                DrawCommand::Text {
                    transform,
                    origin,
                    text,
                    style,
                } => {
                    let glyphs = self.typeface.layout(text, origin.x, origin.y);
                    raster::draw_glyphs(canvas, *transform, &glyphs, style.color);
                }
            }
        }
    }
}

impl Surface for Scene<'_> {
    fn circle(&mut self, transform: Transform, radius: f32, style: Style) {
        self.add_command(DrawCommand::Circle {
            transform,
            radius,
            style,
        });
    }

    fn line(&mut self, transform: Transform, from: Point, to: Point, style: Style) {
        self.add_command(DrawCommand::Line {
            transform,
            from,
            to,
            style,
        });
    }

    fn round_rect(&mut self, transform: Transform, rect: Rect, corner_radius: f32, style: Style) {
        self.add_command(DrawCommand::RoundRect {
            transform,
            rect,
            corner_radius,
            style,
        });
    }

    fn text(&mut self, transform: Transform, origin: Point, text: &str, style: Style) {
        self.add_command(DrawCommand::Text {
            transform,
            origin,
            text: text.to_string(),
            style,
        });
    }

    fn text_bounds(&self, text: &str) -> TextBounds {
        self.typeface.bounds(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let typeface = Typeface::estimated(35.0);
        let mut scene = Scene::new(&typeface);
        scene.add_command(DrawCommand::Clear(Color::WHITE));
        scene.circle(Transform::IDENTITY, 10.0, Style::stroke(Color::BLACK, 4.0));
        scene.text(
            Transform::IDENTITY,
            Point::ORIGIN,
            "7",
            Style::fill(Color::BLACK, 1.0),
        );
        assert_eq!(scene.commands().len(), 3);
        assert!(matches!(scene.commands()[0], DrawCommand::Clear(_)));
        assert!(matches!(scene.commands()[1], DrawCommand::Circle { .. }));
        assert!(
            matches!(&scene.commands()[2], DrawCommand::Text { text, .. } if text == "7")
        );
    }

    #[test]
    fn replays_onto_canvas() {
        let typeface = Typeface::estimated(35.0);
        let mut scene = Scene::new(&typeface);
        scene.add_command(DrawCommand::Clear(Color::WHITE));
        scene.circle(
            Transform::IDENTITY.translate(8.0, 8.0),
            3.0,
            Style::fill(Color::RED, 1.0),
        );

        let mut frame = vec![0u8; 16 * 16 * 4];
        let mut canvas = Canvas::new(&mut frame, 16, 16);
        scene.render(&mut canvas);

        assert_eq!(canvas.pixel(8, 8), Some(Color::RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }
}
