use crate::config::Color;
use crate::geometry::{Point, Rect, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
}

/// Pen settings for exactly one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub width: f32,
    pub mode: PaintMode,
}

impl Style {
    pub const fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            mode: PaintMode::Stroke,
        }
    }

    pub const fn fill(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            mode: PaintMode::Fill,
        }
    }
}

/// Pixel bounds of a laid out string, as whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub width: u32,
    pub height: u32,
}

/// Drawing target for the painters.
///
/// Every geometry argument is in the local frame of `transform`.
pub trait Surface {
    /// Circle centred on the local origin.
    fn circle(&mut self, transform: Transform, radius: f32, style: Style);

    fn line(&mut self, transform: Transform, from: Point, to: Point, style: Style);

    fn round_rect(&mut self, transform: Transform, rect: Rect, corner_radius: f32, style: Style);

    /// `origin` is the left end of the text baseline.
    fn text(&mut self, transform: Transform, origin: Point, text: &str, style: Style);

    fn text_bounds(&self, text: &str) -> TextBounds;
}
