//! Software rasterizer over an RGBA frame buffer.
//!
//! All primitives are anti-aliased by coverage: a pixel is blended with an
//! alpha that falls off over one pixel at the shape edge.

use crate::config::Color;
use crate::geometry::{Point, Rect, Transform};
use crate::surface::{PaintMode, Style};
use rusttype::PositionedGlyph;

// ============================================================================
// CORE DATA TYPES
// ============================================================================

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// `frame` holds RGBA pixels, row-major, `width` per row. Rows past the
    /// end of a short frame are dropped, so `height` never outruns it.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let height = match width * 4 {
            0 => 0,
            stride => height.min(frame.len() / stride),
        };
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(
            self.frame[idx],
            self.frame[idx + 1],
            self.frame[idx + 2],
        ))
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color, alpha: f32) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let a = alpha.clamp(0.0, 1.0);
            let blend =
                |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
            let out = [
                blend(color.r, self.frame[idx]),
                blend(color.g, self.frame[idx + 1]),
                blend(color.b, self.frame[idx + 2]),
                0xff,
            ];
            self.frame[idx..idx + 4].copy_from_slice(&out);
        }
    }

    /// Pixel rows and columns covering `[min, max]`, clipped to the frame.
    fn clip(&self, min: Point, max: Point) -> Option<(usize, usize, usize, usize)> {
        if max.x < 0.0 || max.y < 0.0 {
            return None;
        }
        let x0 = min.x.floor().max(0.0) as usize;
        let y0 = min.y.floor().max(0.0) as usize;
        let x1 = (max.x.ceil().max(0.0) as usize).min(self.width.saturating_sub(1));
        let y1 = (max.y.ceil().max(0.0) as usize).min(self.height.saturating_sub(1));
        if self.width == 0 || self.height == 0 || x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }

    fn cover<F>(&mut self, min: Point, max: Point, color: Color, coverage: F)
    where
        F: Fn(Point) -> f32,
    {
        let Some((x0, y0, x1, y1)) = self.clip(min, max) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let aa = coverage(Point::new(x as f32, y as f32));
                if aa > 0.01 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }
}

/// Alpha for a pixel whose distance past the edge is `outside`.
fn edge_alpha(outside: f32) -> f32 {
    1.0 - outside.clamp(0.0, 1.0)
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

pub fn draw_thick_line_aa(
    canvas: &mut Canvas,
    from: Point,
    to: Point,
    thickness: f32,
    color: Color,
) {
    let pad = thickness.ceil() + 1.0;
    let min = Point::new(from.x.min(to.x) - pad, from.y.min(to.y) - pad);
    let max = Point::new(from.x.max(to.x) + pad, from.y.max(to.y) + pad);
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len_sq = dx * dx + dy * dy;
    canvas.cover(min, max, color, |p| {
        let t = if len_sq > 0.0 {
            (((p.x - from.x) * dx + (p.y - from.y) * dy) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let nearest = Point::new(from.x + t * dx, from.y + t * dy);
        edge_alpha(nearest.distance(p) - thickness / 2.0)
    });
}

/// Circle outline, the stroke centred on `radius`.
pub fn draw_ring(canvas: &mut Canvas, center: Point, radius: f32, thickness: f32, color: Color) {
    let reach = radius + thickness / 2.0 + 1.0;
    let min = Point::new(center.x - reach, center.y - reach);
    let max = Point::new(center.x + reach, center.y + reach);
    canvas.cover(min, max, color, |p| {
        edge_alpha((p.distance(center) - radius).abs() - thickness / 2.0)
    });
}

pub fn draw_disc(canvas: &mut Canvas, center: Point, radius: f32, color: Color) {
    let reach = radius + 1.0;
    let min = Point::new(center.x - reach, center.y - reach);
    let max = Point::new(center.x + reach, center.y + reach);
    canvas.cover(min, max, color, |p| edge_alpha(p.distance(center) - radius));
}

/// Rounded rectangle drawn in the rotated frame of `transform`.
pub fn draw_round_rect(
    canvas: &mut Canvas,
    transform: Transform,
    rect: Rect,
    corner_radius: f32,
    style: Style,
) {
    let pad = match style.mode {
        PaintMode::Stroke => style.width / 2.0 + 1.0,
        PaintMode::Fill => 1.0,
    };
    let corners = rect.corners().map(|c| transform.apply(c));
    let min = corners.iter().fold(Point::new(f32::MAX, f32::MAX), |acc, c| {
        Point::new(acc.x.min(c.x - pad), acc.y.min(c.y - pad))
    });
    let max = corners.iter().fold(Point::new(f32::MIN, f32::MIN), |acc, c| {
        Point::new(acc.x.max(c.x + pad), acc.y.max(c.y + pad))
    });
    canvas.cover(min, max, style.color, |p| {
        let d = rect.rounded_distance(transform.invert(p), corner_radius);
        match style.mode {
            PaintMode::Stroke => edge_alpha(d.abs() - style.width / 2.0),
            PaintMode::Fill => edge_alpha(d),
        }
    });
}

/// Glyphs laid out in the local frame of `transform`.
pub fn draw_glyphs(
    canvas: &mut Canvas,
    transform: Transform,
    glyphs: &[PositionedGlyph],
    color: Color,
) {
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                if v > 0.001 {
                    let local = Point::new(
                        (bb.min.x + gx as i32) as f32,
                        (bb.min.y + gy as i32) as f32,
                    );
                    draw_antialiased_pixel(canvas, transform.apply(local), color, v);
                }
            });
        }
    }
}

/// Splats one sample over the four nearest pixels.
fn draw_antialiased_pixel(canvas: &mut Canvas, p: Point, color: Color, alpha: f32) {
    let x_floor = p.x.floor();
    let y_floor = p.y.floor();
    let x_frac = p.x - x_floor;
    let y_frac = p.y - y_floor;

    let samples = [
        (x_floor, y_floor, (1.0 - x_frac) * (1.0 - y_frac)),
        (x_floor + 1.0, y_floor, x_frac * (1.0 - y_frac)),
        (x_floor, y_floor + 1.0, (1.0 - x_frac) * y_frac),
        (x_floor + 1.0, y_floor + 1.0, x_frac * y_frac),
    ];

    for (px, py, weight) in samples {
        if px >= 0.0 && py >= 0.0 {
            let final_alpha = alpha * weight;
            if final_alpha > 0.001 {
                canvas.set_pixel(px as usize, py as usize, color, final_alpha);
            }
        }
    }
}
