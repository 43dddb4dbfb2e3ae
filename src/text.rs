use crate::error::ClockError;
use crate::surface::TextBounds;
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bold faces commonly shipped with desktop systems, tried in order.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Advance of one glyph, relative to the font size, when no font is loaded.
const ESTIMATED_ADVANCE: f32 = 0.55;
/// Height of a digit, relative to the font size, when no font is loaded.
const ESTIMATED_CAP_HEIGHT: f32 = 0.72;

/// Font and size used for the dial numerals.
///
/// Without font data the typeface still measures text (by estimate) so that
/// layout stays stable, but nothing is drawn.
#[derive(Clone)]
pub struct Typeface {
    font: Option<Font<'static>>,
    size: f32,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("loaded", &self.font.is_some())
            .field("size", &self.size)
            .finish()
    }
}

impl Typeface {
    pub fn load(path: &Path, size: f32) -> Result<Self, ClockError> {
        let data = std::fs::read(path).map_err(|source| ClockError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| ClockError::FontParse {
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), size, "loaded numeral font");
        Ok(Self {
            font: Some(font),
            size,
        })
    }

    /// Loads `path` when given, else the first usable system font, else
    /// falls back to an estimating typeface.
    pub fn discover(path: Option<&Path>, size: f32) -> Result<Self, ClockError> {
        if let Some(path) = path {
            return Self::load(path, size);
        }
        for candidate in SYSTEM_FONTS.iter().map(PathBuf::from) {
            if !candidate.is_file() {
                continue;
            }
            match Self::load(&candidate, size) {
                Ok(typeface) => return Ok(typeface),
                Err(err) => debug!(%err, "skipping system font"),
            }
        }
        warn!("no usable font found, dial numerals will not be drawn");
        Ok(Self::estimated(size))
    }

    pub fn estimated(size: f32) -> Self {
        Self { font: None, size }
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    /// Glyphs for `text` with the baseline starting at `(x, y)`.
    pub fn layout(&self, text: &str, x: f32, y: f32) -> Vec<PositionedGlyph<'static>> {
        match &self.font {
            Some(font) => font
                .layout(text, Scale::uniform(self.size), point(x, y))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Union of the glyph pixel boxes, measured at the baseline origin.
    pub fn bounds(&self, text: &str) -> TextBounds {
        if self.font.is_none() {
            let chars = text.chars().count() as f32;
            return TextBounds {
                width: (chars * self.size * ESTIMATED_ADVANCE).round() as u32,
                height: (self.size * ESTIMATED_CAP_HEIGHT).round() as u32,
            };
        }
        let (min_x, max_x, min_y, max_y) = self
            .layout(text, 0.0, 0.0)
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        TextBounds {
            width: if min_x < max_x { (max_x - min_x) as u32 } else { 0 },
            height: if min_y < max_y { (max_y - min_y) as u32 } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn estimate_grows_with_length() {
        let face = Typeface::estimated(35.0);
        let one = face.bounds("1");
        let twelve = face.bounds("12");
        assert_eq!(one.height, twelve.height);
        assert!(twelve.width > one.width);
        assert_eq!(face.bounds("12"), TextBounds { width: 39, height: 25 });
    }

    #[test]
    fn estimated_face_lays_out_nothing() {
        let face = Typeface::estimated(35.0);
        assert!(!face.is_loaded());
        assert!(face.layout("12", 0.0, 0.0).is_empty());
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = Typeface::load(Path::new("/nonexistent/font.ttf"), 35.0).unwrap_err();
        assert!(matches!(err, ClockError::FontRead { .. }));
    }

    #[test]
    fn explicit_path_is_not_replaced_by_fallback() {
        let result = Typeface::discover(Some(Path::new("/nonexistent/font.ttf")), 35.0);
        assert!(result.is_err());
    }
}
