//! Points, rectangles and the rigid transform every primitive is drawn under.
//!
//! Screen space has `y` pointing down, so a positive rotation turns the
//! local frame clockwise: rotating `(0, -1)` by 90° lands on `(1, 0)`.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Half width and half height; edges given in either order are accepted.
    pub fn half_extents(&self) -> (f32, f32) {
        (
            (self.right - self.left).abs() / 2.0,
            (self.bottom - self.top).abs() / 2.0,
        )
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Signed distance from `p` to the outline of this rectangle with its
    /// corners rounded by `corner_radius`; negative inside.
    pub fn rounded_distance(&self, p: Point, corner_radius: f32) -> f32 {
        let (hw, hh) = self.half_extents();
        let r = corner_radius.clamp(0.0, hw.min(hh));
        let c = self.center();
        let qx = (p.x - c.x).abs() - (hw - r);
        let qy = (p.y - c.y).abs() - (hh - r);
        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - r
    }
}

/// Translation followed by a rotation in degrees.
///
/// Composition only ever appends to the local frame, like a canvas matrix:
/// `t.translate(..)` moves along the current (possibly rotated) axes and
/// `t.rotate(..)` turns about the current origin. Being `Copy`, a nested
/// scope is a copy that is dropped when the scope ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    tx: f32,
    ty: f32,
    degrees: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        tx: 0.0,
        ty: 0.0,
        degrees: 0.0,
    };

    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        let offset = self.rotate_vector(Point::new(dx, dy));
        Self {
            tx: self.tx + offset.x,
            ty: self.ty + offset.y,
            degrees: self.degrees,
        }
    }

    #[must_use]
    pub fn rotate(self, degrees: f32) -> Self {
        Self {
            degrees: self.degrees + degrees,
            ..self
        }
    }

    /// Local origin in device space.
    pub fn origin(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    /// Accumulated rotation folded into `[0, 360)`.
    pub fn rotation_degrees(&self) -> f32 {
        self.degrees.rem_euclid(360.0)
    }

    /// Maps a local point to device space.
    pub fn apply(&self, p: Point) -> Point {
        let v = self.rotate_vector(p);
        Point::new(self.tx + v.x, self.ty + v.y)
    }

    /// Maps a device point back into the local frame.
    pub fn invert(&self, p: Point) -> Point {
        let (sin, cos) = self.degrees.to_radians().sin_cos();
        let dx = p.x - self.tx;
        let dy = p.y - self.ty;
        Point::new(dx * cos + dy * sin, -dx * sin + dy * cos)
    }

    fn rotate_vector(&self, v: Point) -> Point {
        let (sin, cos) = self.degrees.to_radians().sin_cos();
        Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }
}
