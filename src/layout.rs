use crate::error::ClockError;
use tracing::debug;

/// Size bound handed down by the host for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    Exact(u32),
    AtMost(u32),
    Unspecified,
}

impl SizeConstraint {
    /// Size this axis settles on before the outline reserve is added.
    fn resolve(self, prior_radius: f32, axis: &'static str) -> Result<u32, ClockError> {
        match self {
            SizeConstraint::Exact(size) => Ok(size),
            SizeConstraint::AtMost(size) => Ok(((prior_radius * 2.0) as u32).min(size)),
            SizeConstraint::Unspecified => Err(ClockError::UnspecifiedConstraint { axis }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl DialGeometry {
    /// Geometry before any layout pass: centred on the origin.
    pub fn unmeasured(radius: f32) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius,
        }
    }

    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0
    }
}

/// Outcome of one size negotiation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub geometry: DialGeometry,
}

/// Resolves both axes, reserving room for the outline stroke on each side.
///
/// The radius follows the resolved width only, so a non-square box gets a
/// dial sized to its width. Tiny bounds yield a tiny or zero radius rather
/// than an error. Sizes too close to `u32::MAX` to fit the reserve saturate
/// at `u32::MAX`.
pub fn resolve(
    width: SizeConstraint,
    height: SizeConstraint,
    prior_radius: f32,
    circle_stroke_width: f32,
) -> Result<Layout, ClockError> {
    let reserve = (circle_stroke_width * 2.0) as u32;
    let width = width.resolve(prior_radius, "width")?.saturating_add(reserve);
    let height = height.resolve(prior_radius, "height")?.saturating_add(reserve);
    let radius = (width as f32 - circle_stroke_width * 2.0) / 2.0;

    debug!(width, height, radius, "resolved dial layout");

    Ok(Layout {
        width,
        height,
        geometry: DialGeometry {
            center_x: (width / 2) as f32,
            center_y: (height / 2) as f32,
            radius,
        },
    })
}
