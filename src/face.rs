use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::geometry::Transform;
use crate::layout::{self, DialGeometry, SizeConstraint};
use crate::painter;
use crate::surface::Surface;
use crate::time::TimeSample;

/// The clock face: sizes itself to the host's constraints and paints one
/// frame for a given time.
///
/// The only state kept between frames is the last resolved geometry, whose
/// radius bounds the next `AtMost` resolution.
#[derive(Debug, Clone)]
pub struct ClockFace {
    config: ClockConfig,
    geometry: DialGeometry,
}

impl ClockFace {
    pub fn new(config: ClockConfig) -> Self {
        let geometry = DialGeometry::unmeasured(config.initial_radius);
        Self { config, geometry }
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// Negotiates the face size and returns the `(width, height)` to report
    /// back to the host. On error the previous geometry is kept.
    pub fn measure(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
    ) -> Result<(u32, u32), ClockError> {
        let layout = layout::resolve(
            width,
            height,
            self.geometry.radius,
            self.config.circle_stroke_width,
        )?;
        self.geometry = layout.geometry;
        Ok((layout.width, layout.height))
    }

    /// Measures against a surface of fixed pixel size. The outline reserve is
    /// taken out of the surface first, so the resolved box matches it.
    pub fn measure_surface(&mut self, width: u32, height: u32) -> Result<(u32, u32), ClockError> {
        let reserve = (self.config.circle_stroke_width * 2.0) as u32;
        self.measure(
            SizeConstraint::Exact(width.saturating_sub(reserve)),
            SizeConstraint::Exact(height.saturating_sub(reserve)),
        )
    }

    /// Paints dial, scale and pointers in that order.
    ///
    /// A dial without drawable radius paints nothing and reports
    /// [`ClockError::DegenerateGeometry`]; the caller decides whether to
    /// skip the frame.
    pub fn paint<S: Surface>(&self, surface: &mut S, time: TimeSample) -> Result<(), ClockError> {
        let DialGeometry {
            center_x,
            center_y,
            radius,
        } = self.geometry;
        if !self.geometry.is_drawable() {
            return Err(ClockError::DegenerateGeometry { radius });
        }

        let origin = Transform::IDENTITY.translate(center_x, center_y);
        painter::draw_dial(surface, origin, radius, &self.config);
        painter::draw_scale(surface, origin, radius, &self.config);
        painter::draw_pointers(surface, origin, radius, time, &self.config);
        Ok(())
    }
}
