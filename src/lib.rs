// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod painter;
pub mod raster;
pub mod scene;
pub mod schedule;
pub mod surface;
pub mod text;
pub mod time;

pub use config::{ClockConfig, Color, HandStyle};
pub use error::ClockError;
pub use face::ClockFace;
pub use layout::{DialGeometry, SizeConstraint};
pub use raster::Canvas;
pub use scene::{DrawCommand, Scene};
pub use schedule::FrameScheduler;
pub use surface::{PaintMode, Style, Surface, TextBounds};
pub use text::Typeface;
pub use time::{FixedTime, HandAngles, LocalClock, TimeSample, TimeSource};

// External crate imports
use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info, warn};

// Standard library imports
use std::time::Instant;

// Window management imports
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Window host for a [`ClockFace`].
#[derive(Debug, Clone)]
pub struct Clock {
    config: ClockConfig,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Shows the clock with system local time until the window is closed.
    pub fn show(&self) -> Result<(), ClockError> {
        self.show_with(LocalClock)
    }

    pub fn show_with<T: TimeSource>(&self, time_source: T) -> Result<(), ClockError> {
        let typeface = Typeface::discover(
            self.config.font_path.as_deref(),
            self.config.number_font_size,
        )?;
        self.run_window(typeface, time_source)
    }

    fn run_window<T: TimeSource>(
        &self,
        typeface: Typeface,
        time_source: T,
    ) -> Result<(), ClockError> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let mut face = ClockFace::new(self.config.clone());
        let size = window.inner_size();
        let (mut fb_width, mut fb_height) = fit_to_window(&mut face, size).unwrap_or((1, 1));
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(fb_width, fb_height, surface_texture)?;

        let background = self.config.background_color;
        let mut scheduler = FrameScheduler::new(self.config.refresh_interval, Instant::now());
        info!(
            width = fb_width,
            height = fb_height,
            interval_ms = scheduler.interval().as_millis() as u64,
            "clock window open"
        );

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    if let Some((width, height)) = fit_to_window(&mut face, new_size) {
                        match pixels.resize_buffer(width, height) {
                            Ok(()) => {
                                fb_width = width;
                                fb_height = height;
                            }
                            Err(err) => warn!(%err, "failed to resize frame buffer"),
                        }
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height)
                        {
                            warn!(%err, "failed to resize surface");
                        }
                        window_clone.request_redraw();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let frame = pixels.frame_mut();
                    let mut canvas = Canvas::new(frame, fb_width as usize, fb_height as usize);
                    if let Err(err) =
                        render_frame(&mut canvas, &face, &typeface, time_source.now(), background)
                    {
                        warn!(%err, "skipping frame");
                    }
                    if let Err(err) = pixels.render() {
                        error!(%err, "failed to present frame");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if scheduler.poll(Instant::now()) {
                    window_clone.request_redraw();
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(scheduler.deadline()));
            }
            _ => {}
        })?;

        Ok(())
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Clears the canvas and paints one frame of `face` at `time`.
///
/// A degenerate dial still leaves a cleared canvas behind.
pub fn render_frame(
    canvas: &mut Canvas,
    face: &ClockFace,
    typeface: &Typeface,
    time: TimeSample,
    background: Color,
) -> Result<(), ClockError> {
    let mut scene = Scene::new(typeface);
    scene.add_command(DrawCommand::Clear(background));
    let painted = face.paint(&mut scene, time);
    scene.render(canvas);
    painted
}

/// Sizes the face to the largest square that fits the window; the pixel
/// buffer is letterboxed into the rest.
fn fit_to_window(face: &mut ClockFace, size: PhysicalSize<u32>) -> Option<(u32, u32)> {
    let side = size.width.min(size.height);
    match face.measure_surface(side, side) {
        Ok(dims) => {
            debug!(side, radius = face.geometry().radius, "fitted dial to window");
            Some(dims)
        }
        Err(err) => {
            warn!(%err, "layout failed");
            None
        }
    }
}
