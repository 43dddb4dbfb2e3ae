use bon::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// Color representation for dial elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Width and colour of one pointer shaft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub width: f32,
    pub color: Color,
}

impl HandStyle {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    // Window configuration
    #[builder(into, default = "Clock".to_string())]
    pub title: String,
    #[builder(default = 640)]
    pub window_width: u32,
    #[builder(default = 640)]
    pub window_height: u32,
    #[builder(default = Color::WHITE)]
    pub background_color: Color,
    #[builder(default = Duration::from_millis(1000))]
    pub refresh_interval: Duration,

    // Dial configuration
    #[builder(default = 4.0)]
    pub circle_stroke_width: f32,
    /// Radius assumed before the first layout pass; bounds `AtMost` sizing.
    #[builder(default = 300.0)]
    pub initial_radius: f32,
    #[builder(default = Color::BLACK)]
    pub dial_color: Color,

    // Scale configuration
    #[builder(default = 60)]
    pub tick_count: u32,
    #[builder(default = 5)]
    pub ticks_per_hour: u32,
    #[builder(default = 50.0)]
    pub long_tick_length: f32,
    #[builder(default = 25.0)]
    pub short_tick_length: f32,
    #[builder(default = 4.0)]
    pub long_tick_width: f32,
    #[builder(default = 2.0)]
    pub short_tick_width: f32,
    #[builder(default = 10.0)]
    pub number_spacing: f32,
    #[builder(default = 1.0)]
    pub number_stroke_width: f32,
    #[builder(default = 35.0)]
    pub number_font_size: f32,
    #[builder(default = Color::BLACK)]
    pub scale_color: Color,

    // Pointer configuration
    #[builder(default = HandStyle::new(15.0, Color::BLUE))]
    pub hour_hand: HandStyle,
    #[builder(default = HandStyle::new(10.0, Color::BLACK))]
    pub minute_hand: HandStyle,
    #[builder(default = HandStyle::new(4.0, Color::RED))]
    pub second_hand: HandStyle,
    #[builder(default = 20.0)]
    pub hand_corner_radius: f32,
    /// Cap radius as a multiple of the second hand width.
    #[builder(default = 4.0)]
    pub cap_radius_factor: f32,

    // Font configuration
    pub font_path: Option<PathBuf>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClockConfig {
    /// Rotation between two neighbouring ticks, in degrees.
    pub fn tick_step_degrees(&self) -> f32 {
        360.0 / self.tick_count as f32
    }

    /// Radius of the filled dot covering the pointer pivot.
    pub fn cap_radius(&self) -> f32 {
        self.second_hand.width * self.cap_radius_factor
    }
}
