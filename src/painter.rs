//! The three painters of a frame.
//!
//! Each painter receives the transform whose origin is the dial centre and
//! builds its own [`Style`] for every call, so nothing leaks from one painter
//! into the next.

use crate::config::{ClockConfig, HandStyle};
use crate::geometry::{Point, Rect, Transform};
use crate::surface::{Style, Surface};
use crate::time::TimeSample;

pub fn draw_dial<S: Surface>(
    surface: &mut S,
    origin: Transform,
    radius: f32,
    config: &ClockConfig,
) {
    let style = Style::stroke(config.dial_color, config.circle_stroke_width);
    surface.circle(origin, radius, style);
}

/// Ticks are drawn pointing at 12 o'clock in a frame turned one step further
/// per tick. Hour numerals undo that turn so they always read upright.
pub fn draw_scale<S: Surface>(
    surface: &mut S,
    origin: Transform,
    radius: f32,
    config: &ClockConfig,
) {
    let step = config.tick_step_degrees();
    let mut frame = origin;

    for index in 1..=config.tick_count {
        frame = frame.rotate(step);
        let outer = Point::new(0.0, -radius);

        // a zero hour spacing leaves every tick short
        if index.checked_rem(config.ticks_per_hour) == Some(0) {
            let inner = Point::new(0.0, -radius + config.long_tick_length);
            let style = Style::stroke(config.scale_color, config.long_tick_width);
            surface.line(frame, outer, inner, style);

            let numeral = (index / config.ticks_per_hour).to_string();
            let bounds = surface.text_bounds(&numeral);
            let label = frame
                .translate(
                    0.0,
                    -radius
                        + config.number_spacing
                        + config.long_tick_length
                        + (bounds.height / 2) as f32,
                )
                .rotate(-step * index as f32);
            let baseline = Point::new(
                -(bounds.width as f32) / 2.0,
                bounds.height as f32 / 2.0,
            );
            let style = Style::fill(config.scale_color, config.number_stroke_width);
            surface.text(label, baseline, &numeral, style);
        } else {
            let inner = Point::new(0.0, -radius + config.short_tick_length);
            let style = Style::stroke(config.scale_color, config.short_tick_width);
            surface.line(frame, outer, inner, style);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Drawing order, bottom to top.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    pub fn style(self, config: &ClockConfig) -> HandStyle {
        match self {
            Hand::Hour => config.hour_hand,
            Hand::Minute => config.minute_hand,
            Hand::Second => config.second_hand,
        }
    }

    pub fn angle(self, time: TimeSample) -> f32 {
        let angles = time.angles();
        match self {
            Hand::Hour => angles.hour,
            Hand::Minute => angles.minute,
            Hand::Second => angles.second,
        }
    }

    /// Shaft in the unrotated frame: the tip points at 12 and the tail
    /// passes the centre by a sixth of the radius.
    pub fn shaft(self, radius: f32, width: f32) -> Rect {
        let tip = match self {
            Hand::Hour => -radius / 2.0,
            Hand::Minute => -radius * 3.5 / 5.0,
            Hand::Second => -radius + 10.0,
        };
        Rect::new(-width / 2.0, tip, width / 2.0, radius / 6.0)
    }
}

pub fn draw_pointers<S: Surface>(
    surface: &mut S,
    origin: Transform,
    radius: f32,
    time: TimeSample,
    config: &ClockConfig,
) {
    for hand in Hand::ALL {
        let HandStyle { width, color } = hand.style(config);
        let frame = origin.rotate(hand.angle(time));
        surface.round_rect(
            frame,
            hand.shaft(radius, width),
            config.hand_corner_radius,
            Style::stroke(color, width),
        );
    }

    let cap = Style::fill(config.second_hand.color, config.second_hand.width);
    surface.circle(origin, config.cap_radius(), cap);
}
