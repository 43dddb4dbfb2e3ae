use crate::error::ClockError;
use chrono::{Local, Timelike};
use std::str::FromStr;

/// Wall-clock reading on a 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeSample {
    /// Hours past 11 are folded onto the 12-hour dial.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(Self {
            hour: hour % 12,
            minute,
            second,
        })
    }

    pub fn from_timelike(t: &impl Timelike) -> Self {
        Self {
            hour: t.hour() % 12,
            minute: t.minute(),
            // leap seconds report 60
            second: t.second().min(59),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn angles(&self) -> HandAngles {
        HandAngles::from_time(*self)
    }
}

impl FromStr for TimeSample {
    type Err = ClockError;

    /// Accepts `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockError::InvalidTime(s.to_string());
        let fields = s
            .trim()
            .split(':')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match fields.as_slice() {
            [h, m] => Self::new(*h, *m, 0),
            [h, m, sec] => Self::new(*h, *m, *sec),
            _ => Err(invalid()),
        }
    }
}

/// Pointer rotations in degrees, clockwise from 12 o'clock.
///
/// Seconds carry into the minute angle and minutes into the hour angle, so
/// the hands sweep instead of stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: TimeSample) -> Self {
        let hour = time.hour as f32;
        let minute = time.minute as f32;
        let second = time.second as f32;
        Self {
            hour: (hour + minute / 60.0) * 30.0,
            minute: (minute + second / 60.0) * 6.0,
            second: second * 6.0,
        }
    }
}

/// Supplies the time shown on each frame.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

/// System local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_timelike(&Local::now())
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub TimeSample);

impl TimeSource for FixedTime {
    fn now(&self) -> TimeSample {
        self.0
    }
}
