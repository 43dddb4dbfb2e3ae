use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by layout, font loading and the window host.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The host gave no bound for an axis.
    #[error("no size bound given for the {axis} axis")]
    UnspecifiedConstraint { axis: &'static str },

    /// Layout produced a dial with no drawable area; the frame is skipped.
    #[error("dial radius {radius} is not drawable")]
    DegenerateGeometry { radius: f32 },

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("failed to read font {}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font {} is not a TrueType/OpenType font", path.display())]
    FontParse { path: PathBuf },

    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Pixels(#[from] pixels::Error),
}
