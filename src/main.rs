use clap::Parser;
use dialclock::{Clock, ClockConfig, FixedTime, TimeSample};
use std::path::PathBuf;
use std::time::Duration;

/// Analog clock face, redrawn once per second.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Window title
    #[arg(long, default_value = "Clock")]
    title: String,
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 640)]
    height: u32,
    /// TrueType/OpenType font for the hour numerals
    #[arg(long)]
    font: Option<PathBuf>,
    /// Freeze the hands at HH:MM[:SS] instead of following local time
    #[arg(long, value_parser = parse_time)]
    at: Option<TimeSample>,
    /// Milliseconds between redraws
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,
}

fn parse_time(s: &str) -> Result<TimeSample, String> {
    s.parse::<TimeSample>().map_err(|err| err.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = ClockConfig::builder()
        .title(args.title)
        .window_width(args.width)
        .window_height(args.height)
        .refresh_interval(Duration::from_millis(args.interval_ms))
        .maybe_font_path(args.font)
        .build();

    let clock = Clock::new(config);
    match args.at {
        Some(time) => clock.show_with(FixedTime(time))?,
        None => clock.show()?,
    }
    Ok(())
}
