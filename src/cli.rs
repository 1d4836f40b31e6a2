use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumapath")]
#[command(about = "A simple path tracer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1920", help = "Image width in pixels")]
    pub width: u32,

    /// Image aspect ratio (width over height)
    #[arg(long, default_value = "1.7777777777777777", help = "Image aspect ratio (width / height)")]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "10", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces per sample
    #[arg(long, default_value = "10", help = "Maximum number of ray bounces per sample")]
    pub max_depth: u32,

    /// Seed for the random number generator (random if omitted)
    #[arg(long, help = "Seed for the random number generator (random if omitted)")]
    pub seed: Option<u64>,

    /// Output file path (ASCII PPM)
    #[arg(short, long, default_value = "image.ppm", help = "Output file path (ASCII PPM)")]
    pub output: String,
}
