use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "raytracer", about = "Renders spheres under directional lights to a PNG")]
pub struct Args {
    /// TOML scene description. Renders the built-in red sphere if omitted.
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Overrides the image width from the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Overrides the image height from the scene file
    #[arg(long)]
    pub height: Option<u32>,

    /// Worker threads; 1 traces on the main thread
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
