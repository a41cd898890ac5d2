use std::path::PathBuf;

use clap::Parser;

use crate::engine::RunConfig;
use crate::types::{HEIGHT, WIDTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "term-bounce", version)]
#[command(about = "Bouncing ball and FPS counter rendered to the terminal", long_about = None)]
pub struct Args {
    /// Box width in columns
    #[arg(short = 'w', long, default_value_t = WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Box height in rows
    #[arg(short = 'H', long, default_value_t = HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Maximum frames per second (default: unlimited)
    #[arg(short = 'f', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_fps: Option<u32>,

    /// Write logs to this file (filter via RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            width: self.width,
            height: self.height,
            max_fps: self.max_fps,
        }
    }
}
