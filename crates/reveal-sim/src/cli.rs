use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reveal_core::{EffectConfig, Part};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file overriding rates, tolerance, resize quiet period or schedule
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Height of the scroll container in pixels
    #[arg(long, default_value_t = 5000.0)]
    pub container_height: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 1000.0)]
    pub viewport_height: f32,

    /// Scroll stops as fractions of the scrollable distance, applied in order
    #[arg(long, value_delimiter = ',', default_value = "0.15,0.45,0.7,1.0")]
    pub stops: Vec<f32>,

    /// Frames between consecutive scroll stops
    #[arg(long, default_value_t = 8)]
    pub interval: u32,

    /// Simulated frame duration in milliseconds
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Frame at which a burst of resize events starts
    #[arg(long)]
    pub resize_frame: Option<u32>,

    /// Viewport height after the resize burst
    #[arg(long, default_value_t = 700.0)]
    pub resized_viewport: f32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 1000)]
    pub max_frames: u32,

    /// Drop one element from the simulated section
    #[arg(long, value_enum)]
    pub omit: Option<OmitPart>,

    /// Print one JSON object per written frame instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OmitPart {
    ScrollContainer,
    StickyWrapper,
    Image1,
    Image2,
    TextOverlay,
}

impl From<OmitPart> for Part {
    fn from(p: OmitPart) -> Self {
        match p {
            OmitPart::ScrollContainer => Part::ScrollContainer,
            OmitPart::StickyWrapper => Part::StickyWrapper,
            OmitPart::Image1 => Part::Image1,
            OmitPart::Image2 => Part::Image2,
            OmitPart::TextOverlay => Part::TextOverlay,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<EffectConfig> {
        let Some(path) = &self.config else {
            return Ok(EffectConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
