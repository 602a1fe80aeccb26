use std::path::PathBuf;

use clap::Parser;

/// Expand an image's canvas horizontally to a target aspect ratio.
///
/// The height is kept; padding is added on the left and right.
#[derive(Debug, Parser)]
#[command(name = "expand-image", version)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,

    /// Output image path (default: adds '_expanded' suffix to the input file name)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Padding color: black or white (solid strategy only) [default: black]
    #[arg(short = 'c', long, env = "EXPAND_COLOR")]
    pub color: Option<String>,

    /// Padding strategy: solid, blur or edge-extend [default: solid]
    #[arg(short = 'p', long, env = "EXPAND_PADDING_STRATEGY")]
    pub padding_strategy: Option<String>,

    /// Blur amount (gaussian sigma, blur strategy only) [default: 10]
    #[arg(short = 'b', long, env = "EXPAND_BLUR_AMOUNT", allow_negative_numbers = true)]
    pub blur_amount: Option<f32>,

    /// Target aspect ratio width:height [default: 1.91]
    #[arg(short = 't', long, env = "EXPAND_TARGET_RATIO", allow_negative_numbers = true)]
    pub target_ratio: Option<f64>,

    /// Source aspect ratio width:height, informational only [default: 16.0]
    #[arg(short = 's', long, env = "EXPAND_SOURCE_RATIO", allow_negative_numbers = true)]
    pub source_ratio: Option<f64>,

    /// Output quality 1-100 (JPEG and AVIF) [default: 80]
    #[arg(short = 'q', long, env = "EXPAND_QUALITY")]
    pub quality: Option<u8>,

    /// JSON file with default options
    #[arg(long, env = "EXPAND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not apply EXIF orientation before expanding
    #[arg(long)]
    pub no_auto_orient: bool,
}
