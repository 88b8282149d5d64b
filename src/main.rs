use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};
use helipov_rs::image_pipeline::{BitmapToWaveformPipeline, BladeProfile, BoundsPolicy, ConversionConfig};
use helipov_rs::logger;

use tracing::info;

/// Convert a square 1 bpp bitmap into the LED byte table for a POV blade.
#[derive(Parser, Debug)]
#[command(name = "helipov", version)]
#[command(group(ArgGroup::new("blade").required(true).args(["top", "bottom"])))]
struct Args {
    /// Top blade wiring
    #[arg(short = 't', long)]
    top: bool,

    /// Bottom blade wiring (mirrored)
    #[arg(short = 'b', long)]
    bottom: bool,

    /// Input bitmap (.bmp, square, 1 bpp)
    input: PathBuf,

    /// Output text file for the byte table
    output: PathBuf,

    /// LED ring inner diameter in mm
    #[arg(long, default_value_t = 128.0)]
    ring_inner_mm: f64,

    /// LED ring outer diameter in mm
    #[arg(long, default_value_t = 686.0)]
    ring_outer_mm: f64,

    /// Extra slices to rotate the image clockwise
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    rotation: i64,

    /// Words per output line (0 for a single line)
    #[arg(long, default_value_t = 4)]
    words_per_line: usize,

    /// Handling of samples that fall outside the bitmap
    #[arg(long, value_enum, default_value_t = Bounds::Reject)]
    bounds: Bounds,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Bounds {
    /// Fail the conversion
    Reject,
    /// Use the nearest edge pixel
    Clamp,
    /// Leave the LED off
    Unlit,
}

impl Bounds {
    fn to_policy(self) -> BoundsPolicy {
        match self {
            Bounds::Reject => BoundsPolicy::Reject,
            Bounds::Clamp => BoundsPolicy::Clamp,
            Bounds::Unlit => BoundsPolicy::Unlit,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(if args.verbose { "debug" } else { "info" });

    let profile = if args.bottom { BladeProfile::Bottom } else { BladeProfile::Top };

    info!("Starting helipov ({:?} blade)...", profile);

    let config = ConversionConfig::builder()
        .profile(profile)
        .ring_inner_diameter_mm(args.ring_inner_mm)
        .ring_outer_diameter_mm(args.ring_outer_mm)
        .rotation_offset_slices(profile.rotation_offset_slices() + args.rotation)
        .words_per_line(args.words_per_line)
        .bounds_policy(args.bounds.to_policy())
        .build();
    let pipeline = BitmapToWaveformPipeline::new(config);

    pipeline
        .convert_file(&args.input, &args.output)
        .with_context(|| format!("converting {}", args.input.display()))?;

    info!("Byte code written to {}", args.output.display());
    Ok(())
}
