use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode bitmap: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1} (must be square and non-empty)")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported bit depth: {0} bpp (must be 1 bpp)")]
    UnsupportedBitDepth(u16),

    #[error("Invalid ring geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid LED order: {0}")]
    InvalidLedOrder(String),

    #[error("Unsupported layout: {leds} LEDs x {slices} slices (packing requires 32 x 256)")]
    UnsupportedLayout { leds: usize, slices: usize },

    #[error("Sample (r={radius_index}, th={angle_index}) maps to pixel ({x}, {y}) outside the image")]
    SampleOutOfBounds {
        radius_index: usize,
        angle_index: usize,
        x: i64,
        y: i64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
