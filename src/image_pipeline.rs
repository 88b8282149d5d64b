//! Image processing pipeline module
//!
//! This module turns a square monochrome bitmap into the LED waveform table
//! of a rotating blade: bitmap decoding, polar resampling, bit packing and
//! hex table output, orchestrated by the conversions module.

pub mod bitmap;
pub mod polar;
pub mod waveform;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use bitmap::{
    MonochromeBitmap,
    BitmapReader,
    BmpReader,
};

pub use polar::{
    BoundsPolicy,
    PolarSampler,
    SampleGrid,
    SamplingGeometry,
};

pub use waveform::{
    BladeProfile,
    ConversionConfig,
    ConversionConfigBuilder,
    LedOrder,
    WaveformWriter,
    HexTableWriter,
};

pub use conversions::{
    BitmapToWaveformPipeline,
};
