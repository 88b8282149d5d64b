//! Pipeline conversions module
//!
//! This module wires decoding, polar sampling, packing and writing into one
//! conversion.

mod bitmap_to_waveform;


pub use bitmap_to_waveform::BitmapToWaveformPipeline;
