//! Converts square monochrome bitmaps into the packed LED waveform table
//! driven by a rotating persistence-of-vision blade.

pub mod image_pipeline;
pub mod logger;
