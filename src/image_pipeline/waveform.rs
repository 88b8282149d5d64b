//! LED waveform output module
//!
//! This module packs sampled slices into LED words and writes them out as a
//! hex byte table, together with the configuration shared by the pipeline.

mod writer;
mod hex_table_writer;
pub mod packer;
pub mod types;

pub use writer::WaveformWriter;
pub use hex_table_writer::HexTableWriter;
pub use packer::{pack_slices, PACKED_LEDS, PACKED_SLICES};
pub use types::{BladeProfile, ConversionConfig, ConversionConfigBuilder, LedOrder};
