use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::waveform::types::ConversionConfig;

pub trait WaveformWriter {
    fn write_waveform(&self, words: &[u32], output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
