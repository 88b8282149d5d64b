use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::waveform::types::ConversionConfig;
use crate::image_pipeline::waveform::writer::WaveformWriter;

/// Writes words as a C initializer body: `0xHH,` per byte, most significant
/// byte first, with a newline after every `words_per_line` words.
pub struct HexTableWriter;

impl WaveformWriter for HexTableWriter {
    fn write_waveform(&self, words: &[u32], output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Writing hex table: {} words, {} per line", words.len(), config.words_per_line);

        let mut buffer = String::with_capacity(words.len() * 21);

        for (index, word) in words.iter().enumerate() {
            for byte in word.to_be_bytes() {
                write!(buffer, "0x{:02X},", byte)
                    .map_err(|e| ConversionError::OutputWriteError(e.to_string()))?;
            }
            if config.words_per_line > 0 && index % config.words_per_line == config.words_per_line - 1 {
                buffer.push('\n');
            }
        }

        output.write_all(buffer.as_bytes())?;

        debug!("Hex table complete, {} bytes", buffer.len());
        Ok(())
    }
}
