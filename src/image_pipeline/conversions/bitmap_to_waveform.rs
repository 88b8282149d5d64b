use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    bitmap::{BitmapReader, BmpReader, MonochromeBitmap},
    polar::{PolarSampler, SamplingGeometry},
    waveform::{packer, WaveformWriter, HexTableWriter, ConversionConfig},
};

pub struct BitmapToWaveformPipeline<R: BitmapReader, W: WaveformWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl BitmapToWaveformPipeline<BmpReader, HexTableWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: BmpReader,
            writer: HexTableWriter,
            config,
        }
    }
}

impl<R: BitmapReader, W: WaveformWriter> BitmapToWaveformPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Sampling assumes a square 1 bpp image, so anything else is rejected
    /// before the geometry is derived.
    fn validate_bitmap(&self, bitmap: &MonochromeBitmap) -> Result<()> {
        if bitmap.width == 0 || !bitmap.is_square() {
            return Err(ConversionError::InvalidDimensions(bitmap.width, bitmap.height));
        }

        if !bitmap.is_monochrome() {
            return Err(ConversionError::UnsupportedBitDepth(bitmap.bits_per_pixel));
        }

        Ok(())
    }

    /// Decodes, samples and packs `input_data` without writing anything.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn convert_words(&self, input_data: &[u8]) -> Result<Vec<u32>> {
        info!("Starting bitmap to waveform conversion");

        {
            let _span = tracing::info_span!("validate_config").entered();
            self.config.validate()?;
            packer::ensure_supported_layout(self.config.num_leds, self.config.num_slices)?;
        }

        let bitmap = {
            let _span = tracing::info_span!("decode_bitmap").entered();
            self.reader.read_bitmap(input_data)?
        };

        info!(
            "Bitmap info: {} x {} @ {} bpp",
            bitmap.width, bitmap.height, bitmap.bits_per_pixel
        );

        {
            let _span = tracing::info_span!("validate_bitmap",
                width = bitmap.width,
                height = bitmap.height
            ).entered();
            self.validate_bitmap(&bitmap)?;
        }

        let geometry = {
            let _span = tracing::info_span!("calculate_geometry").entered();
            SamplingGeometry::calculate(&self.config, bitmap.width)?
        };

        let grid = {
            let _span = tracing::info_span!("sample_grid").entered();
            PolarSampler::new(&geometry, &self.config, &bitmap).sample_grid()?
        };

        let words = {
            let _span = tracing::info_span!("pack_slices").entered();
            packer::pack_slices(&grid, &self.config.led_order)?
        };

        info!(
            slices = words.len(),
            lit_cells = grid.lit_count(),
            "Sampling complete"
        );
        Ok(words)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let words = self.convert_words(input_data)?;

        {
            let _span = tracing::info_span!("write_waveform").entered();
            self.writer.write_waveform(&words, output, &self.config)?;
        }

        info!(words = words.len(), "Conversion complete");
        Ok(())
    }

    /// Converts one file into another. The output file is only created once
    /// the conversion has succeeded.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut rendered = Vec::new();
        self.convert(&input_data, &mut rendered)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &rendered).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
