//! BMP reader built on the `image` crate.
//!
//! `image` expands palettized BMPs to RGB and does not report the bit depth
//! the file was stored with, so the depth is read straight from the DIB
//! header before the pixels are decoded.

use tracing::debug;
use image::ImageFormat;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::bitmap::types::MonochromeBitmap;
use crate::image_pipeline::bitmap::reader::BitmapReader;

/// Bitmap reader for Windows BMP files.
pub struct BmpReader;

/// Size of the `BITMAPFILEHEADER` that precedes every DIB header.
const FILE_HEADER_LEN: usize = 14;

/// `BITMAPCOREHEADER` (OS/2 1.x) stores 16-bit dimensions, which moves the bit count.
const CORE_HEADER_LEN: u32 = 12;
const CORE_BIT_COUNT_OFFSET: usize = FILE_HEADER_LEN + 10;

/// Bit count offset for `BITMAPINFOHEADER` and every later header version.
const INFO_BIT_COUNT_OFFSET: usize = FILE_HEADER_LEN + 14;

impl BmpReader {
    /// Reads the bits-per-pixel field of the DIB header.
    pub fn bits_per_pixel(data: &[u8]) -> Result<u16> {
        if !data.starts_with(b"BM") {
            return Err(ConversionError::DecodeError("missing BM signature".to_string()));
        }

        let header_len = data
            .get(FILE_HEADER_LEN..FILE_HEADER_LEN + 4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .ok_or_else(|| ConversionError::DecodeError("truncated DIB header".to_string()))?;

        let offset = if header_len == CORE_HEADER_LEN {
            CORE_BIT_COUNT_OFFSET
        } else {
            INFO_BIT_COUNT_OFFSET
        };

        data.get(offset..offset + 2)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
            .ok_or_else(|| ConversionError::DecodeError("truncated DIB header".to_string()))
    }
}

impl BitmapReader for BmpReader {
    /// Decodes a BMP file and keeps only the red channel.
    ///
    /// Black/white decisions are made later by the sampler, which treats a
    /// zero red channel as black, so nothing else is needed from the pixels.
    fn read_bitmap(&self, data: &[u8]) -> Result<MonochromeBitmap> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let bits_per_pixel = Self::bits_per_pixel(data)?;

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Bmp)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?
            .to_rgb8();

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded image: {}x{} @ {} bpp", width, height, bits_per_pixel);

        let data: Vec<u8> = decoded.pixels().map(|pixel| pixel[0]).collect();

        Ok(MonochromeBitmap {
            width,
            height,
            bits_per_pixel,
            data,
        })
    }
}
