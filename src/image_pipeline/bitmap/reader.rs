use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bitmap::types::MonochromeBitmap;

pub trait BitmapReader {
    fn read_bitmap(&self, data: &[u8]) -> Result<MonochromeBitmap>;
}
