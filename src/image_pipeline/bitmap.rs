//! Bitmap reading module
//!
//! This module turns encoded image files into the monochrome pixel buffer the
//! polar sampler reads from.

mod reader;
mod bmp_reader;
pub mod types;

pub use reader::BitmapReader;
pub use bmp_reader::BmpReader;
pub use types::MonochromeBitmap;
