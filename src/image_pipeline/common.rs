//! Shared pieces used by every pipeline stage.
//!
//! Decoding, sampling, packing and writing all report failures through the
//! same [`ConversionError`] so the pipeline can propagate them with `?`.

pub mod error;

pub use error::{ConversionError, Result};
