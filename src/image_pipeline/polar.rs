//! Polar resampling module
//!
//! Maps the blade's (LED, slice) positions onto bitmap pixels. The geometry
//! is computed once per conversion and the sampler turns it into a grid of
//! lit/unlit cells.

mod geometry;
mod sampler;
pub mod types;

pub use geometry::SamplingGeometry;
pub use sampler::PolarSampler;
pub use types::{BoundsPolicy, SampleGrid};
