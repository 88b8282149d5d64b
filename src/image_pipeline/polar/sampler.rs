use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::bitmap::types::MonochromeBitmap;
use crate::image_pipeline::polar::geometry::SamplingGeometry;
use crate::image_pipeline::polar::types::{BoundsPolicy, SampleGrid};
use crate::image_pipeline::waveform::types::ConversionConfig;

/// Samples a bitmap at the polar positions swept by the blade.
pub struct PolarSampler<'a> {
    geometry: &'a SamplingGeometry,
    bitmap: &'a MonochromeBitmap,
    mirrored: bool,
    rotation_offset_slices: i64,
    bounds_policy: BoundsPolicy,
}

impl<'a> PolarSampler<'a> {
    pub fn new(
        geometry: &'a SamplingGeometry,
        config: &ConversionConfig,
        bitmap: &'a MonochromeBitmap,
    ) -> Self {
        Self {
            geometry,
            bitmap,
            mirrored: config.mirrored,
            rotation_offset_slices: config.rotation_offset_slices,
            bounds_policy: config.bounds_policy,
        }
    }

    /// Polar angle of slice `angle_index`, in radians.
    ///
    /// Slice 0 sits a quarter turn from the mathematical zero angle. The
    /// unmirrored blade sweeps clockwise, the mirrored one counter-clockwise.
    pub fn sample_angle(&self, angle_index: usize) -> f64 {
        let quarter_turn = self.geometry.num_slices as i64 / 4;
        let j = angle_index as i64;

        let steps = if self.mirrored {
            j - quarter_turn - self.rotation_offset_slices
        } else {
            -(j + quarter_turn + self.rotation_offset_slices)
        };

        steps as f64 * self.geometry.angular_spacing_radians
    }

    /// Pixel coordinate sampled for a cell. May lie outside the bitmap.
    pub fn pixel_for(&self, radius_index: usize, angle_index: usize) -> (i64, i64) {
        let radius = self.geometry.radius_at(radius_index);
        let angle = self.sample_angle(angle_index);

        // `as` truncates toward zero
        let dx = (radius * angle.cos()) as i64;
        let dy = (radius * angle.sin()) as i64;

        // Image rows grow downward
        let x = dx + (self.bitmap.width / 2) as i64;
        let y = (self.bitmap.height / 2) as i64 - dy;
        (x, y)
    }

    /// Whether the LED at `radius_index` is lit during slice `angle_index`.
    pub fn sample(&self, radius_index: usize, angle_index: usize) -> Result<bool> {
        let (x, y) = self.pixel_for(radius_index, angle_index);
        let width = self.bitmap.width as i64;
        let height = self.bitmap.height as i64;

        if (0..width).contains(&x) && (0..height).contains(&y) {
            return Ok(self.bitmap.is_black(x as usize, y as usize));
        }

        match self.bounds_policy {
            BoundsPolicy::Reject => Err(ConversionError::SampleOutOfBounds {
                radius_index,
                angle_index,
                x,
                y,
            }),
            BoundsPolicy::Clamp if width > 0 && height > 0 => Ok(self.bitmap.is_black(
                x.clamp(0, width - 1) as usize,
                y.clamp(0, height - 1) as usize,
            )),
            BoundsPolicy::Clamp | BoundsPolicy::Unlit => Ok(false),
        }
    }

    /// Samples every cell, slice by slice.
    pub fn sample_grid(&self) -> Result<SampleGrid> {
        let mut grid = SampleGrid::new(self.geometry.num_leds, self.geometry.num_slices);

        for angle_index in 0..self.geometry.num_slices {
            for radius_index in 0..self.geometry.num_leds {
                grid.set(radius_index, angle_index, self.sample(radius_index, angle_index)?);
            }
        }

        debug!("Sampled {} lit cells of {}", grid.lit_count(), grid.num_leds() * grid.num_slices());
        Ok(grid)
    }
}
