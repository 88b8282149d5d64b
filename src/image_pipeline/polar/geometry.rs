use std::f64::consts::PI;

use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::waveform::types::ConversionConfig;

/// Sampling constants in pixel units, derived once per conversion.
///
/// The ring is assumed centred in a square image. Radii are chosen so that
/// the outermost LED plus half a radial step reaches the image edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGeometry {
    /// Pixels between LED `r` and LED `r + 1`
    pub radial_spacing_pixels: f64,
    /// Distance from the image centre to LED 0
    pub inner_radius_pixels: f64,
    /// Radians between slice `j` and slice `j + 1`
    pub angular_spacing_radians: f64,
    pub num_leds: usize,
    pub num_slices: usize,
}

impl SamplingGeometry {
    /// Derives the sampling constants for an image `image_width` pixels wide.
    ///
    /// Only the width is used; squareness is checked by the caller when the
    /// bitmap is ingested.
    pub fn calculate(config: &ConversionConfig, image_width: usize) -> Result<Self> {
        let num_leds = config.num_leds;
        let num_slices = config.num_slices;

        if num_leds < 2 {
            return Err(ConversionError::InvalidGeometry(format!(
                "at least two LEDs are required, got {}",
                num_leds
            )));
        }
        if num_slices == 0 {
            return Err(ConversionError::InvalidGeometry(
                "slice count must be non-zero".to_string(),
            ));
        }

        let inner_mm = config.ring_inner_diameter_mm;
        let outer_mm = config.ring_outer_diameter_mm;
        let width = image_width as f64;

        let radial_spacing_mm = (outer_mm - inner_mm) / 2.0 / (num_leds - 1) as f64;
        let pixels_per_mm = width / (outer_mm + radial_spacing_mm);
        let radial_spacing_pixels =
            (width - inner_mm * pixels_per_mm - 1.0) / (2 * num_leds - 1) as f64;
        let inner_radius_pixels = inner_mm * pixels_per_mm / 2.0;
        let angular_spacing_radians = 2.0 * PI / num_slices as f64;

        debug!(
            radial_spacing_pixels,
            inner_radius_pixels,
            angular_spacing_radians,
            "Calculated sampling geometry"
        );

        Ok(Self {
            radial_spacing_pixels,
            inner_radius_pixels,
            angular_spacing_radians,
            num_leds,
            num_slices,
        })
    }

    /// Distance from the image centre to the LED at `radius_index`.
    pub fn radius_at(&self, radius_index: usize) -> f64 {
        self.inner_radius_pixels + radius_index as f64 * self.radial_spacing_pixels
    }

    /// Outermost LED radius plus half a radial step.
    pub fn outer_edge_radius(&self) -> f64 {
        self.radius_at(self.num_leds - 1) + self.radial_spacing_pixels / 2.0
    }
}
