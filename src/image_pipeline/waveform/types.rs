//! Waveform conversion configuration types

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::polar::types::BoundsPolicy;

/// Permutation from LED radial index to bit position in the packed word.
///
/// `LedOrder::new` only accepts bijections over `0..len`, so a value of this
/// type always describes a complete wiring table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedOrder(Vec<usize>);

impl LedOrder {
    pub fn new(bits: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; bits.len()];
        for (led, &bit) in bits.iter().enumerate() {
            let slot = seen.get_mut(bit).ok_or_else(|| {
                ConversionError::InvalidLedOrder(format!(
                    "LED {} maps to bit {}, outside 0..{}",
                    led,
                    bit,
                    bits.len()
                ))
            })?;
            if *slot {
                return Err(ConversionError::InvalidLedOrder(format!(
                    "bit {} is assigned to more than one LED",
                    bit
                )));
            }
            *slot = true;
        }
        Ok(Self(bits))
    }

    pub fn identity(num_leds: usize) -> Self {
        Self((0..num_leds).collect())
    }

    /// Bit position that lights the LED at `radius_index`.
    pub fn bit_for(&self, radius_index: usize) -> usize {
        self.0[radius_index]
    }

    /// Copy of this table with the entries for two LEDs exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut bits = self.0.clone();
        bits.swap(a, b);
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

// Entry `i` is the output bit driving LED `i`, counted from the hub outward.
const TOP_BLADE_ORDER: [usize; 32] = [
    16, 18, 20, 22, 24, 26, 28, 30, 17, 19, 21, 23, 25, 27, 29, 31,
    15, 13, 11, 9, 7, 5, 3, 1, 14, 12, 10, 8, 6, 4, 2, 0,
];

const BOTTOM_BLADE_ORDER: [usize; 32] = [
    30, 28, 26, 24, 22, 20, 18, 16, 31, 29, 27, 25, 23, 21, 19, 17,
    1, 3, 5, 7, 9, 11, 13, 15, 0, 2, 4, 6, 8, 10, 12, 14,
];

/// Wiring presets for the two blades of the rotor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BladeProfile {
    /// Upper blade, seen from above
    Top,
    /// Lower blade, seen from below (mirrored)
    Bottom,
}

impl BladeProfile {
    pub fn mirrored(self) -> bool {
        matches!(self, BladeProfile::Bottom)
    }

    pub fn rotation_offset_slices(self) -> i64 {
        0
    }

    pub fn led_order(self) -> LedOrder {
        match self {
            BladeProfile::Top => LedOrder(TOP_BLADE_ORDER.to_vec()),
            BladeProfile::Bottom => LedOrder(BOTTOM_BLADE_ORDER.to_vec()),
        }
    }
}

/// Configuration for bitmap to waveform conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// LED ring inner diameter in mm
    pub ring_inner_diameter_mm: f64,
    /// LED ring outer diameter in mm
    pub ring_outer_diameter_mm: f64,
    /// Number of LEDs along the blade
    pub num_leds: usize,
    /// Number of times the LEDs change during one rotation
    pub num_slices: usize,
    /// Slices to rotate the image clockwise
    pub rotation_offset_slices: i64,
    /// Reflect the angular direction (bottom blade)
    pub mirrored: bool,
    /// LED radial index to output bit mapping
    pub led_order: LedOrder,
    /// What to do with samples that land outside the bitmap
    pub bounds_policy: BoundsPolicy,
    /// Words per line in the hex table; 0 disables line breaks
    pub words_per_line: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            ring_inner_diameter_mm: 128.0,
            ring_outer_diameter_mm: 686.0,
            num_leds: 32,
            num_slices: 256,
            rotation_offset_slices: 0,
            mirrored: false,
            led_order: LedOrder::identity(32),
            bounds_policy: BoundsPolicy::Reject,
            words_per_line: 4,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    /// Checks the ring and LED parameters before any sampling happens.
    pub fn validate(&self) -> Result<()> {
        let inner = self.ring_inner_diameter_mm;
        let outer = self.ring_outer_diameter_mm;

        if !inner.is_finite() || !outer.is_finite() || inner < 0.0 {
            return Err(ConversionError::InvalidGeometry(format!(
                "ring diameters must be finite and non-negative (inner={}, outer={})",
                inner, outer
            )));
        }
        if outer <= inner {
            return Err(ConversionError::InvalidGeometry(format!(
                "outer diameter {} must exceed inner diameter {}",
                outer, inner
            )));
        }
        if self.num_leds < 2 {
            return Err(ConversionError::InvalidGeometry(format!(
                "at least two LEDs are required, got {}",
                self.num_leds
            )));
        }
        if self.num_slices == 0 {
            return Err(ConversionError::InvalidGeometry(
                "slice count must be non-zero".to_string(),
            ));
        }
        if self.led_order.len() != self.num_leds {
            return Err(ConversionError::InvalidLedOrder(format!(
                "table has {} entries for {} LEDs",
                self.led_order.len(),
                self.num_leds
            )));
        }
        Ok(())
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    ring_inner_diameter_mm: Option<f64>,
    ring_outer_diameter_mm: Option<f64>,
    num_leds: Option<usize>,
    num_slices: Option<usize>,
    rotation_offset_slices: Option<i64>,
    mirrored: Option<bool>,
    led_order: Option<LedOrder>,
    bounds_policy: Option<BoundsPolicy>,
    words_per_line: Option<usize>,
}

impl ConversionConfigBuilder {
    /// Applies a blade's mirror flag, rotation and LED wiring.
    pub fn profile(mut self, profile: BladeProfile) -> Self {
        self.mirrored = Some(profile.mirrored());
        self.rotation_offset_slices = Some(profile.rotation_offset_slices());
        self.led_order = Some(profile.led_order());
        self
    }

    pub fn ring_inner_diameter_mm(mut self, mm: f64) -> Self {
        self.ring_inner_diameter_mm = Some(mm);
        self
    }

    pub fn ring_outer_diameter_mm(mut self, mm: f64) -> Self {
        self.ring_outer_diameter_mm = Some(mm);
        self
    }

    pub fn num_leds(mut self, num_leds: usize) -> Self {
        self.num_leds = Some(num_leds);
        self
    }

    pub fn num_slices(mut self, num_slices: usize) -> Self {
        self.num_slices = Some(num_slices);
        self
    }

    pub fn rotation_offset_slices(mut self, slices: i64) -> Self {
        self.rotation_offset_slices = Some(slices);
        self
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = Some(mirrored);
        self
    }

    pub fn led_order(mut self, led_order: LedOrder) -> Self {
        self.led_order = Some(led_order);
        self
    }

    pub fn bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.bounds_policy = Some(policy);
        self
    }

    pub fn words_per_line(mut self, words: usize) -> Self {
        self.words_per_line = Some(words);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            ring_inner_diameter_mm: self.ring_inner_diameter_mm.unwrap_or(default.ring_inner_diameter_mm),
            ring_outer_diameter_mm: self.ring_outer_diameter_mm.unwrap_or(default.ring_outer_diameter_mm),
            num_leds: self.num_leds.unwrap_or(default.num_leds),
            num_slices: self.num_slices.unwrap_or(default.num_slices),
            rotation_offset_slices: self.rotation_offset_slices.unwrap_or(default.rotation_offset_slices),
            mirrored: self.mirrored.unwrap_or(default.mirrored),
            led_order: self.led_order.unwrap_or(default.led_order),
            bounds_policy: self.bounds_policy.unwrap_or(default.bounds_policy),
            words_per_line: self.words_per_line.unwrap_or(default.words_per_line),
        }
    }
}
