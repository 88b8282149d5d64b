//! Packs sampled slices into one 32-bit LED word each.
//!
//! The word width is fixed: one bit per LED across four output bytes, for a
//! blade with exactly [`PACKED_LEDS`] LEDs and a rotation of exactly
//! [`PACKED_SLICES`] slices. Other layouts are rejected rather than silently
//! squeezed into the same format.

use tracing::debug;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::polar::types::SampleGrid;
use crate::image_pipeline::waveform::types::LedOrder;

pub const PACKED_LEDS: usize = 32;
pub const PACKED_SLICES: usize = 256;

/// Fails unless `num_leds` x `num_slices` is the layout the packed format encodes.
pub fn ensure_supported_layout(num_leds: usize, num_slices: usize) -> Result<()> {
    if num_leds != PACKED_LEDS || num_slices != PACKED_SLICES {
        return Err(ConversionError::UnsupportedLayout {
            leds: num_leds,
            slices: num_slices,
        });
    }
    Ok(())
}

/// Returns one word per slice, setting bit `led_order[i]` for every lit LED `i`.
pub fn pack_slices(grid: &SampleGrid, led_order: &LedOrder) -> Result<Vec<u32>> {
    ensure_supported_layout(grid.num_leds(), grid.num_slices())?;

    if led_order.len() != PACKED_LEDS {
        return Err(ConversionError::InvalidLedOrder(format!(
            "table has {} entries for {} LEDs",
            led_order.len(),
            PACKED_LEDS
        )));
    }

    let words: Vec<u32> = (0..grid.num_slices())
        .map(|angle_index| pack_slice(grid.slice(angle_index), led_order))
        .collect();

    debug!("Packed {} slices", words.len());
    Ok(words)
}

fn pack_slice(leds: &[bool], led_order: &LedOrder) -> u32 {
    leds.iter()
        .enumerate()
        .filter(|(_, lit)| **lit)
        .fold(0u32, |word, (radius_index, _)| word | 1 << led_order.bit_for(radius_index))
}
