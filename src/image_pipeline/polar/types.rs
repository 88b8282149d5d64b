//! Polar sampling types

/// Handling of samples whose pixel coordinate falls outside the bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Abort the conversion (default)
    #[default]
    Reject,
    /// Read the nearest edge pixel instead
    Clamp,
    /// Treat the sample as unlit, as if the bitmap had a white border
    Unlit,
}

/// Lit/unlit flags for every (radius, angle) cell of one conversion.
///
/// Cells are stored with the radius index varying fastest, so all LEDs of a
/// slice are contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    num_leds: usize,
    num_slices: usize,
    cells: Vec<bool>,
}

impl SampleGrid {
    /// Creates a grid with every cell unlit.
    pub fn new(num_leds: usize, num_slices: usize) -> Self {
        Self {
            num_leds,
            num_slices,
            cells: vec![false; num_leds * num_slices],
        }
    }

    pub fn num_leds(&self) -> usize {
        self.num_leds
    }

    pub fn num_slices(&self) -> usize {
        self.num_slices
    }

    /// Whether the cell is lit.
    ///
    /// # Panics
    ///
    /// Panics if `radius_index >= num_leds()` or `angle_index >= num_slices()`.
    pub fn get(&self, radius_index: usize, angle_index: usize) -> bool {
        self.cells[self.index(radius_index, angle_index)]
    }

    /// # Panics
    ///
    /// Panics if the cell lies outside the grid, as for [`SampleGrid::get`].
    pub fn set(&mut self, radius_index: usize, angle_index: usize, lit: bool) {
        let index = self.index(radius_index, angle_index);
        self.cells[index] = lit;
    }

    /// All LED flags of one slice, innermost LED first.
    ///
    /// # Panics
    ///
    /// Panics if `angle_index >= num_slices()`.
    pub fn slice(&self, angle_index: usize) -> &[bool] {
        let start = angle_index * self.num_leds;
        &self.cells[start..start + self.num_leds]
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    fn index(&self, radius_index: usize, angle_index: usize) -> usize {
        assert!(
            radius_index < self.num_leds && angle_index < self.num_slices,
            "cell ({}, {}) outside {}x{} grid",
            radius_index,
            angle_index,
            self.num_leds,
            self.num_slices
        );
        angle_index * self.num_leds + radius_index
    }
}
