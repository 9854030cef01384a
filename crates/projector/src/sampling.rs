//! Block sampling of a pixel grid.
//!
//! Fitting a transform over every cell of a large raster is wasteful: instead every
//! `block_size` x `block_size` block of the grid is represented by a single cell.

use itertools::iproduct;

use crate::Point;

pub const DEFAULT_BLOCK_SIZE: usize = 3;

/// Returns the sample indices along one axis of length `range`.
///
/// Every full block contributes its midpoint. A partial trailing block contributes the
/// midpoint of the remaining cells.
///
/// # Panics
/// Panics when `block_size` is zero.
pub fn axis_samples(range: usize, block_size: usize) -> Vec<usize> {
    let full_blocks = range / block_size;
    let mut samples: Vec<usize> = (0..full_blocks).map(|i| block_size * i + (block_size - 1) / 2).collect();

    if range % block_size != 0 {
        samples.push(block_size * full_blocks + usize::min(block_size - 1, (range - 1) % block_size) / 2);
    }

    samples
}

/// Selects one point per `block_size` x `block_size` block of a `x_range` x `y_range` grid.
///
/// Partial blocks at the right and bottom edge are represented as well. The points are
/// ordered by x first, then by y.
///
/// # Panics
/// Panics when `block_size` is zero.
pub fn generate_points(x_range: usize, y_range: usize, block_size: usize) -> Vec<Point> {
    let xs = axis_samples(x_range, block_size);
    let ys = axis_samples(y_range, block_size);

    iproduct!(xs, ys).map(|(x, y)| Point::new(x as f64, y as f64)).collect()
}

/// Grid dimensions and block size used to select the points for a transform fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSampling {
    /// Number of columns of the grid
    x_range: usize,
    /// Number of rows of the grid
    y_range: usize,
    #[builder(default = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

impl GridSampling {
    /// Sampling of a `x_range` x `y_range` grid with the default block size.
    pub const fn new(x_range: usize, y_range: usize) -> Self {
        GridSampling {
            x_range,
            y_range,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    pub const fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub const fn x_range(&self) -> usize {
        self.x_range
    }

    pub const fn y_range(&self) -> usize {
        self.y_range
    }

    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn sample_count(&self) -> usize {
        self.x_range.div_ceil(self.block_size) * self.y_range.div_ceil(self.block_size)
    }

    pub fn points(&self) -> Vec<Point> {
        generate_points(self.x_range, self.y_range, self.block_size)
    }
}
