//! High-pass transfer-function kernels evaluated over a centered spectrum.
//!
//! Every kernel is a real grid in [0, 1], indexed like the shifted spectrum
//! it multiplies into. Applying a real scalar to a complex sample scales
//! both parts equally, attenuating magnitude while preserving phase.

use serde::{Deserialize, Serialize};

use crate::grid::ComplexGrid;

/// Stand-in distance for the exact spectrum center, where the Butterworth
/// transfer function would otherwise divide by zero.
const CENTER_DISTANCE_EPS: f64 = 1e-9;

/// Region shape zeroed by the ideal high-pass filter.
///
/// The textbook ideal filter zeroes a disk of radius `D0`; a common
/// shortcut zeroes a centered square of half-width `D0` instead. The two
/// differ near the block corners, so the choice is explicit rather than
/// silently approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealRegion {
    /// Zero the centered square with half-open index bounds
    /// `[center - floor(D0), center + floor(D0))` on both axes.
    Square,
    /// Zero every sample with Euclidean center distance `<= D0`.
    Disk,
}

/// High-pass transfer function family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Hard cutoff: zero inside the region, unity outside.
    Ideal { region: IdealRegion },
    /// `H = 1 - exp(-D² / (2 D0²))`.
    Gaussian,
    /// `H = 1 / (1 + (D0 / D)^(2n))`; `order` controls transition steepness.
    Butterworth { order: u32 },
}

/// Real-valued multiplier grid for one transfer function, every entry in
/// [0, 1], same dimensions as the spectrum it is applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterKernel {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FilterKernel {
    /// Evaluate `kind` at every coordinate, relative to the spectrum center
    /// `(rows / 2, cols / 2)`.
    pub fn generate(rows: usize, cols: usize, kind: FilterKind, cutoff: f64) -> Self {
        let center_row = (rows / 2) as isize;
        let center_col = (cols / 2) as isize;
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let dr = r as isize - center_row;
                let dc = c as isize - center_col;
                data.push(transfer(kind, cutoff, dr, dc));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Multiply the kernel elementwise into a shifted spectrum.
    pub fn apply(&self, spectrum: &mut ComplexGrid) {
        assert_eq!(self.rows, spectrum.rows());
        assert_eq!(self.cols, spectrum.cols());
        for r in 0..self.rows {
            for c in 0..self.cols {
                spectrum.set(r, c, spectrum.get(r, c) * self.value(r, c));
            }
        }
    }
}

fn transfer(kind: FilterKind, cutoff: f64, dr: isize, dc: isize) -> f64 {
    let dist_sq = (dr * dr + dc * dc) as f64;
    match kind {
        FilterKind::Ideal {
            region: IdealRegion::Square,
        } => {
            let half = cutoff as isize;
            if dr >= -half && dr < half && dc >= -half && dc < half {
                0.0
            } else {
                1.0
            }
        }
        FilterKind::Ideal {
            region: IdealRegion::Disk,
        } => {
            if dist_sq.sqrt() <= cutoff {
                0.0
            } else {
                1.0
            }
        }
        FilterKind::Gaussian => 1.0 - (-dist_sq / (2.0 * cutoff * cutoff)).exp(),
        FilterKind::Butterworth { order } => {
            let mut dist = dist_sq.sqrt();
            if dist == 0.0 {
                dist = CENTER_DISTANCE_EPS;
            }
            1.0 / (1.0 + (cutoff / dist).powf(2.0 * f64::from(order)))
        }
    }
}
