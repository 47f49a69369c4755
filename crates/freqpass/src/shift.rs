//! Spectrum quadrant swap.
//!
//! A forward transform leaves the zero-frequency component at index (0, 0).
//! Swapping the quadrants across the grid midpoints relocates it to the
//! center, so filter kernels can be expressed as functions of distance from
//! the visual center. For even dimensions the swap is its own inverse.

use crate::grid::ComplexGrid;

/// Swap spectrum quadrants diagonally in place, moving DC to the center.
///
/// Self-inverse for even-dimensioned grids; applying it twice restores the
/// original layout.
pub fn fft_shift(grid: &mut ComplexGrid) {
    let half_rows = grid.rows() / 2;
    let half_cols = grid.cols() / 2;
    for r in 0..half_rows {
        for c in 0..half_cols {
            // Quadrant 1 <-> quadrant 4.
            grid.swap((r, c), (r + half_rows, c + half_cols));
            // Quadrant 2 <-> quadrant 3.
            grid.swap((r, c + half_cols), (r + half_rows, c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn labeled_grid(rows: usize, cols: usize) -> ComplexGrid {
        let mut grid = ComplexGrid::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                grid.set(r, c, Complex::new((r * cols + c) as f64, 0.0));
            }
        }
        grid
    }

    #[test]
    fn shift_is_an_involution_for_even_dimensions() {
        let original = labeled_grid(8, 4);
        let mut grid = original.clone();
        fft_shift(&mut grid);
        assert_ne!(grid, original);
        fft_shift(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn shift_moves_dc_to_the_center() {
        let mut grid = ComplexGrid::zeros(8, 8);
        grid.set(0, 0, Complex::new(7.0, 0.0));
        fft_shift(&mut grid);
        assert_eq!(grid.get(4, 4), Complex::new(7.0, 0.0));
        assert_eq!(grid.get(0, 0), Complex::new(0.0, 0.0));
    }

    #[test]
    fn shift_swaps_opposite_quadrants() {
        let original = labeled_grid(4, 4);
        let mut grid = original.clone();
        fft_shift(&mut grid);
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(grid.get(r, c), original.get(r + 2, c + 2));
                assert_eq!(grid.get(r + 2, c + 2), original.get(r, c));
                assert_eq!(grid.get(r, c + 2), original.get(r + 2, c));
                assert_eq!(grid.get(r + 2, c), original.get(r, c + 2));
            }
        }
    }
}
