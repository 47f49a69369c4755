//! Radix-2 FFT: 1D engine and separable 2D composition.
//!
//! The 1D engine is the iterative Cooley-Tukey algorithm: bit-reversal
//! permutation followed by butterfly combines with block size doubling from
//! 2 to N. The forward transform is unnormalized; the inverse divides by N.
//! Both require power-of-two lengths and fail loudly otherwise.
//!
//! The 2D transform is separable: 1D transforms over all rows, a transpose,
//! 1D transforms over the rows of the transpose (the original columns), and
//! a transpose back.

use std::f64::consts::TAU;

use num_complex::Complex;

use crate::grid::ComplexGrid;

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors from the radix-2 transform engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Sequence or grid-axis length is not a power of two.
    InvalidLength {
        /// The offending length.
        len: usize,
    },
}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "length {} is not a power of two", len)
            }
        }
    }
}

impl std::error::Error for FftError {}

// ── 1D engine ──────────────────────────────────────────────────────────────

/// Reorder `data[i]` to `data[reverse_bits(i)]` in place.
///
/// `j` tracks the bit-reversed counterpart of `i`: each step clears the
/// leading set bits and sets the first clear one, i.e. a carry propagated
/// from the most significant end.
fn bit_reversal_permutation(data: &mut [Complex<f64>]) {
    let n = data.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}

/// In-place 1D FFT of a power-of-two-length sequence.
///
/// With `invert` the conjugate roots of unity are used and every output
/// sample is divided by the length; a forward transform followed by an
/// inverse one reproduces the input up to floating-point error.
pub fn fft_1d(data: &mut [Complex<f64>], invert: bool) -> Result<(), FftError> {
    let n = data.len();
    if !n.is_power_of_two() {
        return Err(FftError::InvalidLength { len: n });
    }

    bit_reversal_permutation(data);

    let mut len = 2;
    while len <= n {
        let angle = TAU / len as f64 * if invert { -1.0 } else { 1.0 };
        let w_len = Complex::from_polar(1.0, angle);
        let half = len / 2;
        for block in data.chunks_exact_mut(len) {
            let mut w = Complex::new(1.0, 0.0);
            for j in 0..half {
                let u = block[j];
                let v = block[j + half] * w;
                block[j] = u + v;
                block[j + half] = u - v;
                w *= w_len;
            }
        }
        len <<= 1;
    }

    if invert {
        let scale = 1.0 / n as f64;
        for z in data.iter_mut() {
            *z *= scale;
        }
    }
    Ok(())
}

// ── 2D composition ─────────────────────────────────────────────────────────

/// In-place separable 2D FFT over a grid whose row and column counts are
/// both powers of two.
///
/// Dimensions are validated up front, so a non-conforming grid fails before
/// any sample is touched.
pub fn fft_2d(grid: &mut ComplexGrid, invert: bool) -> Result<(), FftError> {
    let rows = grid.rows();
    let cols = grid.cols();
    if !rows.is_power_of_two() {
        return Err(FftError::InvalidLength { len: rows });
    }
    if !cols.is_power_of_two() {
        return Err(FftError::InvalidLength { len: cols });
    }

    transform_rows(grid.as_mut_slice(), cols, invert)?;

    let mut transposed = grid.transposed();
    transform_rows(transposed.as_mut_slice(), rows, invert)?;
    *grid = transposed.transposed();
    Ok(())
}

/// Transform every `width`-long row of a contiguous buffer independently.
///
/// Rows of one pass have no cross-dependency, so the parallel variant needs
/// no synchronization beyond the implicit join.
#[cfg(not(feature = "parallel"))]
fn transform_rows(data: &mut [Complex<f64>], width: usize, invert: bool) -> Result<(), FftError> {
    for row in data.chunks_exact_mut(width) {
        fft_1d(row, invert)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn transform_rows(data: &mut [Complex<f64>], width: usize, invert: bool) -> Result<(), FftError> {
    use rayon::prelude::*;
    data.par_chunks_exact_mut(width)
        .try_for_each(|row| fft_1d(row, invert))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_close(a: Complex<f64>, b: Complex<f64>) {
        assert!(
            (a - b).norm() < TOL,
            "expected {} ≈ {} (|Δ| = {})",
            a,
            b,
            (a - b).norm()
        );
    }

    #[test]
    fn impulse_transforms_to_flat_spectrum() {
        let mut data = vec![
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.0),
        ];
        fft_1d(&mut data, false).unwrap();
        for z in &data {
            assert_close(*z, Complex::new(1.0, 0.0));
        }

        fft_1d(&mut data, true).unwrap();
        assert_close(data[0], Complex::new(1.0, 0.0));
        for z in &data[1..] {
            assert_close(*z, Complex::new(0.0, 0.0));
        }
    }

    #[test]
    fn constant_sequence_concentrates_at_dc() {
        let mut data = vec![Complex::new(3.0, 0.0); 8];
        fft_1d(&mut data, false).unwrap();
        assert_close(data[0], Complex::new(24.0, 0.0));
        for z in &data[1..] {
            assert_close(*z, Complex::new(0.0, 0.0));
        }
    }

    #[test]
    fn round_trip_1d_reproduces_input() {
        let original: Vec<Complex<f64>> = (0..32)
            .map(|i| {
                let t = i as f64 * 0.37;
                Complex::new(t.sin() + 0.5 * (3.0 * t).cos(), (0.2 * t).sin())
            })
            .collect();
        let mut data = original.clone();
        fft_1d(&mut data, false).unwrap();
        fft_1d(&mut data, true).unwrap();
        for (a, b) in data.iter().zip(&original) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn non_power_of_two_length_is_rejected() {
        let mut data = vec![Complex::new(0.0, 0.0); 6];
        assert_eq!(
            fft_1d(&mut data, false),
            Err(FftError::InvalidLength { len: 6 })
        );
    }

    #[test]
    fn round_trip_2d_reproduces_grid() {
        let mut grid = ComplexGrid::zeros(8, 16);
        for r in 0..8 {
            for c in 0..16 {
                let t = (r * 16 + c) as f64 * 0.11;
                grid.set(r, c, Complex::new(t.cos(), (2.0 * t).sin()));
            }
        }
        let original = grid.clone();
        fft_2d(&mut grid, false).unwrap();
        fft_2d(&mut grid, true).unwrap();
        for r in 0..8 {
            for c in 0..16 {
                assert_close(grid.get(r, c), original.get(r, c));
            }
        }
    }

    #[test]
    fn dc_of_forward_2d_is_the_sample_sum() {
        let mut grid = ComplexGrid::zeros(4, 4);
        for r in 0..4 {
            for c in 0..4 {
                grid.set(r, c, Complex::new(2.0, 0.0));
            }
        }
        fft_2d(&mut grid, false).unwrap();
        assert_close(grid.get(0, 0), Complex::new(32.0, 0.0));
        assert_close(grid.get(1, 2), Complex::new(0.0, 0.0));
    }

    #[test]
    fn fft_2d_rejects_non_power_of_two_axes() {
        let mut grid = ComplexGrid::zeros(3, 4);
        assert_eq!(
            fft_2d(&mut grid, false),
            Err(FftError::InvalidLength { len: 3 })
        );
        let mut grid = ComplexGrid::zeros(4, 6);
        assert_eq!(
            fft_2d(&mut grid, false),
            Err(FftError::InvalidLength { len: 6 })
        );
    }
}
