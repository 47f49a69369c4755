//! Log-magnitude spectrum visualization.

use crate::grid::{ComplexGrid, IntensityGrid};
use crate::pipeline::DISPLAY_MAX;

/// Offset under the logarithm so zero-magnitude samples stay finite.
const LOG_EPS: f64 = 1e-9;

/// Render a complex spectrum as a displayable log-magnitude image.
///
/// Each sample maps to `20 · ln(|z| + ε)`, then the grid is min-max
/// normalized to [0, 255]. Pure: the input spectrum is not modified.
/// Pass the spectrum after forward transform and shift so DC sits at the
/// image center.
pub fn visualize(spectrum: &ComplexGrid) -> IntensityGrid {
    let mut out = IntensityGrid::zeros(spectrum.rows(), spectrum.cols());
    for r in 0..spectrum.rows() {
        for c in 0..spectrum.cols() {
            out.set(r, c, 20.0 * (spectrum.get(r, c).norm() + LOG_EPS).ln());
        }
    }
    out.min_max_normalized(DISPLAY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn output_spans_the_display_range() {
        let mut spectrum = ComplexGrid::zeros(4, 4);
        spectrum.set(2, 2, Complex::new(100.0, 0.0));
        spectrum.set(1, 3, Complex::new(0.0, 5.0));
        let img = visualize(&spectrum);
        assert_eq!(img.rows(), 4);
        assert_eq!(img.cols(), 4);
        let (lo, hi) = img.min_max().unwrap();
        assert!((lo - 0.0).abs() < 1e-12);
        assert!((hi - 255.0).abs() < 1e-12);
        // Brightest pixel is the largest magnitude.
        assert!((img.get(2, 2) - 255.0).abs() < 1e-12);
    }

    #[test]
    fn input_spectrum_is_untouched() {
        let mut spectrum = ComplexGrid::zeros(4, 4);
        spectrum.set(0, 0, Complex::new(3.0, 4.0));
        let before = spectrum.clone();
        let _ = visualize(&spectrum);
        assert_eq!(spectrum, before);
    }

    #[test]
    fn all_zero_spectrum_renders_flat() {
        let img = visualize(&ComplexGrid::zeros(4, 4));
        assert!(img.as_slice().iter().all(|&v| v == 0.0));
    }
}
