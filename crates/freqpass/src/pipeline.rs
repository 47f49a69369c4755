//! High-pass filtering pipeline orchestrator.
//!
//! Owns the stage order: pad → forward FFT → shift → kernel multiply →
//! unshift → inverse FFT → magnitude → normalize → crop. Each invocation
//! owns its grids exclusively; there is no shared state between calls.

use serde::{Deserialize, Serialize};

use crate::fft::{self, FftError};
use crate::filter::{FilterKernel, FilterKind};
use crate::grid::{ComplexGrid, IntensityGrid};
use crate::shift::fft_shift;
use crate::spectrum;

/// Upper bound of the output display range.
pub const DISPLAY_MAX: f64 = 255.0;

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors from the filtering pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Input grid has zero rows or columns.
    EmptyInput,
    /// Cutoff distance must be strictly positive (and finite).
    InvalidCutoff {
        /// The rejected cutoff value.
        got: f64,
    },
    /// Butterworth order must be at least 1.
    InvalidOrder {
        /// The rejected order.
        got: u32,
    },
    /// A grid axis reached the radix-2 engine with a non-power-of-two
    /// length.
    Transform(FftError),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input image is empty"),
            Self::InvalidCutoff { got } => {
                write!(f, "cutoff must be positive, got {}", got)
            }
            Self::InvalidOrder { got } => {
                write!(f, "butterworth order must be >= 1, got {}", got)
            }
            Self::Transform(err) => write!(f, "transform failed: {}", err),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FftError> for FilterError {
    fn from(err: FftError) -> Self {
        Self::Transform(err)
    }
}

// ── Configuration ──────────────────────────────────────────────────────────

/// High-pass filtering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighPassConfig {
    /// Cutoff distance `D0` in frequency-plane pixels, strictly positive.
    pub cutoff: f64,
    /// Transfer function family (Butterworth carries its order).
    pub kind: FilterKind,
}

impl HighPassConfig {
    pub fn new(kind: FilterKind, cutoff: f64) -> Self {
        Self { cutoff, kind }
    }

    fn validate(&self) -> Result<(), FilterError> {
        if !(self.cutoff > 0.0 && self.cutoff.is_finite()) {
            return Err(FilterError::InvalidCutoff { got: self.cutoff });
        }
        if let FilterKind::Butterworth { order } = self.kind {
            if order < 1 {
                return Err(FilterError::InvalidOrder { got: order });
            }
        }
        Ok(())
    }
}

impl Default for HighPassConfig {
    fn default() -> Self {
        Self {
            cutoff: 30.0,
            kind: FilterKind::Gaussian,
        }
    }
}

/// Filtered image plus the diagnostic spectrum it came from.
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// Filtered image, same dimensions as the input.
    pub image: IntensityGrid,
    /// Log-magnitude view of the shifted forward spectrum, at the padded
    /// dimensions.
    pub spectrum: IntensityGrid,
}

// ── Pipeline ───────────────────────────────────────────────────────────────

/// Apply a frequency-domain high-pass filter to an image.
///
/// The image is zero-padded so each axis is the next power of two, pushed
/// through forward transform, shift, kernel multiply, unshift, and inverse
/// transform, then reduced to magnitudes, min-max normalized to [0, 255],
/// and cropped back to the input dimensions.
pub fn apply_high_pass(
    image: &IntensityGrid,
    config: &HighPassConfig,
) -> Result<IntensityGrid, FilterError> {
    let shifted = forward_spectrum(image, config)?;
    filter_and_reconstruct(shifted, image.rows(), image.cols(), config)
}

/// Like [`apply_high_pass`], additionally returning the log-magnitude
/// spectrum image for diagnostics.
pub fn apply_high_pass_with_spectrum(
    image: &IntensityGrid,
    config: &HighPassConfig,
) -> Result<FilterOutput, FilterError> {
    let shifted = forward_spectrum(image, config)?;
    let spectrum = spectrum::visualize(&shifted);
    let image = filter_and_reconstruct(shifted, image.rows(), image.cols(), config)?;
    Ok(FilterOutput { image, spectrum })
}

/// Validate, pad, forward-transform, and shift: the spectrum every
/// downstream consumer (kernel multiply, visualization) works on.
fn forward_spectrum(
    image: &IntensityGrid,
    config: &HighPassConfig,
) -> Result<ComplexGrid, FilterError> {
    if image.rows() == 0 || image.cols() == 0 {
        return Err(FilterError::EmptyInput);
    }
    config.validate()?;

    let rows = image.rows().next_power_of_two();
    let cols = image.cols().next_power_of_two();
    let mut grid = ComplexGrid::from_intensity_padded(image, rows, cols);
    fft::fft_2d(&mut grid, false)?;
    fft_shift(&mut grid);
    Ok(grid)
}

fn filter_and_reconstruct(
    mut shifted: ComplexGrid,
    orig_rows: usize,
    orig_cols: usize,
    config: &HighPassConfig,
) -> Result<IntensityGrid, FilterError> {
    let kernel = FilterKernel::generate(shifted.rows(), shifted.cols(), config.kind, config.cutoff);
    kernel.apply(&mut shifted);

    fft_shift(&mut shifted);
    fft::fft_2d(&mut shifted, true)?;

    let normalized = shifted.magnitude().min_max_normalized(DISPLAY_MAX);
    Ok(normalized.cropped(orig_rows, orig_cols))
}
