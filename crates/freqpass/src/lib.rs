//! freqpass — frequency-domain high-pass filtering for grayscale images.
//!
//! The engine reconstructs an image after attenuating its low-frequency
//! content. The pipeline stages are:
//!
//! 1. **Pad** – zero-pad the intensity grid so both axes are powers of two.
//! 2. **Transform** – separable 2D radix-2 FFT (rows, transpose, rows).
//! 3. **Shift** – quadrant swap relocating DC to the grid center.
//! 4. **Filter** – elementwise multiply by a real high-pass transfer
//!    function (ideal, Gaussian, or Butterworth).
//! 5. **Reconstruct** – unshift, inverse transform, magnitude, min-max
//!    normalization to the display range, crop to the input size.
//!
//! # Public API
//! - [`apply_high_pass`] and [`HighPassConfig`] as primary entry points
//! - [`apply_high_pass_with_spectrum`] for a diagnostic spectrum image
//! - [`fft_1d`] / [`fft_2d`] / [`fft_shift`] as standalone transform tools
//!
//! Image decoding, display, and any CLI surface are the caller's concern;
//! the engine consumes and produces owned [`IntensityGrid`] buffers, with
//! [`image::GrayImage`] adapters at the boundary.

pub mod fft;
pub mod filter;
pub mod grid;
pub mod pipeline;
pub mod shift;
pub mod spectrum;

pub use fft::{fft_1d, fft_2d, FftError};
pub use filter::{FilterKernel, FilterKind, IdealRegion};
pub use grid::{ComplexGrid, IntensityGrid};
pub use pipeline::{
    apply_high_pass, apply_high_pass_with_spectrum, FilterError, FilterOutput, HighPassConfig,
};
pub use shift::fft_shift;
pub use spectrum::visualize;
