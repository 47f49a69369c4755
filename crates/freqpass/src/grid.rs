//! Owned grid buffers shared by every transform stage.
//!
//! Both grid types store their samples in a single contiguous row-major
//! buffer. The row-pass / transpose / row-pass structure of the 2D
//! transform depends on this layout, so there is no column-major variant.

use image::{GrayImage, Luma};
use num_complex::Complex;

// ── Complex grid ───────────────────────────────────────────────────────────

/// Rectangular grid of complex samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    rows: usize,
    cols: usize,
    data: Vec<Complex<f64>>,
}

impl ComplexGrid {
    /// All-zero grid of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex::new(0.0, 0.0); rows * cols],
        }
    }

    /// Zero-pad an intensity grid into a complex grid of the given
    /// (larger or equal) dimensions, imaginary parts zero.
    pub fn from_intensity_padded(image: &IntensityGrid, rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= image.rows() && cols >= image.cols());
        let mut out = Self::zeros(rows, cols);
        for r in 0..image.rows() {
            for c in 0..image.cols() {
                out.set(r, c, Complex::new(image.get(r, c), 0.0));
            }
        }
        out
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex<f64>) {
        self.data[row * self.cols + col] = value;
    }

    /// Swap two samples, addressed as (row, col).
    #[inline]
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = a.0 * self.cols + a.1;
        let ib = b.0 * self.cols + b.1;
        self.data.swap(ia, ib);
    }

    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex<f64>] {
        &mut self.data
    }

    /// Transposed copy: output is `cols × rows` with `out[c][r] = self[r][c]`.
    pub fn transposed(&self) -> Self {
        let mut data = vec![Complex::new(0.0, 0.0); self.data.len()];
        let mut src = 0;
        for row in 0..self.rows {
            let mut dst = row;
            for _ in 0..self.cols {
                data[dst] = self.data[src];
                src += 1;
                dst += self.rows;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Elementwise modulus of every sample.
    pub fn magnitude(&self) -> IntensityGrid {
        IntensityGrid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|z| z.norm()).collect(),
        }
    }
}

// ── Intensity grid ─────────────────────────────────────────────────────────

/// Rectangular grid of real non-negative samples (a grayscale image),
/// row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl IntensityGrid {
    /// All-zero grid of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Constant grid of the given dimensions.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Take ownership of a row-major sample buffer.
    ///
    /// Returns `None` when the buffer length does not match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Copy an 8-bit grayscale image into an intensity grid.
    pub fn from_gray(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let mut out = Self::zeros(height as usize, width as usize);
        for (x, y, pixel) in image.enumerate_pixels() {
            out.set(y as usize, x as usize, f64::from(pixel[0]));
        }
        out
    }

    /// Render as an 8-bit grayscale image, samples clamped to [0, 255].
    pub fn to_gray(&self) -> GrayImage {
        let mut out = GrayImage::new(self.cols as u32, self.rows as u32);
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.get(r, c).clamp(0.0, 255.0).round() as u8;
                out.put_pixel(c as u32, r as u32, Luma([v]));
            }
        }
        out
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Minimum and maximum sample, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        let mut lo = first;
        let mut hi = first;
        for v in iter {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Some((lo, hi))
    }

    /// Linear min-max rescale mapping the sample range onto `[0, hi]`.
    ///
    /// A pure monotone rescale: relative ordering of samples is preserved.
    /// A constant grid (zero range) maps to all zeros.
    pub fn min_max_normalized(&self, hi: f64) -> Self {
        let Some((lo, max)) = self.min_max() else {
            return self.clone();
        };
        let range = max - lo;
        if range <= 0.0 {
            return Self::zeros(self.rows, self.cols);
        }
        let scale = hi / range;
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| (v - lo) * scale).collect(),
        }
    }

    /// Top-left crop to `rows × cols` (must not exceed the grid).
    pub fn cropped(&self, rows: usize, cols: usize) -> Self {
        assert!(rows <= self.rows && cols <= self.cols);
        let mut out = Self::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                out.set(r, c, self.get(r, c));
            }
        }
        out
    }
}
