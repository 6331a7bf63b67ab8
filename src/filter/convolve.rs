use crate::buffer::{FloatBuffer, PixelBuffer};
use crate::pixel::FloatPixel;

use super::Boundary;

/// Row-major 2-D weights. 1-D kernels are `1 x n` rows or `n x 1` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Returns `None` for an empty kernel or mismatched length
    pub fn new(width: usize, height: usize, weights: Vec<f32>) -> Option<Self> {
        if width == 0 || height == 0 || weights.len() != width * height {
            return None;
        }
        Some(Self { width, height, weights })
    }

    /// Horizontal `1 x n` kernel
    pub fn row(weights: &[f32]) -> Self {
        Self::one_d(weights, true)
    }

    /// Vertical `n x 1` kernel
    pub fn column(weights: &[f32]) -> Self {
        Self::one_d(weights, false)
    }

    fn one_d(weights: &[f32], horizontal: bool) -> Self {
        let weights = if weights.is_empty() { vec![1.0] } else { weights.to_vec() };
        let n = weights.len();
        let (width, height) = if horizontal { (n, 1) } else { (1, n) };
        Self { width, height, weights }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

/// Normalized 1-D Gaussian of `2 * radius + 1` taps, `sigma = max(1, radius / 3)`
pub fn gaussian_weights(radius: u32) -> Vec<f32> {
    let sigma = (radius as f64 / 3.0).max(1.0);
    let two_sigma_sq = 2.0 * sigma * sigma;
    let norm = 1.0 / (std::f64::consts::PI * two_sigma_sq).sqrt();
    let center = radius as f64;

    let raw: Vec<f64> = (0..=2 * radius as usize)
        .map(|x| {
            let d = x as f64 - center;
            norm * (-(d * d) / two_sigma_sq).exp()
        })
        .collect();

    // renormalize so the truncated tails don't shift overall brightness
    let total: f64 = raw.iter().sum();
    raw.iter().map(|w| (w / total) as f32).collect()
}

/// Convolve `input` with `kernel` (true convolution, the kernel is flipped).
///
/// Reads only from `input` and writes a fresh buffer, so no output pixel is
/// ever fed back into the computation. Samples outside the image go through
/// `boundary`. Nothing is clamped here.
pub fn convolve(input: &FloatBuffer, kernel: &Kernel, boundary: Boundary) -> FloatBuffer {
    let (width, height) = (input.width(), input.height());
    let mut output = FloatBuffer::new(width, height);
    if input.is_empty() {
        return output;
    }

    let (kw, kh) = (kernel.width(), kernel.height());
    let (cx, cy) = ((kw / 2) as i64, (kh / 2) as i64);
    let weights = kernel.weights();

    for r in 0..height {
        for c in 0..width {
            let mut acc = FloatPixel::ZERO;
            for i in 0..kh {
                let sy = boundary.resolve(r as i64 + i as i64 - cy, height);
                for j in 0..kw {
                    let sx = boundary.resolve(c as i64 + j as i64 - cx, width);
                    let weight = weights[(kh - 1 - i) * kw + (kw - 1 - j)];
                    acc = acc.mul_add(input.at(sx, sy), weight);
                }
            }
            output.set(c, r, acc);
        }
    }

    output
}

/// Separable Gaussian blur: horizontal pass, then vertical pass, clamped once at the end
pub fn blur(buffer: &PixelBuffer, radius: u32, boundary: Boundary) -> PixelBuffer {
    let weights = gaussian_weights(radius);
    let horizontal = convolve(&FloatBuffer::from(buffer), &Kernel::row(&weights), boundary);
    let vertical = convolve(&horizontal, &Kernel::column(&weights), boundary);
    vertical.to_pixels()
}
