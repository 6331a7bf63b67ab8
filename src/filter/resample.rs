use log::warn;

use crate::buffer::{FloatBuffer, PixelBuffer};
use crate::pixel::FloatPixel;

use super::Boundary;

/// Largest image `scale` will produce, including the intermediate pass
pub const MAX_SCALED_PIXELS: usize = 1 << 25;

/// Output size for one axis: `round(len * factor)`, at least one pixel
pub fn scaled_len(len: usize, factor: f32) -> usize {
    let scaled = (len as f64 * factor as f64).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled as usize
    } else {
        1
    }
}

/// Footprint of the tent filter for scale factor `a`.
/// Widened when shrinking so every source pixel contributes.
#[inline]
fn filter_radius(a: f64) -> f64 {
    if a >= 1.0 { 1.0 } else { 1.0 / a }
}

/// Unit-area triangle of half-width `filter_radius(a)`
#[inline]
pub fn tent(x: f64, a: f64) -> f64 {
    let radius = filter_radius(a);
    if x.abs() > radius {
        0.0
    } else {
        (1.0 - x.abs() / radius) / radius
    }
}

/// Scale factor actually used along an axis. Invalid factors fall back to the
/// ratio implied by the clamped output size; tiny factors are limited so the
/// filter footprint never exceeds the whole source.
fn effective_factor(len: usize, new_len: usize, factor: f32) -> f64 {
    let min = 1.0 / len as f64;
    if factor.is_finite() && factor > 0.0 {
        (factor as f64).max(min)
    } else {
        (new_len as f64 / len as f64).max(min)
    }
}

/// Resample one axis of `input` to `new_len` samples.
fn resample_axis(input: &FloatBuffer, new_len: usize, a: f64, horizontal: bool, boundary: Boundary) -> FloatBuffer {
    let (width, height) = (input.width(), input.height());
    let (src_len, fixed_len) = if horizontal { (width, height) } else { (height, width) };
    let (out_w, out_h) = if horizontal { (new_len, height) } else { (width, new_len) };
    let mut output = FloatBuffer::new(out_w, out_h);
    let radius = filter_radius(a);

    for k in 0..new_len {
        let center = k as f64 / a + (1.0 - a) / (2.0 * a);
        let left = (center - radius).ceil() as i64;
        let right = (center + radius).floor() as i64;

        // the same tap set serves every row (or column) of this output position
        let taps: Vec<(usize, f32)> = (left..=right)
            .filter_map(|i| {
                let w = tent(i as f64 - center, a);
                (w > 0.0).then(|| (boundary.resolve(i, src_len), w as f32))
            })
            .collect();
        let total: f32 = taps.iter().map(|&(_, w)| w).sum();

        for fixed in 0..fixed_len {
            let value = if total > 0.0 {
                let acc = taps.iter().fold(FloatPixel::ZERO, |acc, &(i, w)| {
                    let src = if horizontal { input.at(i, fixed) } else { input.at(fixed, i) };
                    acc.mul_add(src, w)
                });
                acc.scale(1.0 / total)
            } else {
                // nearest sample; only reachable with degenerate factors
                let i = boundary.resolve(center.round() as i64, src_len);
                if horizontal { input.at(i, fixed) } else { input.at(fixed, i) }
            };
            if horizontal {
                output.set(k, fixed, value);
            } else {
                output.set(fixed, k, value);
            }
        }
    }

    output
}

/// Scale `buffer` by `(scale_x, scale_y)` with a separable tent filter.
///
/// Horizontal pass first, producing a `new_width x height` intermediate, then
/// the vertical pass on that intermediate. The returned buffer carries the
/// new dimensions.
///
/// A result (or intermediate) above [`MAX_SCALED_PIXELS`] is refused and the
/// input comes back unchanged.
pub fn scale(buffer: &PixelBuffer, scale_x: f32, scale_y: f32, boundary: Boundary) -> PixelBuffer {
    if buffer.is_empty() {
        return buffer.clone();
    }
    let new_width = scaled_len(buffer.width(), scale_x);
    let new_height = scaled_len(buffer.height(), scale_y);
    let within_budget = |w: usize, h: usize| w.checked_mul(h).is_some_and(|n| n <= MAX_SCALED_PIXELS);
    if !within_budget(new_width, buffer.height()) || !within_budget(new_width, new_height) {
        warn!(
            "Refusing to scale {}x{} to {}x{}: more than {} pixels",
            buffer.width(),
            buffer.height(),
            new_width,
            new_height,
            MAX_SCALED_PIXELS
        );
        return buffer.clone();
    }
    let ax = effective_factor(buffer.width(), new_width, scale_x);
    let ay = effective_factor(buffer.height(), new_height, scale_y);

    let source = FloatBuffer::from(buffer);
    let horizontal = resample_axis(&source, new_width, ax, true, boundary);
    let vertical = resample_axis(&horizontal, new_height, ay, false, boundary);
    vertical.to_pixels()
}
