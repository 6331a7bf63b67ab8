use crate::buffer::{FloatBuffer, PixelBuffer};
use crate::pixel::{saturate, FloatPixel, Rgba};

use super::convolve::{convolve, Kernel};
use super::Boundary;

const SMOOTH: [f32; 3] = [1.0, 2.0, 1.0];
const DIFFERENCE: [f32; 3] = [-1.0, 0.0, 1.0];

/// BT.601 luma of a pixel
#[inline]
pub fn luminance(p: Rgba) -> u8 {
    saturate(0.299 * p.r as f32 + 0.587 * p.g as f32 + 0.114 * p.b as f32)
}

/// Replace r/g/b with their luma, leaving alpha alone. Applying it twice is a no-op.
pub fn grayscale(buffer: &mut PixelBuffer) {
    for p in buffer.pixels_mut() {
        let y = luminance(*p);
        p.r = y;
        p.g = y;
        p.b = y;
    }
}

/// Sobel gradient magnitude, scaled by `sensitivity` and written as an opaque gray image.
///
/// The caller's buffer is left untouched; grayscale conversion happens on a copy.
pub fn detect_edges(buffer: &PixelBuffer, sensitivity: f32, boundary: Boundary) -> PixelBuffer {
    let mut gray = buffer.clone();
    grayscale(&mut gray);
    let gray = FloatBuffer::from(&gray);

    // Gx: smooth down the columns, difference along the rows
    let gx = convolve(
        &convolve(&gray, &Kernel::column(&SMOOTH), boundary),
        &Kernel::row(&DIFFERENCE),
        boundary,
    );
    // Gy: the transposed pair
    let gy = convolve(
        &convolve(&gray, &Kernel::row(&SMOOTH), boundary),
        &Kernel::column(&DIFFERENCE),
        boundary,
    );

    let mut magnitude = FloatBuffer::new(gray.width(), gray.height());
    for y in 0..gray.height() {
        for x in 0..gray.width() {
            // all three channels carry the same luma
            let (dx, dy) = (gx.at(x, y).r, gy.at(x, y).r);
            let m = sensitivity * (dx * dx + dy * dy).sqrt();
            magnitude.set(x, y, FloatPixel::splat(m));
        }
    }
    magnitude.to_pixels()
}
