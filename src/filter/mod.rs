mod boundary;
pub mod convolve;
pub mod resample;
pub mod sobel;

use std::time::Instant;

use log::info;

use crate::buffer::PixelBuffer;
use crate::settings::FilterKind;

pub use boundary::Boundary;
pub use convolve::{blur, convolve, gaussian_weights, Kernel};
pub use resample::{scale, MAX_SCALED_PIXELS};
pub use sobel::{detect_edges, grayscale, luminance};

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur { .. } => "blur",
            Self::EdgeDetect { .. } => "edge detect",
            Self::Scale { .. } => "scale",
        }
    }
}

/// Run one filter over `buffer` and return the replacement image.
///
/// Blur and scale are two passes each (horizontal, then vertical); edge
/// detection is grayscale followed by the Sobel pair. All sampling outside
/// the image uses [`Boundary::Reflect`].
pub fn apply_filter(buffer: &PixelBuffer, filter: &FilterKind) -> PixelBuffer {
    let started = Instant::now();
    let boundary = Boundary::Reflect;

    let result = match *filter {
        FilterKind::Blur { radius } => blur(buffer, radius, boundary),
        FilterKind::EdgeDetect { sensitivity } => detect_edges(buffer, sensitivity, boundary),
        FilterKind::Scale { x, y } => scale(buffer, x, y, boundary),
    };

    info!(
        "Applied {} filter: {}x{} -> {}x{} in {:.1} ms",
        filter.name(),
        buffer.width(),
        buffer.height(),
        result.width(),
        result.height(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    result
}
