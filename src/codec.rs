use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{CodecError, CodecResult};

/// File extensions the loader understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// True when the path has an extension we can decode
pub fn is_supported_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn to_buffer(image: DynamicImage) -> CodecResult<PixelBuffer> {
    let rgba = image.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    PixelBuffer::from_rgba_bytes(width, height, rgba.as_raw())
        .ok_or(CodecError::InvalidDimensions { width, height })
}

/// Decode an image file into packed RGBA8 pixels
pub fn decode(path: &Path) -> CodecResult<PixelBuffer> {
    let image = image::open(path).map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Decoded {}: {}x{}", path.display(), image.width(), image.height());
    to_buffer(image)
}

/// Decode an in-memory file, e.g. one dropped onto the window
pub fn decode_bytes(bytes: &[u8], name: &Path) -> CodecResult<PixelBuffer> {
    let image = image::load_from_memory(bytes).map_err(|source| CodecError::Decode {
        path: name.to_path_buf(),
        source,
    })?;
    to_buffer(image)
}

/// Encode `buffer` to `path`, picking the format from the extension.
/// Formats without an alpha channel get RGB8.
pub fn encode(path: &Path, buffer: &PixelBuffer) -> CodecResult<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let rgba = RgbaImage::from_raw(width as u32, height as u32, buffer.to_rgba_bytes())
        .ok_or(CodecError::InvalidDimensions { width, height })?;
    let image = DynamicImage::ImageRgba8(rgba);

    let result = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => image.to_rgb8().save(path),
        _ => image.save(path),
    };
    result.map_err(|source| CodecError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
