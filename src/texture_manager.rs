use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::canvas::Canvas;

/// Errors that can occur during texture upload
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Invalid texture dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Keeps the GPU copy of the canvas in sync, re-uploading only when the
/// canvas version changes
pub struct TextureManager {
    handle: Option<TextureHandle>,
    /// Canvas version currently on the GPU
    uploaded_version: Option<u64>,
    /// Number of uploads performed, for diagnostics
    uploads: u64,
}

impl Default for TextureManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self {
            handle: None,
            uploaded_version: None,
            uploads: 0,
        }
    }

    /// Texture showing the current canvas, uploading it first if stale
    pub fn canvas_texture(&mut self, canvas: &Canvas, ctx: &Context) -> Result<TextureId, TextureError> {
        let (width, height) = (canvas.width(), canvas.height());
        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions { width, height });
        }

        if let (Some(handle), Some(version)) = (&self.handle, self.uploaded_version) {
            if version == canvas.version() {
                return Ok(handle.id());
            }
        }

        let image = color_image(canvas.pixels());
        let id = match &mut self.handle {
            Some(handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("canvas", image, TextureOptions::NEAREST);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        };
        self.uploaded_version = Some(canvas.version());
        self.uploads += 1;
        Ok(id)
    }

    /// Force a re-upload on the next frame
    pub fn invalidate(&mut self) {
        self.uploaded_version = None;
    }

    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}

/// Convert the canvas pixels into an egui image
pub fn color_image(pixels: &PixelBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([pixels.width(), pixels.height()], &pixels.to_rgba_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let canvas = Canvas::new(8, 8);

        let first = manager.canvas_texture(&canvas, &ctx).unwrap();
        let second = manager.canvas_texture(&canvas, &ctx).unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.upload_count(), 1);
    }

    #[test]
    fn test_reupload_after_paint() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let mut canvas = Canvas::new(8, 8);

        let first = manager.canvas_texture(&canvas, &ctx).unwrap();
        canvas.on_pointer_down(4, 4, Settings::default().brush());
        let second = manager.canvas_texture(&canvas, &ctx).unwrap();

        // same texture slot, new contents
        assert_eq!(first, second);
        assert_eq!(manager.upload_count(), 2);
    }

    #[test]
    fn test_invalidation() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let canvas = Canvas::new(4, 4);

        manager.canvas_texture(&canvas, &ctx).unwrap();
        manager.invalidate();
        manager.canvas_texture(&canvas, &ctx).unwrap();

        assert_eq!(manager.upload_count(), 2);
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let canvas = Canvas::new(0, 10);

        assert!(matches!(
            manager.canvas_texture(&canvas, &ctx),
            Err(TextureError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_color_image_layout() {
        let pixels = PixelBuffer::new(3, 2, crate::pixel::Rgba::opaque(10, 20, 30));
        let image = color_image(&pixels);
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[5], egui::Color32::from_rgb(10, 20, 30));
    }
}
