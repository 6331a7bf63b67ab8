use std::path::Path;

use log::{error, info, warn};

use crate::brush::BrushTool;
use crate::buffer::PixelBuffer;
use crate::codec;
use crate::filter;
use crate::pixel::Rgba;
use crate::settings::{BrushConfig, FilterKind, Settings};

pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_HEIGHT: usize = 500;

/// The editable image plus the brush currently painting on it.
///
/// Brushes mutate the pixels in place; filters replace them wholesale.
/// Every mutation bumps [`Canvas::version`] so the display layer knows when
/// to re-upload.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: PixelBuffer,
    brush: BrushTool,
    version: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Canvas {
    /// A blank white canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height, Rgba::WHITE),
            brush: BrushTool::default(),
            version: 0,
        }
    }

    pub fn from_pixels(pixels: PixelBuffer) -> Self {
        Self {
            pixels,
            brush: BrushTool::default(),
            version: 0,
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn brush(&self) -> &BrushTool {
        &self.brush
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Paint every pixel opaque white
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba::WHITE);
        self.touch();
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.pixels.resize(width, height, Rgba::WHITE);
        self.touch();
    }

    /// Replace the canvas with an already-decoded image
    pub fn set_pixels(&mut self, pixels: PixelBuffer) {
        self.pixels = pixels;
        self.touch();
    }

    /// Load an image file. On failure the canvas is left unchanged.
    pub fn load_image(&mut self, path: &Path) -> bool {
        match codec::decode(path) {
            Ok(pixels) => {
                info!("Loaded {} ({}x{})", path.display(), pixels.width(), pixels.height());
                self.set_pixels(pixels);
                true
            }
            Err(err) => {
                error!("{}", err);
                false
            }
        }
    }

    pub fn save_image(&self, path: &Path) -> bool {
        match codec::encode(path, &self.pixels) {
            Ok(()) => {
                info!("Saved {} ({}x{})", path.display(), self.width(), self.height());
                true
            }
            Err(err) => {
                error!("{}", err);
                false
            }
        }
    }

    /// Reload the image the settings point at, discarding edits
    pub fn revert(&mut self, settings: &Settings) -> bool {
        match settings.image_path.as_deref() {
            Some(path) => self.load_image(path),
            None => {
                warn!("Nothing to revert to: no image has been loaded");
                false
            }
        }
    }

    /// Run a filter and swap in its result
    pub fn apply_filter(&mut self, filter: &FilterKind) {
        self.pixels = filter::apply_filter(&self.pixels, filter);
        self.touch();
    }

    pub fn settings_changed(&mut self, brush: BrushConfig) {
        self.brush.settings_changed(brush);
    }

    pub fn on_pointer_down(&mut self, x: i32, y: i32, brush: BrushConfig) {
        self.brush.on_pointer_down(&mut self.pixels, x, y, brush);
        self.touch();
    }

    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        if self.brush.on_pointer_move(&mut self.pixels, x, y) {
            self.touch();
        }
    }

    pub fn on_pointer_up(&mut self, x: i32, y: i32) {
        self.brush.on_pointer_up(x, y);
    }
}
