use std::path::PathBuf;

use eframe::egui;

use crate::buffer::PixelBuffer;
use crate::codec;

/// An image decoded from a file dropped onto the window
pub struct DroppedImage {
    /// Where it came from, when the platform exposes a path
    pub path: Option<PathBuf>,
    pub pixels: PixelBuffer,
}

/// Turns files dropped onto the window into canvas images
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if there is something to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the pending files. Unsupported or unreadable files are logged and skipped.
    pub fn take_dropped_images(&mut self) -> Vec<DroppedImage> {
        std::mem::take(&mut self.dropped_files)
            .iter()
            .filter_map(Self::decode_file)
            .collect()
    }

    fn decode_file(file: &egui::DroppedFile) -> Option<DroppedImage> {
        let name = match &file.path {
            Some(path) => path.clone(),
            None => PathBuf::from(if file.name.is_empty() { "unknown" } else { file.name.as_str() }),
        };

        if !Self::is_image_file(file) {
            log::warn!("Dropped file is not a supported type: {}", name.display());
            return None;
        }

        let decoded = if let Some(bytes) = &file.bytes {
            log::info!("Processing image from memory: {} ({} bytes)", name.display(), bytes.len());
            codec::decode_bytes(bytes, &name)
        } else if let Some(path) = &file.path {
            log::info!("Processing image from path: {}", path.display());
            codec::decode(path)
        } else {
            log::warn!("Dropped file has no accessible data: {}", name.display());
            return None;
        };

        match decoded {
            Ok(pixels) => Some(DroppedImage {
                path: file.path.clone(),
                pixels,
            }),
            Err(err) => {
                log::error!("{}", err);
                None
            }
        }
    }

    /// Check if a file is an image based on MIME type or extension
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            file.mime.starts_with("image/")
        } else if let Some(path) = &file.path {
            codec::is_supported_path(path)
        } else {
            codec::is_supported_path(std::path::Path::new(&file.name))
        }
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}
