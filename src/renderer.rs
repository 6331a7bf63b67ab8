use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
use log::warn;

use crate::canvas::Canvas;
use crate::texture_manager::TextureManager;

/// Draws the canvas image and the brush cursor
#[derive(Default)]
pub struct Renderer {
    textures: TextureManager,
    // Avoid logging the same upload failure every frame
    reported_failure: bool,
}

impl Renderer {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Screen size the canvas occupies, one point per pixel
    pub fn canvas_size(canvas: &Canvas) -> Vec2 {
        egui::vec2(canvas.width() as f32, canvas.height() as f32)
    }

    /// Renders the canvas into `rect`
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect, canvas: &Canvas) {
        match self.textures.canvas_texture(canvas, ctx) {
            Ok(texture) => {
                self.reported_failure = false;
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture, rect, uv, Color32::WHITE);
            }
            Err(err) => {
                if !self.reported_failure {
                    warn!("Cannot display canvas: {}", err);
                    self.reported_failure = true;
                }
                // Draw a placeholder rectangle
                painter.rect_filled(rect, 0.0, Color32::from_gray(200));
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(100)));
            }
        }
    }

    /// Outline of the brush footprint around the hovered pixel
    pub fn render_brush_cursor(&self, painter: &egui::Painter, center: Pos2, radius: u32) {
        let radius = radius as f32 + 0.5;
        painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::from_black_alpha(160)));
        painter.circle_stroke(center, radius + 1.0, Stroke::new(1.0, Color32::from_white_alpha(160)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter(ctx: &egui::Context, rect: Rect) -> egui::Painter {
        egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect)
    }

    #[test]
    fn test_render_uploads_once() {
        let ctx = egui::Context::default();
        let canvas = Canvas::new(100, 100);
        let rect = Rect::from_min_size(Pos2::ZERO, Renderer::canvas_size(&canvas));
        let painter = painter(&ctx, rect);
        let mut renderer = Renderer::default();

        renderer.render(&ctx, &painter, rect, &canvas);
        renderer.render(&ctx, &painter, rect, &canvas);

        assert_eq!(renderer.textures.upload_count(), 1);
        assert!(!renderer.reported_failure);
    }

    #[test]
    fn test_render_empty_canvas() {
        let ctx = egui::Context::default();
        let canvas = Canvas::new(0, 0);
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(10.0, 10.0));
        let mut renderer = Renderer::default();

        renderer.render(&ctx, &painter(&ctx, rect), rect, &canvas);
        assert!(renderer.reported_failure);
        renderer.render_brush_cursor(&painter(&ctx, rect), rect.center(), 4);
    }
}
