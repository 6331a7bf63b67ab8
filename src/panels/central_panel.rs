use eframe::egui::{self, Pos2, Rect, Sense};

use crate::renderer::Renderer;
use crate::PaintApp;

/// Canvas pixel under a screen position; may lie outside the canvas
fn to_canvas(pos: Pos2, canvas_rect: Rect) -> (i32, i32) {
    let local = pos - canvas_rect.min;
    (local.x.floor() as i32, local.y.floor() as i32)
}

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let size = Renderer::canvas_size(app.canvas());
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Translate pointer events into brush calls
            let brush = app.settings().brush();
            let moved = ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);
            if let Some(pos) = response.interact_pointer_pos() {
                let (x, y) = to_canvas(pos, canvas_rect);
                if response.drag_started() {
                    app.canvas_mut().on_pointer_down(x, y, brush);
                } else if response.dragged() && moved {
                    app.canvas_mut().on_pointer_move(x, y);
                }
            }
            // A click without movement never becomes a drag; it still paints one dab
            if response.clicked() && !app.canvas().brush().is_down() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = to_canvas(pos, canvas_rect);
                    app.canvas_mut().on_pointer_down(x, y, brush);
                    app.canvas_mut().on_pointer_up(x, y);
                }
            }
            if response.drag_stopped() {
                let (x, y) = response
                    .interact_pointer_pos()
                    .or_else(|| ui.input(|i| i.pointer.latest_pos()))
                    .map(|pos| to_canvas(pos, canvas_rect))
                    .unwrap_or_default();
                app.canvas_mut().on_pointer_up(x, y);
            }

            let (canvas, renderer) = app.canvas_and_renderer();
            renderer.render(ctx, &painter, canvas_rect, canvas);

            if let Some(hover) = response.hover_pos() {
                let (x, y) = to_canvas(hover, canvas_rect);
                let center = canvas_rect.min + egui::vec2(x as f32 + 0.5, y as f32 + 0.5);
                renderer.render_brush_cursor(&painter, center, brush.radius);
            }
        });
    });
}
