use eframe::egui::{self, Slider};

use crate::settings::{BrushKind, FilterType};
use crate::PaintApp;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                brush_section(app, ui);
                ui.separator();
                filter_section(app, ui);
                ui.separator();
                file_section(app, ui);

                if let Some(status) = app.status() {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
}

fn brush_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Brush");

    let before = app.settings().brush();
    let settings = app.settings_mut();

    for kind in BrushKind::ALL {
        ui.radio_value(&mut settings.brush_type, kind, kind.label());
    }

    ui.horizontal(|ui| {
        ui.label("Color:");
        let color = &mut settings.brush_color;
        let mut rgba = [color.r, color.g, color.b, color.a];
        if ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed() {
            let [r, g, b, a] = rgba;
            *color = crate::pixel::Rgba::new(r, g, b, a);
        }
    });
    ui.add(Slider::new(&mut settings.brush_color.r, 0..=255).text("red"));
    ui.add(Slider::new(&mut settings.brush_color.g, 0..=255).text("green"));
    ui.add(Slider::new(&mut settings.brush_color.b, 0..=255).text("blue"));
    ui.add(Slider::new(&mut settings.brush_color.a, 0..=255).text("alpha"));
    ui.add(Slider::new(&mut settings.brush_radius, 0..=100).text("radius"));

    if app.settings().brush() != before {
        app.brush_settings_changed();
    }

    if ui.button("Clear canvas").clicked() {
        app.clear_canvas();
    }
}

fn filter_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Filter");
    let settings = app.settings_mut();

    ui.radio_value(&mut settings.filter_type, FilterType::EdgeDetect, FilterType::EdgeDetect.label());
    ui.add(
        Slider::new(&mut settings.edge_detect_sensitivity, 0.01..=4.0)
            .text("sensitivity")
            .fixed_decimals(2),
    );

    ui.radio_value(&mut settings.filter_type, FilterType::Blur, FilterType::Blur.label());
    ui.add(Slider::new(&mut settings.blur_radius, 0..=100).text("radius"));

    ui.radio_value(&mut settings.filter_type, FilterType::Scale, FilterType::Scale.label());
    ui.add(Slider::new(&mut settings.scale_x, 0.1..=10.0).text("x").fixed_decimals(2));
    ui.add(Slider::new(&mut settings.scale_y, 0.1..=10.0).text("y").fixed_decimals(2));

    if ui.button("Apply Filter").clicked() {
        app.apply_filter();
    }
    if ui.button("Revert Image").clicked() {
        app.revert_image();
    }
}

fn file_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Image");
    ui.label("Path:");
    ui.text_edit_singleline(app.path_input_mut());

    ui.horizontal(|ui| {
        if ui.button("Load Image").clicked() {
            app.load_image();
        }
        if ui.button("Save Image").clicked() {
            app.save_image();
        }
    });

    let canvas = app.canvas();
    ui.label(format!("Canvas: {}x{}", canvas.width(), canvas.height()));
}
