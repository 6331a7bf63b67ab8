use std::path::{Path, PathBuf};

use log::info;

use crate::canvas::Canvas;
use crate::file_handler::FileHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::Settings;

/// We derive Deserialize/Serialize so the brush and filter settings survive a restart.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    settings: Settings,
    // Path typed into the side panel for load/save
    path_input: String,
    #[serde(skip)]
    canvas: Canvas,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    file_handler: FileHandler,
    #[serde(skip)]
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            path_input: String::new(),
            canvas: Canvas::default(),
            renderer: Renderer::default(),
            file_handler: FileHandler::new(),
            status: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: PaintApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.renderer = Renderer::new(cc);

        // Reopen whatever image was being edited last time
        if let Some(path) = app.settings.image_path.clone() {
            if !app.canvas.load_image(&path) {
                app.settings.image_path = None;
            }
        }
        app.canvas.settings_changed(app.settings.brush());
        info!("Canvas ready: {}x{}", app.canvas.width(), app.canvas.height());
        app
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Canvas and renderer borrowed together for drawing
    pub fn canvas_and_renderer(&mut self) -> (&mut Canvas, &mut Renderer) {
        (&mut self.canvas, &mut self.renderer)
    }

    pub fn path_input_mut(&mut self) -> &mut String {
        &mut self.path_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    fn typed_path(&self) -> Option<PathBuf> {
        let trimmed = self.path_input.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Push the current brush settings into the canvas
    pub fn brush_settings_changed(&mut self) {
        self.canvas.settings_changed(self.settings.brush());
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.settings.image_path = None;
        self.set_status("Canvas cleared");
    }

    pub fn load_image(&mut self) {
        let Some(path) = self.typed_path() else {
            self.set_status("Enter an image path first");
            return;
        };
        self.load_image_from(&path);
    }

    fn load_image_from(&mut self, path: &Path) {
        if self.canvas.load_image(path) {
            self.settings.image_path = Some(path.to_path_buf());
            self.set_status(format!("Loaded {}", path.display()));
        } else {
            self.set_status(format!("Failed to load {}", path.display()));
        }
    }

    pub fn save_image(&mut self) {
        let Some(path) = self.typed_path() else {
            self.set_status("Enter a path to save to");
            return;
        };
        if self.canvas.save_image(&path) {
            self.set_status(format!("Saved {}", path.display()));
        } else {
            self.set_status(format!("Failed to save {}", path.display()));
        }
    }

    pub fn revert_image(&mut self) {
        if self.canvas.revert(&self.settings) {
            self.set_status("Reverted to the original image");
        } else {
            self.set_status("Nothing to revert to");
        }
    }

    pub fn apply_filter(&mut self) {
        let filter = self.settings.filter();
        self.canvas.apply_filter(&filter);
        self.set_status(format!(
            "Applied {} ({}x{})",
            filter.name(),
            self.canvas.width(),
            self.canvas.height()
        ));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        // Only the last image dropped ends up on the canvas
        if let Some(image) = self.file_handler.take_dropped_images().pop() {
            self.canvas.set_pixels(image.pixels);
            self.settings.image_path = image.path.clone();
            if let Some(path) = image.path {
                self.path_input = path.display().to_string();
            }
            self.set_status("Loaded dropped image");
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
