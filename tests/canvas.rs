use std::path::PathBuf;

use eframe_brush_filter::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use eframe_brush_filter::{BrushKind, Canvas, FilterKind, PixelBuffer, Rgba, Settings};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eframe_brush_filter_{}_{}", std::process::id(), name))
}

fn red_brush() -> Settings {
    Settings {
        brush_type: BrushKind::Constant,
        brush_radius: 3,
        brush_color: Rgba::opaque(255, 0, 0),
        ..Settings::default()
    }
}

#[test]
fn test_default_canvas_is_white() {
    let canvas = Canvas::default();
    assert_eq!((canvas.width(), canvas.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert!(canvas.pixels().pixels().iter().all(|&p| p == Rgba::WHITE));
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.brush_type, BrushKind::Linear);
    assert_eq!(settings.brush_radius, 10);
    assert_eq!(settings.brush_color, Rgba::opaque(0, 0, 0));
    assert_eq!(settings.filter(), FilterKind::EdgeDetect { sensitivity: 0.5 });
    assert!(settings.image_path.is_none());
}

#[test]
fn test_settings_missing_fields_use_defaults() {
    // settings written by an older build only knew about the brush
    let settings: Settings = serde_json::from_str(r#"{ "brush_radius": 4 }"#).unwrap();
    assert_eq!(settings.brush_radius, 4);
    assert_eq!(settings.scale_x, 2.0);
    assert_eq!(settings.blur_radius, 10);
}

#[test]
fn test_paint_and_clear() {
    let mut canvas = Canvas::new(20, 20);
    let settings = red_brush();
    let start = canvas.version();

    canvas.on_pointer_down(10, 10, settings.brush());
    canvas.on_pointer_move(12, 10);
    canvas.on_pointer_up(12, 10);

    assert_eq!(canvas.pixels().get(10, 10), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(canvas.pixels().get(15, 10), Some(Rgba::opaque(255, 0, 0)));
    assert!(canvas.version() > start);

    canvas.clear();
    assert!(canvas.pixels().pixels().iter().all(|&p| p == Rgba::WHITE));
}

#[test]
fn test_pointer_outside_canvas_is_tolerated() {
    let mut canvas = Canvas::new(10, 10);
    let settings = red_brush();

    canvas.on_pointer_down(-50, 400, settings.brush());
    canvas.on_pointer_move(i32::MAX / 2, i32::MIN / 2);
    canvas.on_pointer_up(-1, -1);

    assert!(canvas.pixels().pixels().iter().all(|&p| p == Rgba::WHITE));
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut canvas = Canvas::new(10, 10);
    let version = canvas.version();
    canvas.on_pointer_move(5, 5);
    assert_eq!(canvas.version(), version);
}

#[test]
fn test_filter_replaces_buffer() {
    let mut canvas = Canvas::new(10, 6);
    canvas.apply_filter(&FilterKind::Scale { x: 2.0, y: 0.5 });
    assert_eq!((canvas.width(), canvas.height()), (20, 3));
}

#[test]
fn test_resize_preserves_overlap() {
    let mut canvas = Canvas::new(4, 4);
    canvas.on_pointer_down(0, 0, Settings { brush_radius: 0, ..red_brush() }.brush());
    canvas.on_pointer_up(0, 0);

    canvas.resize(6, 2);
    assert_eq!(canvas.pixels().pixels().len(), 12);
    assert_eq!(canvas.pixels().get(0, 0), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(canvas.pixels().get(5, 1), Some(Rgba::WHITE));
}

#[test]
fn test_failed_load_leaves_canvas_unchanged() {
    let mut canvas = Canvas::new(8, 8);
    canvas.on_pointer_down(4, 4, red_brush().brush());
    let before = canvas.pixels().clone();
    let version = canvas.version();

    assert!(!canvas.load_image(&temp_path("does_not_exist.png")));
    assert_eq!(canvas.pixels(), &before);
    assert_eq!(canvas.version(), version);

    // a file that exists but isn't an image
    let bogus = temp_path("bogus.png");
    std::fs::write(&bogus, b"definitely not a png").unwrap();
    assert!(!canvas.load_image(&bogus));
    assert_eq!(canvas.pixels(), &before);
    let _ = std::fs::remove_file(bogus);
}

#[test]
fn test_save_and_load_png() {
    let path = temp_path("roundtrip.png");
    let mut pixels = PixelBuffer::new(5, 3, Rgba::WHITE);
    *pixels.get_mut(1, 2).unwrap() = Rgba::new(10, 20, 30, 255);
    *pixels.get_mut(4, 0).unwrap() = Rgba::new(200, 100, 50, 128);
    let canvas = Canvas::from_pixels(pixels.clone());

    assert!(canvas.save_image(&path));

    let mut loaded = Canvas::default();
    assert!(loaded.load_image(&path));
    assert_eq!(loaded.pixels(), &pixels);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_save_to_bad_path_fails() {
    let canvas = Canvas::new(2, 2);
    let path = temp_path("missing_dir").join("nested").join("out.png");
    assert!(!canvas.save_image(&path));
}

#[test]
fn test_revert_reloads_image() {
    let path = temp_path("revert.png");
    let original = PixelBuffer::new(6, 6, Rgba::opaque(0, 128, 255));
    assert!(Canvas::from_pixels(original.clone()).save_image(&path));

    let settings = Settings {
        image_path: Some(path.clone()),
        ..red_brush()
    };
    let mut canvas = Canvas::default();
    assert!(canvas.load_image(&path));
    canvas.on_pointer_down(3, 3, settings.brush());
    canvas.on_pointer_up(3, 3);
    assert_ne!(canvas.pixels(), &original);

    assert!(canvas.revert(&settings));
    assert_eq!(canvas.pixels(), &original);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_revert_without_image_fails() {
    let mut canvas = Canvas::new(3, 3);
    assert!(!canvas.revert(&Settings::default()));
}

#[test]
fn test_click_paints_single_dab() {
    // a click is a press and release at the same spot with no movement
    let mut canvas = Canvas::new(9, 9);
    let brush = Settings { brush_radius: 1, ..red_brush() }.brush();
    let version = canvas.version();

    canvas.on_pointer_down(4, 4, brush);
    canvas.on_pointer_up(4, 4);

    assert!(!canvas.brush().is_down());
    assert!(canvas.version() > version);
    assert_eq!(canvas.pixels().get(4, 4), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(canvas.pixels().get(5, 4), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(canvas.pixels().get(6, 4), Some(Rgba::WHITE));
}
