#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod buffer;
pub mod canvas;
pub mod codec;
pub mod error;
pub mod file_handler;
pub mod filter;
pub mod panels;
pub mod pixel;
pub mod renderer;
pub mod settings;
pub mod texture_manager;

pub use app::PaintApp;
pub use brush::{BrushMask, BrushTool, SmudgePickup, StrokeState};
pub use buffer::{FloatBuffer, PixelBuffer};
pub use canvas::Canvas;
pub use error::CodecError;
pub use filter::{apply_filter, Boundary, Kernel};
pub use pixel::{FloatPixel, Rgba};
pub use renderer::Renderer;
pub use settings::{BrushConfig, BrushKind, FilterKind, FilterType, Settings};
