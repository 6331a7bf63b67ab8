//! Pointer-driven brush state machine.
//!
//! The window layer translates its own mouse events into
//! [`BrushTool::on_pointer_down`], [`BrushTool::on_pointer_move`] and
//! [`BrushTool::on_pointer_up`] calls with canvas coordinates.
//!
//! # State Transitions
//!
//! ```text
//!  ┌──────┐  down   ┌──────┐  move   ┌──────────┐
//!  │  Up  ├────────►│ Down ├────────►│ Dragging ├──┐ move
//!  │      │◄────────┤      │         │          │◄─┘
//!  └──────┘   up    └──────┘         └────┬─────┘
//!     ▲                                   │ up
//!     └───────────────────────────────────┘
//! ```
//!
//! Nothing is composited while the tool is `Up`.
use log::debug;

use crate::buffer::PixelBuffer;
use crate::settings::{BrushConfig, BrushKind};

use super::engine::{apply_brush_smudge, apply_brush_stroke};
use super::{BrushMask, SmudgePickup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Up,
    /// Pointer pressed, first point applied
    Down,
    Dragging,
}

#[derive(Debug, Clone)]
pub struct BrushTool {
    state: StrokeState,
    config: BrushConfig,
    mask: BrushMask,
    // Only present while a smudge stroke is in progress
    pickup: Option<SmudgePickup>,
}

impl BrushTool {
    pub fn new(config: BrushConfig) -> Self {
        Self {
            state: StrokeState::Up,
            mask: BrushMask::generate(config.kind, config.radius),
            config,
            pickup: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.config.kind.label()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_down(&self) -> bool {
        self.state != StrokeState::Up
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn mask(&self) -> &BrushMask {
        &self.mask
    }

    pub fn pickup(&self) -> Option<&SmudgePickup> {
        self.pickup.as_ref()
    }

    /// Rebuild the mask after the brush settings changed.
    ///
    /// Ignored mid-stroke: a stroke keeps the mask it started with.
    pub fn settings_changed(&mut self, config: BrushConfig) {
        if self.is_down() || config == self.config {
            return;
        }
        self.mask = BrushMask::generate(config.kind, config.radius);
        self.config = config;
    }

    /// Start a stroke at `(x, y)` and apply its first dab
    pub fn on_pointer_down(&mut self, buffer: &mut PixelBuffer, x: i32, y: i32, config: BrushConfig) {
        self.config = config;
        self.mask = BrushMask::generate(config.kind, config.radius);
        self.pickup = match config.kind {
            BrushKind::Smudge => Some(SmudgePickup::capture(buffer, x, y, config.radius)),
            _ => None,
        };
        self.state = StrokeState::Down;
        debug!("{} stroke started at ({}, {})", self.name(), x, y);
        self.dab(buffer, x, y);
    }

    /// Continue the stroke. Returns `false` (and does nothing) when no stroke is active.
    pub fn on_pointer_move(&mut self, buffer: &mut PixelBuffer, x: i32, y: i32) -> bool {
        if !self.is_down() {
            return false;
        }
        self.state = StrokeState::Dragging;
        self.dab(buffer, x, y);
        true
    }

    pub fn on_pointer_up(&mut self, _x: i32, _y: i32) {
        if self.is_down() {
            debug!("{} stroke finished", self.name());
        }
        self.state = StrokeState::Up;
        self.pickup = None;
    }

    fn dab(&mut self, buffer: &mut PixelBuffer, x: i32, y: i32) {
        match self.pickup.as_mut() {
            Some(pickup) => {
                let radius = self.config.radius;
                if SmudgePickup::out_of_range(buffer, x, y, radius) {
                    pickup.clear();
                }
                apply_brush_smudge(buffer, &self.mask, pickup, x, y);
                // the reservoir follows the cursor
                *pickup = SmudgePickup::capture(buffer, x, y, radius);
            }
            None => apply_brush_stroke(buffer, &self.mask, x, y, self.config.color),
        }
    }
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new(crate::settings::Settings::default().brush())
    }
}
