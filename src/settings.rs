use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pixel::Rgba;

/// Brush falloff shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushKind {
    Constant,
    Linear,
    Quadratic,
    /// Linear falloff that drags picked-up paint along the stroke
    Smudge,
}

impl BrushKind {
    pub const ALL: [BrushKind; 4] = [
        BrushKind::Constant,
        BrushKind::Linear,
        BrushKind::Quadratic,
        BrushKind::Smudge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Linear => "Linear",
            Self::Quadratic => "Quadratic",
            Self::Smudge => "Smudge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    EdgeDetect,
    Blur,
    Scale,
}

impl FilterType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EdgeDetect => "Edge detect",
            Self::Blur => "Blur",
            Self::Scale => "Scale",
        }
    }
}

/// Brush parameters captured when a stroke starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    pub kind: BrushKind,
    pub radius: u32,
    pub color: Rgba,
}

/// A fully-parameterized filter, ready to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    Blur { radius: u32 },
    EdgeDetect { sensitivity: f32 },
    Scale { x: f32, y: f32 },
}

/// Everything the user can tweak in the side panel.
///
/// The core only ever reads snapshots of this; the app shell owns it and
/// persists it between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // settings saved by older builds get defaults for new fields
pub struct Settings {
    pub brush_type: BrushKind,
    pub brush_radius: u32,
    pub brush_color: Rgba,
    pub filter_type: FilterType,
    pub edge_detect_sensitivity: f32,
    pub blur_radius: u32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Last image loaded from disk, used by "Revert Image"
    pub image_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_type: BrushKind::Linear,
            brush_radius: 10,
            brush_color: Rgba::BLACK,
            filter_type: FilterType::EdgeDetect,
            edge_detect_sensitivity: 0.5,
            blur_radius: 10,
            scale_x: 2.0,
            scale_y: 2.0,
            image_path: None,
        }
    }
}

impl Settings {
    pub fn brush(&self) -> BrushConfig {
        BrushConfig {
            kind: self.brush_type,
            radius: self.brush_radius,
            color: self.brush_color,
        }
    }

    pub fn filter(&self) -> FilterKind {
        match self.filter_type {
            FilterType::EdgeDetect => FilterKind::EdgeDetect {
                sensitivity: self.edge_detect_sensitivity,
            },
            FilterType::Blur => FilterKind::Blur {
                radius: self.blur_radius,
            },
            FilterType::Scale => FilterKind::Scale {
                x: self.scale_x,
                y: self.scale_y,
            },
        }
    }
}
