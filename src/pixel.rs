use serde::{Deserialize, Serialize};

/// 8-bit straight-alpha colour used for canvas storage, brush colour and file I/O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Alpha as a fraction in [0, 1]
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Full-precision colour used while accumulating filter taps.
///
/// Alpha is not stored: every filter writes opaque output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPixel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl FloatPixel {
    pub const ZERO: FloatPixel = FloatPixel { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// `self + other * weight`, the inner step of every tap loop
    #[inline]
    pub fn mul_add(self, other: FloatPixel, weight: f32) -> Self {
        Self {
            r: self.r + other.r * weight,
            g: self.g + other.g * weight,
            b: self.b + other.b * weight,
        }
    }

    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// Clamp-and-round back to 8 bits. Alpha is always 255.
    pub fn to_rgba(self) -> Rgba {
        Rgba::opaque(saturate(self.r), saturate(self.g), saturate(self.b))
    }
}

impl From<Rgba> for FloatPixel {
    fn from(p: Rgba) -> Self {
        Self::new(p.r as f32, p.g as f32, p.b as f32)
    }
}

/// Round a float channel to the nearest 8-bit value, saturating at both ends
#[inline]
pub fn saturate(v: f32) -> u8 {
    // NaN falls through `clamp` unchanged and casts to 0
    v.round().clamp(0.0, 255.0) as u8
}

/// `weight * src + (1 - weight) * dst`, rounded and saturated
#[inline]
pub fn blend_channel(src: u8, dst: u8, weight: f32) -> u8 {
    saturate(weight * src as f32 + (1.0 - weight) * dst as f32)
}
