use crate::pixel::{FloatPixel, Rgba};

/// Row-major RGBA8 image. `pixels.len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single colour
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap existing pixels. Returns `None` when the length doesn't match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Build from packed RGBA8 bytes (4 bytes per pixel, no row padding)
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 4 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Some(Self { width, height, pixels })
    }

    /// Packed RGBA8 bytes, row-major
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Pixel at signed coordinates, `None` when outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Rgba> {
        if self.in_bounds(x, y) {
            let idx = self.index(x as usize, y as usize);
            Some(&mut self.pixels[idx])
        } else {
            None
        }
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Reallocate to new dimensions. The overlapping top-left region is kept,
    /// the rest is filled with `fill`.
    pub fn resize(&mut self, width: usize, height: usize, fill: Rgba) {
        if width == self.width && height == self.height {
            return;
        }
        let mut pixels = vec![fill; width * height];
        let copy_w = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = y * self.width;
            let dst = y * width;
            pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }
}

/// Row-major accumulation buffer. Values are unclamped until [`FloatBuffer::to_pixels`].
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    width: usize,
    height: usize,
    pixels: Vec<FloatPixel>,
}

impl FloatBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![FloatPixel::ZERO; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[FloatPixel] {
        &self.pixels
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> FloatPixel {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, p: FloatPixel) {
        let idx = y * self.width + x;
        self.pixels[idx] = p;
    }

    /// The single clamp-and-convert step back to display pixels (alpha 255)
    pub fn to_pixels(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|p| p.to_rgba()).collect(),
        }
    }
}

impl From<&PixelBuffer> for FloatBuffer {
    fn from(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels.iter().map(|&p| FloatPixel::from(p)).collect(),
        }
    }
}
