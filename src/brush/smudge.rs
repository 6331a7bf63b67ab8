use crate::buffer::PixelBuffer;
use crate::pixel::Rgba;

use super::cell_position;

/// Paint reservoir carried by the smudge brush.
///
/// Same shape as the brush mask; cell `(i, j)` holds the colour picked up
/// from canvas position `(cx + i - r, cy + j - r)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SmudgePickup {
    radius: u32,
    cells: Vec<Rgba>,
}

impl SmudgePickup {
    /// An empty (fully transparent) reservoir
    pub fn empty(radius: u32) -> Self {
        let side = (2 * radius + 1) as usize;
        Self {
            radius,
            cells: vec![Rgba::TRANSPARENT; side * side],
        }
    }

    /// Copy the canvas pixels under a brush centred at `(cx, cy)`.
    ///
    /// Cells that fall outside the canvas are transparent. When the centre
    /// lies outside the range the reservoir is allowed to reach, the whole
    /// reservoir is cleared.
    pub fn capture(buffer: &PixelBuffer, cx: i32, cy: i32, radius: u32) -> Self {
        let mut pickup = Self::empty(radius);
        if Self::out_of_range(buffer, cx, cy, radius) {
            return pickup;
        }
        let side = pickup.side();
        for j in 0..side {
            for i in 0..side {
                let Some((x, y)) = cell_position(cx, cy, i, j, radius) else {
                    continue;
                };
                if let Some(p) = buffer.get(x, y) {
                    pickup.cells[j * side + i] = p;
                }
            }
        }
        pickup
    }

    /// True when `(cx, cy)` is outside `[-r, w + r] x [-r, h + r]`
    pub fn out_of_range(buffer: &PixelBuffer, cx: i32, cy: i32, radius: u32) -> bool {
        let r = radius as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        cx < -r
            || cy < -r
            || cx > buffer.width() as i64 + r
            || cy > buffer.height() as i64 + r
    }

    pub fn clear(&mut self) {
        self.cells.fill(Rgba::TRANSPARENT);
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn side(&self) -> usize {
        (2 * self.radius + 1) as usize
    }

    pub fn cell(&self, i: usize, j: usize) -> Rgba {
        self.cells[j * self.side() + i]
    }

    pub(crate) fn cell_mut(&mut self, i: usize, j: usize) -> &mut Rgba {
        let side = self.side();
        &mut self.cells[j * side + i]
    }

    /// True when every cell is transparent black
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&c| c == Rgba::TRANSPARENT)
    }
}
