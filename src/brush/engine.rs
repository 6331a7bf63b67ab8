use crate::buffer::PixelBuffer;
use crate::pixel::{blend_channel, Rgba};

use super::{cell_position, BrushMask, SmudgePickup};

/// Composite `color` into `buffer` through `mask`, centred at `(cx, cy)`.
///
/// Each covered pixel moves toward the brush colour by
/// `mask weight * color alpha`. Only r/g/b change; the canvas alpha is kept.
/// Mask cells that land outside the buffer are skipped.
pub fn apply_brush_stroke(buffer: &mut PixelBuffer, mask: &BrushMask, cx: i32, cy: i32, color: Rgba) {
    let alpha = color.alpha_f32();
    let side = mask.side();
    let radius = mask.radius();

    for j in 0..side {
        for i in 0..side {
            let weight = mask.weight(i, j);
            if weight <= 0.0 {
                continue;
            }
            let Some(pixel) = cell_position(cx, cy, i, j, radius).and_then(|(x, y)| buffer.get_mut(x, y))
            else {
                continue;
            };
            let opacity = weight * alpha;
            pixel.r = blend_channel(color.r, pixel.r, opacity);
            pixel.g = blend_channel(color.g, pixel.g, opacity);
            pixel.b = blend_channel(color.b, pixel.b, opacity);
        }
    }
}

/// One smudge step at `(cx, cy)`.
///
/// The canvas is first pulled toward the reservoir (weighted by mask weight
/// and the reservoir's alpha), then the reservoir is pulled toward the
/// freshly updated canvas (weighted by mask weight alone), so paint mixes
/// in both directions as the brush moves.
pub fn apply_brush_smudge(
    buffer: &mut PixelBuffer,
    mask: &BrushMask,
    pickup: &mut SmudgePickup,
    cx: i32,
    cy: i32,
) {
    debug_assert_eq!(mask.side(), pickup.side(), "mask and pickup must share a radius");
    let side = mask.side().min(pickup.side());
    let radius = mask.radius();

    for j in 0..side {
        for i in 0..side {
            let Some(pixel) = cell_position(cx, cy, i, j, radius).and_then(|(x, y)| buffer.get_mut(x, y))
            else {
                continue;
            };
            let weight = mask.weight(i, j);
            let held = pickup.cell(i, j);
            let opacity = weight * held.alpha_f32();

            pixel.r = blend_channel(held.r, pixel.r, opacity);
            pixel.g = blend_channel(held.g, pixel.g, opacity);
            pixel.b = blend_channel(held.b, pixel.b, opacity);

            let painted = *pixel;
            let cell = pickup.cell_mut(i, j);
            cell.r = blend_channel(painted.r, cell.r, weight);
            cell.g = blend_channel(painted.g, cell.g, weight);
            cell.b = blend_channel(painted.b, cell.b, weight);
        }
    }
}
