mod engine;
mod mask;
mod smudge;
mod tool;

pub use engine::{apply_brush_smudge, apply_brush_stroke};
pub use mask::BrushMask;
pub use smudge::SmudgePickup;
pub use tool::{BrushTool, StrokeState};

/// Canvas position of mask cell `(i, j)` for a brush of `radius` centred at
/// `(cx, cy)`. `None` when the position doesn't fit in an `i32`.
#[inline]
pub(crate) fn cell_position(cx: i32, cy: i32, i: usize, j: usize, radius: u32) -> Option<(i32, i32)> {
    let r = radius as i64;
    let x = i32::try_from(cx as i64 + i as i64 - r).ok()?;
    let y = i32::try_from(cy as i64 + j as i64 - r).ok()?;
    Some((x, y))
}
