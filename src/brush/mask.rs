use crate::settings::BrushKind;

/// Square grid of blend weights centred on the brush position.
///
/// Side length is `2 * radius + 1`; weights are in [0, 1] and zero outside
/// the brush disc.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushMask {
    radius: u32,
    weights: Vec<f32>,
}

impl BrushMask {
    /// Build the falloff mask for a brush shape.
    ///
    /// Smudge uses the linear falloff; its paint comes from a separate
    /// [`SmudgePickup`](super::SmudgePickup).
    pub fn generate(kind: BrushKind, radius: u32) -> Self {
        let side = (2 * radius + 1) as usize;
        let r = radius as f32;
        let mut weights = vec![0.0; side * side];

        for j in 0..side {
            for i in 0..side {
                let dx = i as f32 - r;
                let dy = j as f32 - r;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance > r {
                    continue;
                }
                weights[j * side + i] = falloff(kind, distance, r);
            }
        }

        Self { radius, weights }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn side(&self) -> usize {
        (2 * self.radius + 1) as usize
    }

    /// Weight at mask cell `(i, j)`, where `(radius, radius)` is the centre
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[j * self.side() + i]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

fn falloff(kind: BrushKind, distance: f32, radius: f32) -> f32 {
    // The centre cell of a radius-0 brush would otherwise be 0/0
    if radius == 0.0 {
        return 1.0;
    }
    let t = distance / radius;
    match kind {
        BrushKind::Constant => 1.0,
        BrushKind::Linear | BrushKind::Smudge => 1.0 - t,
        BrushKind::Quadratic => t * t - 2.0 * t + 1.0,
    }
}
