/// How a sample index outside `[0, len)` is mapped back into range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Mirror across the nearest edge, repeating the edge sample: `B A | A B C D | D C`
    #[default]
    Reflect,
    /// Clamp to the nearest edge sample
    Repeat,
    /// Wrap around to the opposite edge
    Wrap,
}

impl Boundary {
    /// Map `index` into `[0, len)`. `len` must be non-zero.
    #[inline]
    pub fn resolve(self, index: i64, len: usize) -> usize {
        debug_assert!(len > 0);
        let n = len as i64;
        if (0..n).contains(&index) {
            return index as usize;
        }
        match self {
            Self::Reflect => {
                // mirror has period 2n, which also covers indices far outside the buffer
                let m = index.rem_euclid(2 * n);
                (if m < n { m } else { 2 * n - 1 - m }) as usize
            }
            Self::Repeat => index.clamp(0, n - 1) as usize,
            Self::Wrap => index.rem_euclid(n) as usize,
        }
    }
}
